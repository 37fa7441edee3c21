use super::data_storage::{APP_NAME, APP_VERSION};
use super::loader::LoadError;
use reqwest::{
    header::{HeaderMap, HeaderValue, CACHE_CONTROL, PRAGMA},
    Client,
};

/// Thin wrapper around the HTTP client used to fetch the records document.
pub struct Http {
    client: Client,
}

impl Http {
    pub fn new() -> Result<Self, LoadError> {
        let client = Client::builder().user_agent(format!("{}/{}", APP_NAME, APP_VERSION)).build()?;
        Ok(Self { client })
    }

    /// Fetches `url` bypassing caches and returns the body text.
    ///
    /// Any non-2xx response becomes [`LoadError::Status`].
    pub async fn fetch_text(&self, url: &str) -> Result<String, LoadError> {
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

        let res = self.client.get(url).headers(headers).send().await?;
        let status = res.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        Ok(res.text().await?)
    }
}
