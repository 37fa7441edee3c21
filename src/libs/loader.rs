//! Loading the records document.
//!
//! The document is read once per run, either from the local filesystem or
//! over HTTP(S). This is the only fallible, asynchronous step of the board:
//! any failure here aborts the whole render and surfaces as one message,
//! while problems inside individual records never do.
//!
//! ## Failure Messages
//!
//! | Cause                      | Text                         |
//! |----------------------------|------------------------------|
//! | Non-2xx HTTP response      | `(404) Not Found`            |
//! | Transport error            | reqwest error text           |
//! | Unreadable file            | I/O error text               |
//! | Body is not valid JSON     | serde_json error text        |

use super::http::Http;
use super::record::RecordsDocument;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    #[error("({code}) {reason}")]
    Status { code: u16, reason: String },
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
}

/// Where the records document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordsSource {
    File(PathBuf),
    Url(String),
}

impl RecordsSource {
    /// `http://` and `https://` sources are fetched, everything else is a file path.
    pub fn parse(source: &str) -> Self {
        let source = source.trim();
        let lower = source.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            RecordsSource::Url(source.to_string())
        } else {
            RecordsSource::File(PathBuf::from(source))
        }
    }

    pub async fn read(&self) -> Result<String, LoadError> {
        match self {
            RecordsSource::File(path) => Ok(tokio::fs::read_to_string(path).await?),
            RecordsSource::Url(url) => Http::new()?.fetch_text(url).await,
        }
    }
}

impl fmt::Display for RecordsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordsSource::File(path) => write!(f, "{}", path.display()),
            RecordsSource::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Reads and parses the document. A missing or non-array `records` field is
/// an empty document, not an error.
pub async fn load(source: &RecordsSource) -> Result<RecordsDocument, LoadError> {
    let body = source.read().await?;
    Ok(RecordsDocument::from_json(&body)?)
}
