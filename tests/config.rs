#[cfg(test)]
mod tests {
    use challenge_board::libs::config::{Config, CONFIG_FILE_NAME, DEFAULT_SOURCE, SOURCE_ENV_VAR};
    use challenge_board::libs::data_storage::DataStorage;
    use chrono::FixedOffset;
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Serialises tests that point HOME at their own temporary directory.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Test context to ensure a clean environment for each config test.
    /// It sets up a temporary directory to act as the user's home/appdata directory.
    struct ConfigTestContext {
        _lock: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
        source: String,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            // Mock the home/appdata directory for cross-platform compatibility.
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            std::env::remove_var(SOURCE_ENV_VAR);
            ConfigTestContext {
                _lock: lock,
                _temp_dir: temp_dir,
                source: "https://example.com/records.json".to_string(),
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_default_config(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert_eq!(config.source, DEFAULT_SOURCE);
        assert!(config.show_failure_reason);
        assert!(config.utc_offset.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(_ctx: &mut ConfigTestContext) {
        // When no config file exists, read() should return the default config.
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            source: ctx.source.clone(),
            show_failure_reason: false,
            utc_offset: Some(540),
        };
        config.save().unwrap();
        let read_config = Config::read().unwrap();
        assert_eq!(read_config, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_config_uses_defaults(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(path, r#"{ "utc_offset": -300 }"#).unwrap();

        let config = Config::read().unwrap();
        assert_eq!(config.source, DEFAULT_SOURCE);
        assert!(config.show_failure_reason);
        assert_eq!(config.utc_offset, Some(-300));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_corrupted_config_is_error(_ctx: &mut ConfigTestContext) {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        std::fs::write(path, "{ source: ").unwrap();
        assert!(Config::read().is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_delete_config(ctx: &mut ConfigTestContext) {
        assert!(!Config::delete().unwrap());

        Config {
            source: ctx.source.clone(),
            ..Config::default()
        }
        .save()
        .unwrap();
        assert!(Config::delete().unwrap());
        assert_eq!(Config::read().unwrap(), Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_resolve_source_precedence(ctx: &mut ConfigTestContext) {
        let config = Config {
            source: ctx.source.clone(),
            ..Config::default()
        };
        assert_eq!(config.resolve_source(None), ctx.source);

        std::env::set_var(SOURCE_ENV_VAR, "env.json");
        assert_eq!(config.resolve_source(None), "env.json");
        assert_eq!(config.resolve_source(Some("flag.json")), "flag.json");
        assert_eq!(config.resolve_source(Some("  ")), "env.json");

        std::env::set_var(SOURCE_ENV_VAR, " ");
        assert_eq!(config.resolve_source(None), ctx.source);
        std::env::remove_var(SOURCE_ENV_VAR);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_display_offset(_ctx: &mut ConfigTestContext) {
        let mut config = Config::default();
        assert_eq!(config.display_offset(), None);

        config.utc_offset = Some(540);
        assert_eq!(config.display_offset(), FixedOffset::east_opt(9 * 3600));

        config.utc_offset = Some(-24 * 60);
        assert_eq!(config.display_offset(), None);

        config.utc_offset = Some(i32::MAX);
        assert_eq!(config.display_offset(), None);
    }
}
