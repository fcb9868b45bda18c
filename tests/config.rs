#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use taskdash::libs::config::{Config, TaskConfig, DEFAULT_IMPORT_ERROR_LIMIT};
    use taskdash::libs::task::DEFAULT_DUE_DAYS;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
        path: PathBuf,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let path = temp_dir.path().join("config.json");
            ConfigTestContext { _temp_dir: temp_dir, path }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.tasks.is_none());

        let tasks = config.tasks_or_default();
        assert_eq!(tasks.default_due_days, DEFAULT_DUE_DAYS);
        assert_eq!(tasks.import_error_limit, DEFAULT_IMPORT_ERROR_LIMIT);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_nonexistent_config(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            tasks: Some(TaskConfig {
                default_due_days: 14,
                import_error_limit: 10,
            }),
        };
        config.save_to(&ctx.path).unwrap();

        let read = Config::read_from(&ctx.path).unwrap();
        assert_eq!(read, config);
        assert_eq!(read.tasks_or_default().default_due_days, 14);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unconfigured_modules_are_omitted(ctx: &mut ConfigTestContext) {
        Config::default().save_to(&ctx.path).unwrap();

        let content = fs::read_to_string(&ctx.path).unwrap();
        assert!(!content.contains("tasks"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_empty_object(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.path, "{}").unwrap();

        let config = Config::read_from(&ctx.path).unwrap();
        assert!(config.tasks.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_invalid_config(ctx: &mut ConfigTestContext) {
        fs::write(&ctx.path, "not json").unwrap();
        assert!(Config::read_from(&ctx.path).is_err());
    }
}
