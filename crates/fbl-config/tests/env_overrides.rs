use figment::Jail;
use fbl_config::FeedbackLoopConfig;
use pretty_assertions::assert_eq;

#[test]
fn env_vars_fill_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("FEEDBACK_LOOP_API__BASE_URL", "https://env.example.gov/");
        jail.set_env("FEEDBACK_LOOP_API__AUTHENTICATE_HEADER", "env-secret");
        jail.set_env("FEEDBACK_LOOP_API__PER_PAGE", "5");
        jail.set_env("FEEDBACK_LOOP_REVIEWER__UID", "12");

        let config = FeedbackLoopConfig::load_from(jail.directory()).expect("config loads");
        assert_eq!(config.api.base_url, "https://env.example.gov/");
        assert_eq!(config.api.authenticate_header, "env-secret");
        assert_eq!(config.api.per_page, 5);
        assert_eq!(config.reviewer.uid, 12);
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        jail.create_dir(".feedback-loop")?;
        jail.create_file(
            ".feedback-loop/config.toml",
            "[cms]\nflag_id = \"from_toml\"\n",
        )?;
        jail.set_env("FEEDBACK_LOOP_CMS__FLAG_ID", "from_env");

        let config = FeedbackLoopConfig::load_from(jail.directory()).expect("config loads");
        assert_eq!(config.cms.flag_id, "from_env");
        Ok(())
    });
}

#[test]
fn single_underscore_does_not_reach_nested_section() {
    Jail::expect_with(|jail| {
        jail.set_env("FEEDBACK_LOOP_API_BASE_URL", "https://typo.example.gov/");

        let config = FeedbackLoopConfig::load_from(jail.directory()).expect("config loads");
        assert!(config.api.base_url.is_empty());
        Ok(())
    });
}
