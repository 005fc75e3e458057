use fbl_config::FeedbackLoopConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &FeedbackLoopConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &FeedbackLoopConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.api.is_configured() && has_env_prefix(&env_keys, "FEEDBACK_LOOP_API") {
        warnings.push(
            "API config appears default while FEEDBACK_LOOP_API* env vars exist. Use double underscores (example: FEEDBACK_LOOP_API__BASE_URL)."
                .to_string(),
        );
    }

    if !config.cms.is_configured() && has_env_prefix(&env_keys, "FEEDBACK_LOOP_CMS") {
        warnings.push(
            "CMS config appears default while FEEDBACK_LOOP_CMS* env vars exist. Use double underscores (example: FEEDBACK_LOOP_CMS__DATABASE_PATH)."
                .to_string(),
        );
    }

    if !config.reviewer.is_configured() && has_env_prefix(&env_keys, "FEEDBACK_LOOP_REVIEWER") {
        warnings.push(
            "Reviewer config appears default while FEEDBACK_LOOP_REVIEWER* env vars exist. Use double underscores (example: FEEDBACK_LOOP_REVIEWER__UID)."
                .to_string(),
        );
    }

    warnings
}

fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| key.starts_with(prefix))
}
