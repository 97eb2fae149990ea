use std::path::PathBuf;

use anyhow::Context;
use prep_config::PrepConfig;

use crate::cli::GlobalFlags;

/// Load `.env` and the layered configuration.
pub fn load_config() -> anyhow::Result<PrepConfig> {
    PrepConfig::load_with_dotenv().context("failed to load prepdeck configuration")
}

/// Saved-questions file: `--store` wins over configuration.
pub fn store_path(flags: &GlobalFlags, config: &PrepConfig) -> PathBuf {
    flags.store.as_deref().map_or_else(
        || PathBuf::from(&config.store.saved_questions_path),
        PathBuf::from,
    )
}

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &PrepConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &PrepConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let mut warnings = Vec::new();

    let tagger_defaults = !config.tagger.overrides_keywords()
        && config.tagger.company.is_empty()
        && config.tagger.role.is_empty();
    if tagger_defaults && has_single_underscore_key(&env_keys, "PREPDECK_TAGGER") {
        warnings.push(
            "Tagger config appears default while PREPDECK_TAGGER* env vars exist. Use double underscores (example: PREPDECK_TAGGER__COMPANY)."
                .to_string(),
        );
    }

    if has_single_underscore_key(&env_keys, "PREPDECK_STORE") {
        warnings.push(
            "PREPDECK_STORE* env vars exist without a section separator. Use double underscores (example: PREPDECK_STORE__SAVED_QUESTIONS_PATH)."
                .to_string(),
        );
    }

    warnings
}

fn has_single_underscore_key(keys: &[String], prefix: &str) -> bool {
    keys.iter().any(|key| {
        key.strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('_') && !rest.starts_with("__"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;

    fn env(keys: &[&str]) -> Vec<(String, String)> {
        keys.iter().map(|k| ((*k).to_string(), "x".to_string())).collect()
    }

    fn flags(store: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: false,
            verbose: false,
            store: store.map(str::to_string),
        }
    }

    #[test]
    fn warns_on_single_underscore_tagger_key() {
        let warnings =
            collect_unconfigured_warnings(&PrepConfig::default(), env(&["PREPDECK_TAGGER_COMPANY"]));
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("PREPDECK_TAGGER__COMPANY"));
    }

    #[test]
    fn double_underscore_keys_are_fine() {
        let warnings = collect_unconfigured_warnings(
            &PrepConfig::default(),
            env(&["PREPDECK_TAGGER__COMPANY", "PREPDECK_STORE__SAVED_QUESTIONS_PATH", "PREPDECK_LOG"]),
        );
        assert!(warnings.is_empty());
    }

    #[test]
    fn store_flag_overrides_config() {
        let config = PrepConfig::default();
        assert_eq!(
            store_path(&flags(Some("/tmp/saved.json")), &config),
            PathBuf::from("/tmp/saved.json")
        );
        assert_eq!(
            store_path(&flags(None), &config),
            PathBuf::from(".prepdeck/saved_questions.json")
        );
    }
}
