//! Context plumbing for kit-wide [`UiConfig`] defaults.

use leptos::*;
use ui_core_headless::UiConfig;

/// Makes `config` the default source for every primitive below the current owner.
pub fn provide_ui_config(config: UiConfig) {
    provide_context(config);
}

/// Returns the provided config, or the built-in defaults when none was provided.
pub fn use_ui_config() -> UiConfig {
    use_context::<UiConfig>().unwrap_or_default()
}

/// Parses a JSON config document, falling back to defaults when it is rejected.
pub fn load_ui_config(raw: &str) -> UiConfig {
    match UiConfig::from_json_str(raw) {
        Ok(config) => config,
        Err(err) => {
            logging::warn!("ui config load failed: {err}");
            UiConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn rejected_config_falls_back_to_defaults() {
        assert_eq!(load_ui_config("not json"), UiConfig::default());
        assert_eq!(
            load_ui_config(r#"{ "table": { "page_size": 0 } }"#),
            UiConfig::default()
        );
    }

    #[test]
    fn accepted_config_is_returned() {
        let config = load_ui_config(r#"{ "pagination": { "max_visible": 7 } }"#);
        assert_eq!(config.pagination.max_visible, 7);
    }

    #[test]
    fn missing_context_uses_defaults() {
        let runtime = create_runtime();
        assert_eq!(use_ui_config(), UiConfig::default());
        runtime.dispose();
    }
}
