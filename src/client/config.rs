//! Build-time configuration of the administrators panel.
//!
//! The panel runs in the browser, so settings are baked in at compile time from
//! environment variables and cargo features rather than read at startup.

use std::sync::OnceLock;

use crate::client::{
    constant::ADMIN_PATH_PREFIX,
    i18n::Locale,
};

/// Panel settings, read through [`panel_config`] by the app root and the REST helpers.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelConfig {
    /// Origin prepended to every REST path. Empty means same origin.
    pub api_base: String,
    /// Locale the strings are rendered in.
    pub locale: Locale,
    /// Route prefix of the admin list and form screens.
    pub admin_path_prefix: &'static str,
}

impl PanelConfig {
    /// Builds the configuration from `ADMINISTRATORS_API_BASE` and
    /// `ADMINISTRATORS_LOCALE` captured at compile time.
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("ADMINISTRATORS_API_BASE"),
            option_env!("ADMINISTRATORS_LOCALE"),
        )
    }

    fn from_values(api_base: Option<&str>, locale: Option<&str>) -> Self {
        let locale = match locale.map(str::parse::<Locale>) {
            Some(Ok(locale)) => locale,
            Some(Err(err)) => {
                dioxus_logger::tracing::warn!("{}, falling back to {}", err, Locale::default());
                Locale::default()
            }
            None => Locale::default(),
        };

        Self {
            api_base: api_base.unwrap_or_default().trim_end_matches('/').to_string(),
            locale,
            admin_path_prefix: ADMIN_PATH_PREFIX,
        }
    }

    /// Joins a REST path onto the configured origin.
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

static CONFIG: OnceLock<PanelConfig> = OnceLock::new();

/// Process-wide configuration, built from the environment on first use.
pub fn panel_config() -> &'static PanelConfig {
    CONFIG.get_or_init(PanelConfig::from_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_same_origin_and_russian() {
        let config = PanelConfig::default();
        assert_eq!(config.api_base, "");
        assert_eq!(config.locale, Locale::Ru);
        assert_eq!(config.api_url("/admin/admins"), "/admin/admins");
    }

    #[test]
    fn trims_trailing_slash_of_api_base() {
        let config = PanelConfig::from_values(Some("https://api.example.com/"), Some("en"));
        assert_eq!(
            config.api_url("/admin/rbac/roles"),
            "https://api.example.com/admin/rbac/roles"
        );
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn process_wide_config_is_built_once_from_env() {
        let first = panel_config();
        assert!(std::ptr::eq(first, panel_config()));
        assert_eq!(*first, PanelConfig::from_env());
    }

    #[test]
    fn unknown_locale_falls_back_to_default() {
        let config = PanelConfig::from_values(None, Some("fr"));
        assert_eq!(config.locale, Locale::Ru);
    }
}
