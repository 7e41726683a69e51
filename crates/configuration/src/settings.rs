use serde::Deserialize;

/// The base URL requests take in development: the local reverse proxy that
/// fronts the backend services.
pub const DEV_PROXY_BASE_URL: &str = "http://127.0.0.1:3000/api";

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api: ApiSettings,
}

/// Which deployment mode the client runs in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    #[default]
    Development,
    Production,
}

/// Settings for the API gateway client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiSettings {
    /// The deployment mode. Development always routes through the local proxy.
    #[serde(default)]
    pub mode: RunMode,
    /// Externally configured base URL, honored outside development.
    #[serde(default)]
    pub base_url: Option<String>,
}

impl ApiSettings {
    /// Resolves the base URL all requests are issued against. Called once at
    /// client construction, never per request.
    ///
    /// In development the local proxy prefix wins unconditionally; in any
    /// other mode the configured `base_url` is used, falling back to the same
    /// proxy prefix when unset.
    pub fn resolve_base_url(&self) -> String {
        match self.mode {
            RunMode::Development => DEV_PROXY_BASE_URL.to_string(),
            RunMode::Production => self
                .base_url
                .clone()
                .unwrap_or_else(|| DEV_PROXY_BASE_URL.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn development_ignores_configured_base_url() {
        let settings = ApiSettings {
            mode: RunMode::Development,
            base_url: Some("https://timing.example.com/api".to_string()),
        };
        assert_eq!(settings.resolve_base_url(), DEV_PROXY_BASE_URL);
    }

    #[test]
    fn production_uses_configured_base_url() {
        let settings = ApiSettings {
            mode: RunMode::Production,
            base_url: Some("https://timing.example.com/api".to_string()),
        };
        assert_eq!(
            settings.resolve_base_url(),
            "https://timing.example.com/api"
        );
    }

    #[test]
    fn production_falls_back_to_dev_proxy_when_unset() {
        let settings = ApiSettings {
            mode: RunMode::Production,
            base_url: None,
        };
        assert_eq!(settings.resolve_base_url(), DEV_PROXY_BASE_URL);
    }
}
