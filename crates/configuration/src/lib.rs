use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{ApiSettings, RunMode, Settings, DEV_PROXY_BASE_URL};

/// Loads the application configuration.
///
/// Reads the optional `kairos.toml` file from the working directory, then
/// applies `KAIROS_`-prefixed environment overrides (`__` as the nesting
/// separator, so `KAIROS_API__BASE_URL` maps to `api.base_url`), and
/// deserializes the result into our strongly-typed `Settings` struct.
/// Both sources absent yields the defaults (development mode, no base URL).
pub fn load_settings() -> Result<Settings, ConfigError> {
    load_settings_from("kairos")
}

/// Same as [`load_settings`] but with an explicit file stem, so tests can
/// point it at a scratch file.
pub fn load_settings_from(file_stem: &str) -> Result<Settings, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name(file_stem).required(false))
        .add_source(config::Environment::with_prefix("KAIROS").separator("__"))
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;

    Ok(settings)
}
