use std::{env, path::PathBuf};

use super::schema::Settings;

impl Settings {
    /// Build settings from the layered sources: `STEMIX__`-prefixed env vars
    /// override the TOML file (when one exists), which overrides the struct
    /// defaults. A missing file is fine; every field has a default.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("STEMIX")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Sanity-check values that deserialization alone cannot reject.
    pub fn validate(&self) -> Result<(), String> {
        if !(self.playback.speed > 0.0) {
            return Err("playback.speed must be > 0".to_string());
        }
        if self.library.extensions.is_empty() {
            return Err("library.extensions must name at least one extension".to_string());
        }
        Ok(())
    }
}

/// Where to look for the config file. `STEMIX_CONFIG_PATH` wins when set,
/// pointing at an exact file; otherwise fall back to the XDG location.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("STEMIX_CONFIG_PATH") {
        let p = PathBuf::from(p);
        return Some(p);
    }
    default_config_path()
}

/// `$XDG_CONFIG_HOME/stemix/config.toml`, or `~/.config/stemix/config.toml`
/// when `XDG_CONFIG_HOME` is unset. `None` only when `HOME` is missing too.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".config"))
    } else {
        None
    };

    config_home.map(|d| d.join("stemix").join("config.toml"))
}
