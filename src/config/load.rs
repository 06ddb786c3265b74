use std::{env, path::PathBuf};

use tracing::{debug, warn};

use super::schema::{PlaylistSettings, Settings};

/// Configuration loading helpers.
///
/// `Settings::load` layers environment variables (prefix `TRACKLIST__`) over an
/// optional config file and falls back to struct defaults.
impl Settings {
    /// Load settings from environment and optional config file.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let config_path = resolve_config_path();

        let mut builder = ::config::Config::builder();

        if let Some(path) = &config_path {
            debug!(path = %path.display(), "reading config file");
            builder = builder.add_source(::config::File::from(path.as_path()).required(false));
        }

        builder = builder.add_source(
            ::config::Environment::with_prefix("TRACKLIST")
                .separator("__")
                .try_parsing(true),
        );

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }

    /// Like [`Settings::load`], but never fails: load and validation errors
    /// are logged and defaults are used instead.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(s) => {
                if let Err(msg) = s.validate() {
                    warn!("invalid config, using defaults: {msg}");
                    Self::default()
                } else {
                    s
                }
            }
            Err(e) => {
                warn!("failed to load config, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Parse settings from an in-memory TOML document. Missing keys keep
    /// their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Perform basic validation checks on loaded settings.
    pub fn validate(&self) -> Result<(), String> {
        let max = PlaylistSettings::MAX_CAPACITY;
        if self.playlist.capacity > max {
            return Err(format!(
                "playlist.capacity must be <= {max} (got {})",
                self.playlist.capacity
            ));
        }
        Ok(())
    }
}

/// Resolve the config path from `TRACKLIST_CONFIG_PATH` or XDG defaults.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("TRACKLIST_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

/// Compute the default config path under `$XDG_CONFIG_HOME/tracklist/config.toml`
/// or `~/.config/tracklist/config.toml` when `XDG_CONFIG_HOME` is not set.
pub fn default_config_path() -> Option<PathBuf> {
    let config_home = if let Some(xdg) = env::var_os("XDG_CONFIG_HOME") {
        Some(PathBuf::from(xdg))
    } else {
        env::var_os("HOME").map(|home| PathBuf::from(home).join(".config"))
    };

    config_home.map(|d| d.join("tracklist").join("config.toml"))
}
