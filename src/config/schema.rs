use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/tracklist/config.toml` or `~/.config/tracklist/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `TRACKLIST__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub playlist: PlaylistSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlaylistSettings {
    /// Maximum number of tracks a new playlist can hold.
    ///
    /// Zero is allowed; values above [`PlaylistSettings::MAX_CAPACITY`] fail validation.
    pub capacity: usize,
}

impl PlaylistSettings {
    /// Largest capacity accepted from configuration. The slot buffer is
    /// allocated up front, so this bounds the allocation.
    pub const MAX_CAPACITY: usize = 1 << 20;
}

impl Default for PlaylistSettings {
    fn default() -> Self {
        Self { capacity: 100 }
    }
}
