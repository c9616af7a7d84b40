use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/stemix/config.toml` or `~/.config/stemix/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `STEMIX__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub playback: PlaybackSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            library: LibrarySettings::default(),
            playback: PlaybackSettings::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Directory scanned for paired stem files. Overridden by the first
    /// CLI argument when one is given.
    pub directory: PathBuf,
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("stems"),
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Speed multiplier applied once at playback start. 1.0 plays stems
    /// unmodified; anything else resamples (pitch and speed change).
    pub speed: f32,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self { speed: 1.0 }
    }
}
