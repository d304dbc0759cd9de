use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub gallery_path: PathBuf,
    pub installed_path: PathBuf,
    pub log_path: PathBuf,
    pub lookup_delay_ms: u64,
    pub search_page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        let dir = config_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            gallery_path: dir.join("gallery.toml"),
            installed_path: dir.join("installed.toml"),
            log_path: dir.join("extpal.log"),
            lookup_delay_ms: 150,
            search_page_size: 50,
        }
    }
}

pub fn config_dir() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".config");
        path.push("extpal");
        path
    })
}

impl Config {
    /// Load `~/.config/extpal/config.toml`, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn load() -> Self {
        match config_dir().map(|dir| dir.join("config.toml")) {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    pub fn load_from(path: &std::path::Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(content) => match toml::from_str::<Config>(&content) {
                    Ok(config) => return config,
                    Err(e) => tracing::warn!("ignoring malformed config at {path:?}: {e}"),
                },
                Err(e) => tracing::warn!("could not read config at {path:?}: {e}"),
            }
        }
        Self::default()
    }
}
