use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Output file used when neither the CLI, the environment nor the config file set one.
pub const DEFAULT_OUTPUT_FILE: &str = "./anki_cards.csv";

/// Defaults loaded from `~/.config/url2anki/config.toml`.
///
/// Command-line flags and `URL2ANKI_*` environment variables take
/// precedence over every field here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Url2AnkiConfig {
    /// File to export flashcards to; the suffix (`.json` / `.csv`) picks the format.
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,
    /// Show the cards and ask for confirmation before exporting.
    #[serde(default)]
    pub preview: bool,
    /// Enable debug-level logging.
    #[serde(default)]
    pub debug: bool,
}

fn default_output_file() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

impl Default for Url2AnkiConfig {
    fn default() -> Self {
        Self {
            output_file: default_output_file(),
            preview: false,
            debug: false,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("url2anki")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Config together with where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Url2AnkiConfig,
    pub path: PathBuf,
    /// True when the file did not exist and defaults were written to `path`.
    pub created: bool,
}

/// Load configuration from the XDG config dir, creating a default file if none exists.
pub fn load_or_init() -> Result<LoadedConfig> {
    load_or_init_at(&config_path()?)
}

/// Load configuration from `path`, writing defaults there first if it is missing.
///
/// Does not log; the caller decides what to report once logging is set up.
pub fn load_or_init_at(path: &Path) -> Result<LoadedConfig> {
    if !path.exists() {
        let default_cfg = Url2AnkiConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write config {}", path.display()))?;
        return Ok(LoadedConfig {
            config: default_cfg,
            path: path.to_path_buf(),
            created: true,
        });
    }

    Ok(LoadedConfig {
        config: load_from(path)?,
        path: path.to_path_buf(),
        created: false,
    })
}

/// Load configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<Url2AnkiConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: Url2AnkiConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    Ok(cfg)
}
