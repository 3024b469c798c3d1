use crate::model::ThemeName;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

// --- CLI Arguments ---

#[derive(Parser, Debug)]
#[command(name = "wishtui", about = "Personal Wishlist Terminal")]
pub struct CliArgs {
    /// Color theme: dark, light
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory for the wishlist database and photos
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

// --- Config File ---

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

// --- Path Helpers ---

pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wishtui")
}

pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wishtui")
}

pub fn prefs_db_path(data_dir: &PathBuf) -> PathBuf {
    let _ = fs::create_dir_all(data_dir);
    data_dir.join("wishes.db")
}

pub fn photos_dir(data_dir: &PathBuf) -> PathBuf {
    data_dir.join("photos")
}

// --- Load Config ---

pub fn load_config(path: Option<&PathBuf>) -> ConfigFile {
    let path = path.cloned().unwrap_or_else(config_file_path);
    fs::read_to_string(&path)
        .ok()
        .and_then(|s| toml::from_str(&s).ok())
        .unwrap_or_default()
}

// --- Resolve ---

pub struct ResolvedConfig {
    pub theme: Option<ThemeName>,
    pub data_dir: PathBuf,
}

pub fn resolve(args: &CliArgs, config: &ConfigFile) -> ResolvedConfig {
    let theme = args
        .theme
        .as_deref()
        .or(config.theme.as_deref())
        .map(ThemeName::from_str);

    let data_dir = args
        .data_dir
        .clone()
        .or_else(|| config.data_dir.clone())
        .unwrap_or_else(default_data_dir);

    ResolvedConfig { theme, data_dir }
}
