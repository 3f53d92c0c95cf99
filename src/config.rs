// src/config.rs
use crate::models::PasswordConfig;
use directories::ProjectDirs;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use toml;

const HISTORY_FILE_NAME: &str = "password_history.json";

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Config {
    /// Generation settings used when the CLI or TUI does not override them.
    pub defaults: PasswordConfig,
    /// Override for the history file location. When unset the history lives
    /// in the platform data directory.
    pub history_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            defaults: PasswordConfig::default(),
            history_file: None,
        }
    }
}

impl Config {
    /// Resolves the history file this run should use.
    pub fn history_path(&self) -> PathBuf {
        self.history_file
            .clone()
            .unwrap_or_else(default_history_path)
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "PassGenRS", "PassGenRS")
}

fn get_config_path() -> Option<PathBuf> {
    project_dirs().map(|proj_dirs| proj_dirs.config_dir().join("passgen_config.toml"))
}

fn default_history_path() -> PathBuf {
    match project_dirs() {
        Some(proj_dirs) => proj_dirs.data_dir().join(HISTORY_FILE_NAME),
        None => {
            warn!("Could not determine data directory. Using history file in the working directory.");
            PathBuf::from(HISTORY_FILE_NAME)
        }
    }
}

fn save_default_config(config_path: &Path, config: &Config) -> Result<(), String> {
    info!("Attempting to save default config to {:?}", config_path);
    if let Some(parent_dir) = config_path.parent() {
        if !parent_dir.exists() {
            fs::create_dir_all(parent_dir)
                .map_err(|e| format!("Failed to create config directory {:?}: {}", parent_dir, e))?;
            info!("Created config directory: {:?}", parent_dir);
        }
    }

    let toml_string = toml::to_string_pretty(config)
        .map_err(|e| format!("Failed to serialize default config to TOML: {}", e))?;

    let mut file = fs::File::create(config_path)
        .map_err(|e| format!("Failed to create default config file {:?}: {}", config_path, e))?;

    file.write_all(toml_string.as_bytes())
        .map_err(|e| format!("Failed to write default config to {:?}: {}", config_path, e))?;

    info!("Saved default configuration to {:?}", config_path);
    Ok(())
}

/// Loads the app configuration from the platform config directory,
/// creating a default one on first run.
pub fn load_config() -> Config {
    match get_config_path() {
        Some(config_path) => load_config_from(&config_path),
        None => {
            warn!("Could not determine config directory. Using default configuration.");
            Config::default()
        }
    }
}

/// Loads the configuration from a specific file, creating it with defaults
/// when missing. Read or parse failures fall back to defaults with a logged
/// warning.
pub fn load_config_from(config_path: &Path) -> Config {
    if config_path.exists() {
        info!("Loading configuration from {:?}", config_path);
        match fs::read_to_string(config_path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(loaded_config) => {
                    info!("Configuration loaded successfully.");
                    return loaded_config;
                }
                Err(e) => {
                    warn!(
                        "Failed to parse config file at {:?}: {}. Using default configuration.",
                        config_path, e
                    );
                }
            },
            Err(e) => {
                warn!(
                    "Failed to read config file at {:?}: {}. Using default configuration.",
                    config_path, e
                );
            }
        }
        Config::default()
    } else {
        info!(
            "Config file not found at {:?}. Creating and using default configuration.",
            config_path
        );
        let default_config = Config::default();
        if let Err(e) = save_default_config(config_path, &default_config) {
            warn!("Failed to save default configuration: {}", e);
        }
        default_config
    }
}
