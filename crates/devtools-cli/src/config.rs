use devtools_command_menu::SettingValue;
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, env, path::PathBuf};

/// Application configuration loaded from devtools-cli.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Extension manifest describing panels, views, settings and actions
    #[serde(default = "default_manifest")]
    pub manifest: String,
    /// Maximum number of ranked commands to print
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Default case sensitivity for content search
    #[serde(default)]
    pub case_sensitive: bool,
    /// Initial setting values
    #[serde(default)]
    pub settings: HashMap<String, SettingValue>,
}

fn default_manifest() -> String {
    "devtools-manifest.toml".to_string()
}

fn default_max_results() -> usize {
    20
}

impl Default for Config {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            max_results: default_max_results(),
            case_sensitive: false,
            settings: HashMap::new(),
        }
    }
}

impl Config {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        const CONFIG_FILE: &str = "devtools-cli.toml";

        // Try current directory first
        if let Ok(content) = std::fs::read_to_string(CONFIG_FILE)
            && let Ok(config) = toml::from_str(&content)
        {
            log::debug!("Loaded config from {}", CONFIG_FILE);
            return config;
        }

        // Try home directory
        if let Some(home) = env::var_os("HOME") {
            let home_config = PathBuf::from(home).join(format!(".{}", CONFIG_FILE));
            if let Ok(content) = std::fs::read_to_string(&home_config)
                && let Ok(config) = toml::from_str(&content)
            {
                log::debug!("Loaded config from {}", home_config.display());
                return config;
            }
        }

        log::debug!("Using default config");
        Self::default()
    }
}
