//! Extension manifest loading
//!
//! The manifest is the registration table the command menu is built from:
//! `[[panel]]`, `[[view]]`, `[[setting]]` and `[[action]]` entries plus an
//! optional `[shortcuts]` table mapping action ids to shortcut titles.

use devtools_command_menu::{ActionDescriptor, Extensions};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while loading a manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(flatten)]
    pub extensions: Extensions,
    #[serde(default, rename = "action")]
    pub actions: Vec<ActionDescriptor>,
    #[serde(default)]
    pub shortcuts: HashMap<String, String>,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let manifest: Manifest = toml::from_str(&content).map_err(|source| ManifestError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!(
            "Loaded manifest {}: {} panels, {} views, {} settings, {} actions",
            path.display(),
            manifest.extensions.panels.len(),
            manifest.extensions.views.len(),
            manifest.extensions.settings.len(),
            manifest.actions.len()
        );

        Ok(manifest)
    }
}
