//! Extension descriptors and the host collaborators commands act upon

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;

/// View location that marks a view as living in the drawer
pub const DRAWER_VIEW_LOCATION: &str = "drawer-view";

/// Value stored in a setting
pub type SettingValue = serde_json::Value;

/// A panel that can be revealed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelDescriptor {
    /// View name passed to the view manager
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub tags: String,
}

/// A view declared by an extension
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewDescriptor {
    pub id: String,
    pub title: String,
    /// Where the view is hosted; only drawer views become commands
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub tags: String,
}

impl ViewDescriptor {
    pub fn is_drawer_view(&self) -> bool {
        self.location.as_deref() == Some(DRAWER_VIEW_LOCATION)
    }
}

/// One selectable value of an enumerated setting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingOption {
    pub title: String,
    pub value: SettingValue,
}

/// A setting declared by an extension
///
/// Only settings with both a category and an options list are offered in
/// the command menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingDescriptor {
    pub setting_name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub options: Option<Vec<SettingOption>>,
}

/// All extension descriptors known to the host
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Extensions {
    #[serde(default, rename = "panel")]
    pub panels: Vec<PanelDescriptor>,
    #[serde(default, rename = "view")]
    pub views: Vec<ViewDescriptor>,
    #[serde(default, rename = "setting")]
    pub settings: Vec<SettingDescriptor>,
}

/// An action registered with the host's action registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    pub id: String,
    pub title: String,
    /// Actions without a category are not listed in the command menu
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: String,
}

/// Switches the visible panel or drawer view
pub trait ViewManager: Send + Sync {
    fn show_view(&self, view_id: &str);
}

/// Named settings storage
pub trait SettingsStore: Send + Sync {
    fn get(&self, name: &str) -> Option<SettingValue>;
    fn set(&self, name: &str, value: SettingValue);
}

/// Registry of user actions
pub trait ActionRegistry: Send + Sync {
    /// Actions that can currently be executed
    fn available_actions(&self) -> Vec<ActionDescriptor>;

    /// Display title of the shortcut bound to an action, if any
    fn shortcut_title(&self, action_id: &str) -> Option<String>;

    fn execute(&self, action_id: &str);
}

/// Settings kept in memory for the lifetime of the process
#[derive(Debug, Default)]
pub struct InMemorySettings {
    values: Mutex<HashMap<String, SettingValue>>,
}

impl InMemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with values
    pub fn with_values<I, K>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, SettingValue)>,
        K: Into<String>,
    {
        Self {
            values: Mutex::new(values.into_iter().map(|(k, v)| (k.into(), v)).collect()),
        }
    }
}

impl SettingsStore for InMemorySettings {
    fn get(&self, name: &str) -> Option<SettingValue> {
        self.values.lock().ok()?.get(name).cloned()
    }

    fn set(&self, name: &str, value: SettingValue) {
        if let Ok(mut values) = self.values.lock() {
            log::debug!("Setting '{}' = {}", name, value);
            values.insert(name.to_string(), value);
        }
    }
}
