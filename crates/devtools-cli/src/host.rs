//! Terminal stand-ins for the host collaborators commands act upon

use devtools_command_menu::{
    ActionDescriptor, ActionRegistry, InMemorySettings, SettingValue, SettingsStore, ViewManager,
};
use anyhow::{Result, bail};
use devtools_content_provider::{ContentProvider, ResourceType};
use std::collections::HashMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Records and reports what selected commands did
#[derive(Debug, Default)]
pub struct ConsoleHost {
    actions: Vec<ActionDescriptor>,
    shortcuts: HashMap<String, String>,
    settings: InMemorySettings,
    events: Mutex<Vec<String>>,
}

impl ConsoleHost {
    pub fn new(
        actions: Vec<ActionDescriptor>,
        shortcuts: HashMap<String, String>,
        settings: HashMap<String, SettingValue>,
    ) -> Self {
        Self {
            actions,
            shortcuts,
            settings: InMemorySettings::with_values(settings),
            events: Mutex::new(Vec::new()),
        }
    }

    /// Everything that happened so far, oldest first
    pub fn events(&self) -> Vec<String> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    fn record(&self, event: String) {
        log::info!("{}", event);
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl ViewManager for ConsoleHost {
    fn show_view(&self, view_id: &str) {
        self.record(format!("Showing view '{}'", view_id));
    }
}

impl ActionRegistry for ConsoleHost {
    fn available_actions(&self) -> Vec<ActionDescriptor> {
        self.actions.clone()
    }

    fn shortcut_title(&self, action_id: &str) -> Option<String> {
        self.shortcuts.get(action_id).cloned()
    }

    fn execute(&self, action_id: &str) {
        self.record(format!("Executed action '{}'", action_id));
    }
}

impl SettingsStore for ConsoleHost {
    fn get(&self, name: &str) -> Option<SettingValue> {
        self.settings.get(name)
    }

    fn set(&self, name: &str, value: SettingValue) {
        self.record(format!("Set '{}' to {}", name, value));
        self.settings.set(name, value);
    }
}

/// Content provider reading a file from disk
#[derive(Debug, Clone)]
pub struct FileContentProvider {
    path: PathBuf,
    url: String,
}

impl FileContentProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let url = format!("file://{}", path.display());
        Self { path, url }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Refuse files whose extension says they are not text
    ///
    /// Files of unknown type are searched anyway.
    pub fn ensure_searchable(&self) -> Result<()> {
        let content_type = self.content_type();
        if content_type != ResourceType::Other && !content_type.is_text_type() {
            bail!(
                "{}: {} resources cannot be searched",
                self.path.display(),
                content_type.title()
            );
        }
        Ok(())
    }

    /// MIME type for a data URL when none is given on the command line
    pub fn default_mime_type(&self) -> &'static str {
        match self.content_type().canonical_mime_type() {
            "" => "text/plain",
            mime => mime,
        }
    }
}

impl ContentProvider for FileContentProvider {
    fn content_url(&self) -> &str {
        &self.url
    }

    fn content_type(&self) -> ResourceType {
        match self.path.extension().and_then(|e| e.to_str()) {
            Some("html" | "htm") => ResourceType::Document,
            Some("css") => ResourceType::Stylesheet,
            Some("js" | "mjs" | "ts") => ResourceType::Script,
            Some("png" | "jpg" | "jpeg" | "gif" | "svg" | "webp") => ResourceType::Image,
            Some("woff" | "woff2" | "ttf" | "otf") => ResourceType::Font,
            Some("webmanifest") => ResourceType::Manifest,
            Some("vtt") => ResourceType::TextTrack,
            _ => ResourceType::Other,
        }
    }

    fn request_content(&self) -> impl Future<Output = Option<String>> + Send {
        let path = self.path.clone();
        async move {
            match tokio::fs::read_to_string(&path).await {
                Ok(content) => Some(content),
                Err(e) => {
                    log::warn!("Failed to read {}: {}", path.display(), e);
                    None
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_console_host_records_events() {
        let mut shortcuts = HashMap::new();
        shortcuts.insert("console.clear".to_string(), "Ctrl+L".to_string());
        let host = ConsoleHost::new(Vec::new(), shortcuts, HashMap::new());

        host.show_view("network");
        host.execute("console.clear");
        host.set("uiTheme", serde_json::json!("dark"));

        assert_eq!(
            host.events(),
            vec![
                "Showing view 'network'".to_string(),
                "Executed action 'console.clear'".to_string(),
                "Set 'uiTheme' to \"dark\"".to_string(),
            ]
        );
        assert_eq!(host.shortcut_title("console.clear").as_deref(), Some("Ctrl+L"));
        assert_eq!(host.shortcut_title("other"), None);
        assert_eq!(host.get("uiTheme"), Some(serde_json::json!("dark")));
    }

    #[test]
    fn test_file_content_type() {
        assert_eq!(FileContentProvider::new("a/app.js").content_type(), ResourceType::Script);
        assert_eq!(FileContentProvider::new("style.css").content_type(), ResourceType::Stylesheet);
        assert_eq!(FileContentProvider::new("README").content_type(), ResourceType::Other);
    }

    #[test]
    fn test_binary_files_are_not_searchable() {
        assert!(FileContentProvider::new("app.js").ensure_searchable().is_ok());
        assert!(FileContentProvider::new("README").ensure_searchable().is_ok());

        let err = FileContentProvider::new("logo.png").ensure_searchable().unwrap_err();
        assert_eq!(err.to_string(), "logo.png: Image resources cannot be searched");
        assert!(FileContentProvider::new("font.woff2").ensure_searchable().is_err());
    }

    #[test]
    fn test_default_mime_type() {
        assert_eq!(FileContentProvider::new("style.css").default_mime_type(), "text/css");
        assert_eq!(FileContentProvider::new("notes.txt").default_mime_type(), "text/plain");
    }

    #[tokio::test]
    async fn test_missing_file_has_no_content() {
        let provider = FileContentProvider::new("/nonexistent/file.txt");
        assert_eq!(provider.request_content().await, None);
        assert!(provider.search_in_content("x", false, false).await.unwrap().is_empty());
    }
}
