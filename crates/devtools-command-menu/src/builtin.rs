//! Command providers built from extension descriptors and user actions

use std::fmt::{self, Debug};
use std::sync::Arc;

use crate::command::{Availability, Command};
use crate::extensions::{
    ActionDescriptor, ActionRegistry, PanelDescriptor, SettingDescriptor, SettingOption,
    SettingsStore, ViewDescriptor, ViewManager,
};
use crate::provider::CommandProvider;

/// Category of commands that reveal a panel
pub const PANEL_CATEGORY: &str = "Panel";

/// Category of commands that reveal a drawer view
pub const DRAWER_CATEGORY: &str = "Drawer";

/// Command revealing a panel; always available
pub fn reveal_panel_command(panel: &PanelDescriptor, views: Arc<dyn ViewManager>) -> Command {
    let panel_name = panel.name.clone();
    Command::new(
        PANEL_CATEGORY,
        &panel.tags,
        format!("Show {}", panel.title),
        "",
        move || views.show_view(&panel_name),
        Availability::Always,
    )
}

/// Command revealing a drawer view; always available
pub fn reveal_drawer_command(view: &ViewDescriptor, views: Arc<dyn ViewManager>) -> Command {
    let drawer_id = view.id.clone();
    Command::new(
        DRAWER_CATEGORY,
        &view.tags,
        format!("Show {}", view.title),
        "",
        move || views.show_view(&drawer_id),
        Availability::Always,
    )
}

/// Command switching a setting to one of its option values
///
/// Available only while the setting holds a different value.
pub fn setting_command(
    setting: &SettingDescriptor,
    category: &str,
    option: &SettingOption,
    settings: Arc<dyn SettingsStore>,
) -> Command {
    let name = setting.setting_name.clone();
    let value = option.value.clone();

    let available = {
        let settings = settings.clone();
        let name = name.clone();
        let value = value.clone();
        move || settings.get(&name).as_ref() != Some(&value)
    };

    Command::new(
        category,
        &setting.tags,
        option.title.clone(),
        "",
        move || settings.set(&name, value.clone()),
        Availability::when(available),
    )
}

/// Command executing a registered user action
pub fn action_command(action: &ActionDescriptor, actions: Arc<dyn ActionRegistry>) -> Command {
    let shortcut = actions.shortcut_title(&action.id).unwrap_or_default();
    let action_id = action.id.clone();
    Command::new(
        action.category.clone(),
        &action.tags,
        action.title.clone(),
        shortcut,
        move || actions.execute(&action_id),
        Availability::Always,
    )
}

/// Provides one "Show <panel>" command per panel extension
pub struct PanelCommandProvider {
    panels: Vec<PanelDescriptor>,
    views: Arc<dyn ViewManager>,
}

impl PanelCommandProvider {
    pub fn new(panels: Vec<PanelDescriptor>, views: Arc<dyn ViewManager>) -> Self {
        Self { panels, views }
    }
}

impl CommandProvider for PanelCommandProvider {
    fn commands(&self) -> Vec<Command> {
        self.panels
            .iter()
            .map(|panel| reveal_panel_command(panel, self.views.clone()))
            .collect()
    }

    fn name(&self) -> &str {
        "Panels"
    }
}

impl Debug for PanelCommandProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelCommandProvider")
            .field("panels", &self.panels.len())
            .finish_non_exhaustive()
    }
}

/// Provides one "Show <view>" command per drawer view
///
/// Views hosted anywhere other than the drawer are skipped.
pub struct DrawerCommandProvider {
    views: Vec<ViewDescriptor>,
    view_manager: Arc<dyn ViewManager>,
}

impl DrawerCommandProvider {
    pub fn new(views: Vec<ViewDescriptor>, view_manager: Arc<dyn ViewManager>) -> Self {
        Self {
            views,
            view_manager,
        }
    }
}

impl CommandProvider for DrawerCommandProvider {
    fn commands(&self) -> Vec<Command> {
        self.views
            .iter()
            .filter(|view| view.is_drawer_view())
            .map(|view| reveal_drawer_command(view, self.view_manager.clone()))
            .collect()
    }

    fn name(&self) -> &str {
        "Drawers"
    }
}

impl Debug for DrawerCommandProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawerCommandProvider")
            .field("views", &self.views.len())
            .finish_non_exhaustive()
    }
}

/// Provides one command per (setting, option) pair of enumerated settings
pub struct SettingCommandProvider {
    settings: Vec<SettingDescriptor>,
    store: Arc<dyn SettingsStore>,
}

impl SettingCommandProvider {
    pub fn new(settings: Vec<SettingDescriptor>, store: Arc<dyn SettingsStore>) -> Self {
        Self { settings, store }
    }
}

impl CommandProvider for SettingCommandProvider {
    fn commands(&self) -> Vec<Command> {
        let mut commands = Vec::new();

        for setting in &self.settings {
            let (Some(category), Some(options)) = (
                setting.category.as_deref().filter(|c| !c.is_empty()),
                setting.options.as_ref(),
            ) else {
                log::trace!(
                    "Skipping setting '{}': no category or options",
                    setting.setting_name
                );
                continue;
            };

            for option in options {
                commands.push(setting_command(setting, category, option, self.store.clone()));
            }
        }

        commands
    }

    fn name(&self) -> &str {
        "Settings"
    }
}

impl Debug for SettingCommandProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingCommandProvider")
            .field("settings", &self.settings.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extensions::{InMemorySettings, DRAWER_VIEW_LOCATION};
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct RecordingViews {
        shown: Mutex<Vec<String>>,
    }

    impl ViewManager for RecordingViews {
        fn show_view(&self, view_id: &str) {
            self.shown.lock().unwrap().push(view_id.to_string());
        }
    }

    fn theme_setting() -> SettingDescriptor {
        SettingDescriptor {
            setting_name: "uiTheme".into(),
            category: Some("Appearance".into()),
            tags: "theme,color".into(),
            options: Some(vec![
                SettingOption {
                    title: "Switch to light theme".into(),
                    value: json!("default"),
                },
                SettingOption {
                    title: "Switch to dark theme".into(),
                    value: json!("dark"),
                },
            ]),
        }
    }

    #[test]
    fn test_reveal_panel_command() {
        let views = Arc::new(RecordingViews::default());
        let panel = PanelDescriptor {
            name: "network".into(),
            title: "Network".into(),
            tags: "http".into(),
        };

        let cmd = reveal_panel_command(&panel, views.clone());
        assert_eq!(cmd.category(), "Panel");
        assert_eq!(cmd.title(), "Show Network");
        assert!(cmd.available());

        cmd.execute();
        assert_eq!(*views.shown.lock().unwrap(), vec!["network".to_string()]);
    }

    #[test]
    fn test_drawer_provider_skips_non_drawer_views() {
        let views = Arc::new(RecordingViews::default());
        let provider = DrawerCommandProvider::new(
            vec![
                ViewDescriptor {
                    id: "animations".into(),
                    title: "Animations".into(),
                    location: Some(DRAWER_VIEW_LOCATION.into()),
                    tags: String::new(),
                },
                ViewDescriptor {
                    id: "sources.navigator".into(),
                    title: "Navigator".into(),
                    location: Some("navigator-view".into()),
                    tags: String::new(),
                },
            ],
            views.clone(),
        );

        let commands = provider.commands();
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].category(), "Drawer");
        assert_eq!(commands[0].title(), "Show Animations");

        commands[0].execute();
        assert_eq!(*views.shown.lock().unwrap(), vec!["animations".to_string()]);
    }

    #[test]
    fn test_setting_commands_skip_incomplete_descriptors() {
        let store = Arc::new(InMemorySettings::new());
        let mut no_category = theme_setting();
        no_category.category = None;
        let mut no_options = theme_setting();
        no_options.options = None;
        let mut empty_category = theme_setting();
        empty_category.category = Some(String::new());

        let provider = SettingCommandProvider::new(
            vec![no_category, no_options, empty_category, theme_setting()],
            store,
        );

        let commands = provider.commands();
        assert_eq!(commands.len(), 2);
        assert!(commands.iter().all(|c| c.category() == "Appearance"));
    }

    #[test]
    fn test_setting_command_availability_flips() {
        let store = Arc::new(InMemorySettings::with_values([("uiTheme", json!("default"))]));
        let provider = SettingCommandProvider::new(vec![theme_setting()], store.clone());
        let commands = provider.commands();

        let light = &commands[0];
        let dark = &commands[1];
        assert!(!light.available());
        assert!(dark.available());

        dark.execute();
        assert_eq!(store.get("uiTheme"), Some(json!("dark")));
        assert!(light.available());
        assert!(!dark.available());
    }

    #[test]
    fn test_setting_command_available_when_unset() {
        let store = Arc::new(InMemorySettings::new());
        let provider = SettingCommandProvider::new(vec![theme_setting()], store);
        assert!(provider.commands().iter().all(|c| c.available()));
    }
}
