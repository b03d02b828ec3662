//! Command provider trait and registry system

use std::fmt::Debug;
use std::sync::Arc;

use crate::builtin::{DrawerCommandProvider, PanelCommandProvider, SettingCommandProvider};
use crate::command::Command;
use crate::extensions::{Extensions, SettingsStore, ViewManager};

/// Trait for providing commands to the menu
///
/// Implementors produce the commands for one source (panels, drawer views,
/// settings, ...). Availability is not decided here: each command carries
/// its own predicate, evaluated when the menu is opened.
pub trait CommandProvider: Debug {
    /// Get all commands from this provider
    fn commands(&self) -> Vec<Command>;

    /// Provider name for debugging
    fn name(&self) -> &str;
}

/// Registry of commands collected from command providers
///
/// Commands are generated once, when their provider is registered.
pub struct CommandMenu {
    providers: Vec<Box<dyn CommandProvider>>,
    commands: Vec<Arc<Command>>,
}

impl CommandMenu {
    /// Create a new empty command menu
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            commands: Vec::new(),
        }
    }

    /// Build the menu from the host's extensions
    ///
    /// Registers panel, drawer and setting commands, in that order.
    pub fn from_extensions(
        extensions: &Extensions,
        views: Arc<dyn ViewManager>,
        settings: Arc<dyn SettingsStore>,
    ) -> Self {
        let mut menu = Self::new();
        menu.register(Box::new(PanelCommandProvider::new(
            extensions.panels.clone(),
            views.clone(),
        )));
        menu.register(Box::new(DrawerCommandProvider::new(
            extensions.views.clone(),
            views,
        )));
        menu.register(Box::new(SettingCommandProvider::new(
            extensions.settings.clone(),
            settings,
        )));
        menu
    }

    /// Register a command provider and load its commands
    ///
    /// Providers are queried in the order they were registered.
    pub fn register(&mut self, provider: Box<dyn CommandProvider>) {
        let commands = provider.commands();
        log::debug!(
            "Loaded {} commands from provider '{}'",
            commands.len(),
            provider.name()
        );
        self.commands.extend(commands.into_iter().map(Arc::new));
        self.providers.push(provider);
    }

    /// All commands, available or not
    pub fn commands(&self) -> &[Arc<Command>] {
        &self.commands
    }

    /// Commands whose availability predicate currently holds
    pub fn available_commands(&self) -> Vec<Arc<Command>> {
        self.commands
            .iter()
            .filter(|c| c.available())
            .cloned()
            .collect()
    }

    /// Get the number of registered providers
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }
}

impl Default for CommandMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl Debug for CommandMenu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandMenu")
            .field("provider_count", &self.providers.len())
            .field("command_count", &self.commands.len())
            .finish()
    }
}
