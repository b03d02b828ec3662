//! Command menu infrastructure for developer tools front ends
//!
//! This crate provides the non-visual core of a command menu:
//! - Commands built from panel, drawer view and setting extensions
//! - Provider pattern for extensibility
//! - Availability predicates evaluated when the menu opens
//! - Diff-based ranking with fuzzy filtering powered by nucleo-matcher
//!
//! # Example
//!
//! ```rust,ignore
//! use devtools_command_menu::{
//!     filter_items, CommandMenu, CommandMenuDelegate, Extensions, InMemorySettings,
//! };
//!
//! let menu = CommandMenu::from_extensions(&extensions, view_manager, Arc::new(InMemorySettings::new()));
//! let delegate = CommandMenuDelegate::new(&menu, action_registry);
//!
//! for (index, score) in filter_items(&delegate, "network") {
//!     let item = delegate.render_item(index, "network").unwrap();
//!     println!("[{}] {} ({score})", item.tag, item.title);
//! }
//! ```

mod builtin;
mod colors;
mod command;
mod delegate;
mod extensions;
mod provider;
mod score;
mod search;

pub use builtin::{
    action_command, reveal_drawer_command, reveal_panel_command, setting_command,
    DrawerCommandProvider, PanelCommandProvider, SettingCommandProvider, DRAWER_CATEGORY,
    PANEL_CATEGORY,
};
pub use colors::{category_color, string_hash, MATERIAL_PALETTE_COLORS};
pub use command::{compose_key, Availability, Command, KEY_SEPARATOR};
pub use delegate::{CommandMenuDelegate, RenderedItem};
pub use extensions::{
    ActionDescriptor, ActionRegistry, Extensions, InMemorySettings, PanelDescriptor,
    SettingDescriptor, SettingOption, SettingValue, SettingsStore, ViewDescriptor, ViewManager,
    DRAWER_VIEW_LOCATION,
};
pub use provider::{CommandMenu, CommandProvider};
pub use score::{category_bonus, command_score, diff_score, equal_runs};
pub use search::{filter_items, highlight_indices, select_best, ListDelegate};
