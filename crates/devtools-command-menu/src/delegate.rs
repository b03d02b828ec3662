//! The command menu's list delegate
//!
//! Snapshots the available commands when the menu opens. Later changes to the
//! registry or to command availability are not reflected until a new delegate
//! is built.

use std::sync::Arc;

use crate::builtin::action_command;
use crate::colors::category_color;
use crate::command::Command;
use crate::extensions::ActionRegistry;
use crate::provider::CommandMenu;
use crate::score::command_score;
use crate::search::{highlight_indices, ListDelegate};

/// Presentation data for one row of the menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedItem {
    /// Category shown as a colored tag
    pub tag: String,
    /// Tag background color
    pub tag_color: &'static str,
    pub title: String,
    /// Character indices of the title matched by the query
    pub highlight: Vec<usize>,
    /// Shortcut hint
    pub subtitle: String,
}

/// Sorted snapshot of the commands offered by one menu invocation
#[derive(Debug)]
pub struct CommandMenuDelegate {
    commands: Vec<Arc<Command>>,
}

impl CommandMenuDelegate {
    /// Snapshot the available commands
    ///
    /// Includes one command per available action that has a category, plus
    /// every registry command whose availability currently holds.
    pub fn new(menu: &CommandMenu, actions: Arc<dyn ActionRegistry>) -> Self {
        let mut commands: Vec<Arc<Command>> = actions
            .available_actions()
            .iter()
            .filter(|action| !action.category.is_empty())
            .map(|action| Arc::new(action_command(action, actions.clone())))
            .collect();

        commands.extend(menu.available_commands());

        Self::from_commands(commands)
    }

    /// Build a delegate over explicit commands, sorted by category then title
    pub fn from_commands(mut commands: Vec<Arc<Command>>) -> Self {
        commands.sort_by(|left, right| {
            left.category()
                .cmp(right.category())
                .then_with(|| left.title().cmp(right.title()))
        });
        log::debug!("Command menu opened with {} commands", commands.len());
        Self { commands }
    }

    pub fn command_at(&self, index: usize) -> Option<&Command> {
        self.commands.get(index).map(Arc::as_ref)
    }

    pub fn commands(&self) -> &[Arc<Command>] {
        &self.commands
    }

    /// Presentation data for the item at `index`
    pub fn render_item(&self, index: usize, query: &str) -> Option<RenderedItem> {
        let command = self.commands.get(index)?;
        Some(RenderedItem {
            tag: command.category().to_string(),
            tag_color: category_color(command.category()),
            title: command.title().to_string(),
            highlight: highlight_indices(command.title(), query, self.case_sensitive()),
            subtitle: command.shortcut().to_string(),
        })
    }
}

impl ListDelegate for CommandMenuDelegate {
    fn item_count(&self) -> usize {
        self.commands.len()
    }

    fn item_key_at(&self, index: usize) -> Option<&str> {
        self.commands.get(index).map(|c| c.key())
    }

    fn item_score_at(&self, index: usize, query: &str) -> u32 {
        self.commands
            .get(index)
            .map(|c| command_score(query, c.category(), c.title()))
            .unwrap_or(0)
    }

    fn select_item(&self, index: Option<usize>, _prompt_value: &str) {
        match index.and_then(|i| self.commands.get(i)) {
            Some(command) => command.execute(),
            None => log::debug!("No command selected"),
        }
    }
}
