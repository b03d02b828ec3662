//! The command record shown in the command menu

use std::fmt::{self, Debug};

/// Separates the fields of a command key.
///
/// The fuzzy matcher treats each separated segment on its own, so a query can
/// never match across category, title and tags.
pub const KEY_SEPARATOR: char = '\0';

/// Side effect run when a command is selected
pub type ExecuteHandler = Box<dyn Fn() + Send + Sync>;

/// Predicate deciding whether a command should be offered
pub type AvailableHandler = Box<dyn Fn() -> bool + Send + Sync>;

/// When a command may be offered to the user
pub enum Availability {
    /// Offered unconditionally
    Always,
    /// Offered only while the predicate returns true
    When(AvailableHandler),
}

impl Availability {
    /// Wrap a predicate
    pub fn when(predicate: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        Self::When(Box::new(predicate))
    }

    /// Evaluate the availability right now
    pub fn is_available(&self) -> bool {
        match self {
            Self::Always => true,
            Self::When(predicate) => predicate(),
        }
    }
}

impl Debug for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Always => f.write_str("Always"),
            Self::When(_) => f.write_str("When(..)"),
        }
    }
}

/// Build the composite search key for a command
///
/// `tags` is the comma separated tag list from the extension descriptor; its
/// commas become separators too.
pub fn compose_key(category: &str, title: &str, tags: &str) -> String {
    let tags = tags.replace(',', &KEY_SEPARATOR.to_string());
    format!("{category}{KEY_SEPARATOR}{title}{KEY_SEPARATOR}{tags}")
}

/// A command that can be executed from the command menu
pub struct Command {
    category: String,
    title: String,
    key: String,
    shortcut: String,
    execute_handler: ExecuteHandler,
    availability: Availability,
}

impl Command {
    /// Create a command
    ///
    /// # Arguments
    ///
    /// * `category` - Grouping label (e.g., "Panel", "Drawer", "Appearance")
    /// * `tags` - Comma separated extra search terms
    /// * `title` - Display title (e.g., "Show Network")
    /// * `shortcut` - Keyboard shortcut hint, empty if none
    /// * `execute` - Run when the command is selected
    /// * `availability` - Whether the command is currently offered
    pub fn new(
        category: impl Into<String>,
        tags: &str,
        title: impl Into<String>,
        shortcut: impl Into<String>,
        execute: impl Fn() + Send + Sync + 'static,
        availability: Availability,
    ) -> Self {
        let category = category.into();
        let title = title.into();
        let key = compose_key(&category, &title, tags);

        Self {
            category,
            title,
            key,
            shortcut: shortcut.into(),
            execute_handler: Box::new(execute),
            availability,
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Composite key the fuzzy matcher runs against
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn shortcut(&self) -> &str {
        &self.shortcut
    }

    pub fn available(&self) -> bool {
        self.availability.is_available()
    }

    pub fn execute(&self) {
        log::debug!("Executing command '{}' ({})", self.title, self.category);
        (self.execute_handler)();
    }
}

impl Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("category", &self.category)
            .field("title", &self.title)
            .field("key", &self.key)
            .field("shortcut", &self.shortcut)
            .field("availability", &self.availability)
            .finish_non_exhaustive()
    }
}
