//! Board configuration.

use serde::{Deserialize, Serialize};

/// Default column titles seeded into a new session board.
pub const DEFAULT_COLUMN_TITLES: [&str; 3] = ["To Do", "In Progress", "Done"];

/// Default maximum title length, in characters.
pub const DEFAULT_MAX_TITLE_LENGTH: usize = 100;

/// Configuration for a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Column titles created when a session board is seeded.
    pub default_columns: Vec<String>,
    /// Maximum length of column and task titles, in characters.
    pub max_title_length: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            default_columns: DEFAULT_COLUMN_TITLES
                .iter()
                .map(|title| (*title).to_owned())
                .collect(),
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
        }
    }
}

impl BoardConfig {
    /// Returns a configuration that seeds no columns.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            default_columns: Vec::new(),
            ..Self::default()
        }
    }

    /// Replaces the seeded column titles.
    #[must_use]
    pub fn with_default_columns<S: Into<String>>(
        mut self,
        titles: impl IntoIterator<Item = S>,
    ) -> Self {
        self.default_columns = titles.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the maximum title length.
    #[must_use]
    pub const fn with_max_title_length(mut self, max_title_length: usize) -> Self {
        self.max_title_length = max_title_length;
        self
    }
}
