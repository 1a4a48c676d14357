//! Derived recipe completion status

use super::color::{progress_color, Rgb};

/// Resolution of one ingredient reference against the registered ingredients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientState {
    /// Registered and flagged available
    Available,
    /// Registered but not available
    Missing,
    /// Not registered at all; counts as unavailable for completion
    Unknown,
}

impl IngredientState {
    /// Returns true if this state counts towards the completion percent
    pub fn is_available(&self) -> bool {
        matches!(self, IngredientState::Available)
    }

    /// Returns a display label for the state
    pub fn label(&self) -> &'static str {
        match self {
            IngredientState::Available => "available",
            IngredientState::Missing => "missing",
            IngredientState::Unknown => "unknown",
        }
    }

    /// Returns a checklist marker for text output
    pub fn marker(&self) -> &'static str {
        match self {
            IngredientState::Available => "[x]",
            IngredientState::Missing => "[ ]",
            IngredientState::Unknown => "[?]",
        }
    }
}

/// One resolved ingredient reference within a recipe
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    pub name: String,
    pub state: IngredientState,
}

/// Completion status of a single recipe
///
/// Entries keep the recipe's ingredient order, duplicates included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeStatus {
    pub recipe: String,
    pub entries: Vec<StatusEntry>,
    /// Number of entries resolved as available
    pub available: usize,
}

impl RecipeStatus {
    /// Total number of ingredient references in the recipe
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    /// Returns false for the "no ingredients defined" sentinel case
    pub fn has_ingredients(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Completion percent, truncated towards zero; 0 for an empty recipe
    pub fn percent(&self) -> u8 {
        if self.entries.is_empty() {
            0
        } else {
            (self.available * 100 / self.entries.len()) as u8
        }
    }

    /// Gradient colour for the completion percent
    pub fn color(&self) -> Rgb {
        progress_color(self.percent())
    }

    /// One-line summary, e.g. `2/3 ingredients available (66%)`
    pub fn summary(&self) -> String {
        if self.has_ingredients() {
            format!(
                "{}/{} ingredients available ({}%)",
                self.available,
                self.total(),
                self.percent()
            )
        } else {
            "no ingredients defined".to_string()
        }
    }
}
