//! Domain model for Pantry
//!
//! Contains the recipe/ingredient availability logic without any I/O concerns.

mod color;
mod model;
mod status;

pub use color::{progress_color, Rgb};
pub use model::{ModelError, Pantry};
pub use status::{IngredientState, RecipeStatus, StatusEntry};
