//! Pantry CLI - Local-first recipe and ingredient availability tracking
//!
//! Pantry keeps two collections: recipes (ordered ingredient references) and
//! ingredients (availability flags), and derives per-recipe completion with a
//! red→yellow→green progress colour. State lives in a single JSON snapshot
//! under `.pantry/`, rewritten after every mutation.

pub mod cli;
pub mod domain;
pub mod storage;

pub use domain::{progress_color, IngredientState, ModelError, Pantry, RecipeStatus, Rgb};
