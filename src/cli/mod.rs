//! # Command-Line Interface
//!
//! User-facing commands and output formatting.
//!
//! | Group | Purpose | Examples |
//! |-------|---------|----------|
//! | Core | Pantry management | `init`, `status`, `export` |
//! | Recipe | Recipe lifecycle | `recipe add`, `recipe show` |
//! | Ingredient | Availability tracking | `ingredient add`, `ingredient have` |
//!
//! All commands support `--format text|json` and `--verbose`. Every command
//! loads the snapshot, applies one model operation, renders the result, and
//! writes the snapshot back if it mutated anything.
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod ingredient;
mod output;
mod query;
mod recipe;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
