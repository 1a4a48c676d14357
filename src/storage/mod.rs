//! Storage layer
//!
//! A pantry lives in a `.pantry/` directory: a TOML config file and a single
//! JSON snapshot holding the whole model. The snapshot is rewritten in full
//! after every mutation and can be exported verbatim to any path.

mod config;
mod project;
mod snapshot;

pub use config::Config;
pub use project::{PantryDir, PantryDirError};
pub use snapshot::{export_snapshot, SnapshotStore};
