//! Main CLI application structure

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{ingredient, query, recipe};
use crate::storage::{export_snapshot, PantryDir};

#[derive(Parser)]
#[command(name = "pantry")]
#[command(author, version, about = "Local-first recipe and ingredient availability tracking")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new pantry
    Init {
        /// Path to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        path: String,
    },

    /// Manage recipes
    #[command(subcommand)]
    Recipe(recipe::RecipeCommands),

    /// Manage ingredients and their availability
    #[command(subcommand)]
    Ingredient(ingredient::IngredientCommands),

    /// Show completion overview for all recipes
    Status,

    /// Export the pantry as a JSON snapshot
    Export {
        /// Destination file
        path: PathBuf,
    },
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("Pantry CLI starting");

    match cli.command {
        Commands::Init { path } => {
            output.verbose(&format!("Initializing pantry at: {}", path));
            let pantry = PantryDir::init(&path)?;
            output.success(&format!(
                "Initialized pantry at {}",
                pantry.root().display()
            ));
        }

        Commands::Recipe(cmd) => recipe::run(cmd, &output)?,
        Commands::Ingredient(cmd) => ingredient::run(cmd, &output)?,

        Commands::Status => {
            output.verbose("Gathering pantry status");
            query::status(&output)?
        }

        Commands::Export { path } => export(&output, &path)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}

/// Exports the full pantry state to a caller-chosen path
fn export(output: &Output, dest: &std::path::Path) -> Result<()> {
    let pantry_dir = PantryDir::open_current()?;
    let pantry = pantry_dir.store().load()?;

    export_snapshot(&pantry, dest)
        .with_context(|| format!("Export failed: {}", dest.display()))?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "exported": true,
            "path": dest.display().to_string(),
            "recipes": pantry.recipe_count(),
            "ingredients": pantry.ingredient_count(),
        }));
    } else {
        output.success(&format!("Exported pantry to {}", dest.display()));
    }

    Ok(())
}
