//! Ingredient CLI commands

use anyhow::Result;
use clap::Subcommand;

use super::output::Output;
use crate::domain::ModelError;
use crate::storage::PantryDir;

#[derive(Subcommand)]
pub enum IngredientCommands {
    /// Register an ingredient (initially not available)
    Add {
        /// Ingredient name
        name: String,
    },

    /// List all ingredients with availability
    List,

    /// Mark an ingredient as available
    Have {
        /// Ingredient name
        name: String,
    },

    /// Mark an ingredient as not available
    Lack {
        /// Ingredient name
        name: String,
    },

    /// Remove ingredients; unknown names are skipped
    Remove {
        /// Ingredient names
        #[arg(required = true)]
        names: Vec<String>,
    },
}

pub fn run(cmd: IngredientCommands, output: &Output) -> Result<()> {
    match cmd {
        IngredientCommands::Add { name } => add_ingredient(output, &name),
        IngredientCommands::List => list_ingredients(output),
        IngredientCommands::Have { name } => set_available(output, &name, true),
        IngredientCommands::Lack { name } => set_available(output, &name, false),
        IngredientCommands::Remove { names } => remove_ingredients(output, &names),
    }
}

fn add_ingredient(output: &Output, name: &str) -> Result<()> {
    let pantry_dir = PantryDir::open_current()?;
    let store = pantry_dir.store();

    let mut pantry = store.load()?;
    match pantry.add_ingredient(name) {
        Ok(()) => {
            store.save(&pantry)?;
            if output.is_json() {
                output.data(&serde_json::json!({
                    "name": name.trim(),
                    "available": false,
                }));
            } else {
                output.success(&format!("Added ingredient: {}", name.trim()));
            }
            Ok(())
        }
        // A duplicate is reported but leaves the pantry untouched
        Err(ModelError::DuplicateIngredient(existing)) => {
            output.warn(&format!("Ingredient already exists: {}", existing));
            Ok(())
        }
        Err(other) => Err(other.into()),
    }
}

fn list_ingredients(output: &Output) -> Result<()> {
    let pantry_dir = PantryDir::open_current()?;
    let pantry = pantry_dir.store().load()?;

    if output.is_json() {
        let items: Vec<_> = pantry
            .ingredients()
            .map(|(name, available)| {
                serde_json::json!({
                    "name": name,
                    "available": available,
                })
            })
            .collect();
        output.data(&items);
    } else if pantry.ingredient_count() == 0 {
        println!("No ingredients yet. Add one with 'pantry ingredient add'.");
    } else {
        for (name, available) in pantry.ingredients() {
            let marker = if available { "[x]" } else { "[ ]" };
            println!("{} {}", marker, name);
        }
    }

    Ok(())
}

fn set_available(output: &Output, name: &str, available: bool) -> Result<()> {
    let pantry_dir = PantryDir::open_current()?;
    let store = pantry_dir.store();

    let mut pantry = store.load()?;
    pantry.set_available(name, available)?;
    store.save(&pantry)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "name": name,
            "available": available,
        }));
    } else {
        let state = if available { "available" } else { "not available" };
        output.success(&format!("{} is now {}", name, state));
    }

    Ok(())
}

fn remove_ingredients(output: &Output, names: &[String]) -> Result<()> {
    let pantry_dir = PantryDir::open_current()?;
    let store = pantry_dir.store();

    let mut pantry = store.load()?;
    let removed = pantry.remove_ingredients(names.iter().map(String::as_str));
    store.save(&pantry)?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "requested": names.len(),
            "removed": removed,
        }));
    } else {
        output.success(&format!(
            "Removed {} of {} ingredient(s)",
            removed,
            names.len()
        ));
    }

    Ok(())
}
