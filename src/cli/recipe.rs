//! Recipe CLI commands

use anyhow::Result;
use clap::Subcommand;

use super::output::Output;
use crate::domain::RecipeStatus;
use crate::storage::PantryDir;

#[derive(Subcommand)]
pub enum RecipeCommands {
    /// Add a recipe, replacing any existing recipe of the same name
    ///
    /// Examples:
    ///   pantry recipe add Pancakes "egg, flour, milk"
    ///   pantry recipe add "Plain toast" bread
    Add {
        /// Recipe name
        name: String,

        /// Comma-separated ingredient list
        ingredients: String,
    },

    /// List all recipes
    List,

    /// Show a recipe's ingredient checklist and completion
    Show {
        /// Recipe name
        name: String,
    },

    /// Remove a recipe
    Remove {
        /// Recipe name
        name: String,
    },
}

pub fn run(cmd: RecipeCommands, output: &Output) -> Result<()> {
    match cmd {
        RecipeCommands::Add { name, ingredients } => add_recipe(output, &name, &ingredients),
        RecipeCommands::List => list_recipes(output),
        RecipeCommands::Show { name } => show_recipe(output, &name),
        RecipeCommands::Remove { name } => remove_recipe(output, &name),
    }
}

fn add_recipe(output: &Output, name: &str, raw_ingredients: &str) -> Result<()> {
    let pantry_dir = PantryDir::open_current()?;
    let store = pantry_dir.store();

    let mut pantry = store.load()?;
    let replaced = pantry.contains_recipe(name.trim());
    pantry.add_recipe(name, raw_ingredients)?;
    store.save(&pantry)?;

    let status = pantry.recipe_status(name.trim())?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "name": status.recipe,
            "ingredients": status.entries.iter().map(|e| e.name.clone()).collect::<Vec<_>>(),
            "replaced": replaced,
        }));
    } else {
        let verb = if replaced { "Replaced" } else { "Added" };
        output.success(&format!(
            "{} recipe: {} ({} ingredients)",
            verb,
            status.recipe,
            status.total()
        ));
    }

    Ok(())
}

fn list_recipes(output: &Output) -> Result<()> {
    let pantry_dir = PantryDir::open_current()?;
    let pantry = pantry_dir.store().load()?;

    if output.is_json() {
        let names: Vec<_> = pantry.recipe_names().collect();
        output.data(&names);
    } else if pantry.recipe_count() == 0 {
        println!("No recipes yet. Add one with 'pantry recipe add'.");
    } else {
        for name in pantry.recipe_names() {
            println!("{}", name);
        }
    }

    Ok(())
}

fn show_recipe(output: &Output, name: &str) -> Result<()> {
    let pantry_dir = PantryDir::open_current()?;
    let pantry = pantry_dir.store().load()?;

    let status = pantry.recipe_status(name)?;

    if output.is_json() {
        output.data(&status_json(&status));
        return Ok(());
    }

    println!("{}", status.recipe);
    for entry in &status.entries {
        println!("  {} {} - {}", entry.state.marker(), entry.name, entry.state.label());
    }

    let color = status.color();
    if pantry_dir.config().color {
        println!("{} {} {}", status.summary(), color, color.terminal_swatch());
    } else {
        println!("{} {}", status.summary(), color);
    }

    Ok(())
}

fn remove_recipe(output: &Output, name: &str) -> Result<()> {
    let pantry_dir = PantryDir::open_current()?;
    let store = pantry_dir.store();

    let mut pantry = store.load()?;
    pantry.remove_recipe(name)?;
    store.save(&pantry)?;

    if output.is_json() {
        output.data(&serde_json::json!({ "removed": name }));
    } else {
        output.success(&format!("Removed recipe: {}", name));
    }

    Ok(())
}

/// Serializes a recipe status for `--format json`
pub(super) fn status_json(status: &RecipeStatus) -> serde_json::Value {
    let color = status.color();
    serde_json::json!({
        "recipe": status.recipe,
        "ingredients": status.entries.iter().map(|e| {
            serde_json::json!({
                "name": e.name,
                "state": e.state.label(),
            })
        }).collect::<Vec<_>>(),
        "available": status.available,
        "total": status.total(),
        "percent": status.percent(),
        "color": color.to_string(),
    })
}
