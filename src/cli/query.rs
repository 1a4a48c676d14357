//! Pantry-wide status overview

use anyhow::Result;

use super::output::Output;
use super::recipe::status_json;
use crate::storage::PantryDir;

/// Shows completion for every recipe plus overall counts
pub fn status(output: &Output) -> Result<()> {
    let pantry_dir = PantryDir::open_current()?;
    let pantry = pantry_dir.store().load()?;

    let names: Vec<String> = pantry.recipe_names().map(str::to_string).collect();
    let statuses = names
        .iter()
        .map(|name| pantry.recipe_status(name))
        .collect::<Result<Vec<_>, _>>()?;

    if output.is_json() {
        output.data(&serde_json::json!({
            "recipes": statuses.iter().map(status_json).collect::<Vec<_>>(),
            "ingredient_count": pantry.ingredient_count(),
        }));
        return Ok(());
    }

    if statuses.is_empty() {
        println!("No recipes yet. Add one with 'pantry recipe add'.");
        return Ok(());
    }

    let use_color = pantry_dir.config().color;
    for status in &statuses {
        let swatch = if use_color {
            format!(" {}", status.color().terminal_swatch())
        } else {
            String::new()
        };
        println!("{:<24} {}{}", status.recipe, status.summary(), swatch);
    }

    println!();
    println!(
        "{} recipe(s), {} ingredient(s) tracked",
        statuses.len(),
        pantry.ingredient_count()
    );

    Ok(())
}
