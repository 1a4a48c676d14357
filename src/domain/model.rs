//! The pantry model
//!
//! Two collections keyed by name: recipes (ordered ingredient references) and
//! ingredients (availability flags). Recipe ingredient lists are free-text
//! references, not foreign keys: a reference with no registered ingredient
//! reads as unavailable, and deleting an ingredient never touches the recipes
//! that mention it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::status::{IngredientState, RecipeStatus, StatusEntry};

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("Name must not be empty")]
    EmptyName,

    #[error("Ingredient already exists: {0}")]
    DuplicateIngredient(String),

    #[error("Recipe not found: {0}")]
    RecipeNotFound(String),

    #[error("Ingredient not found: {0}")]
    IngredientNotFound(String),
}

/// The full pantry state: recipes and ingredient availability.
///
/// Serializes as `{ "recipes": {...}, "ingredients": {...} }`, which is both
/// the snapshot format and the export format. `BTreeMap` keeps keys in
/// codepoint order, so listings and serialized output are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pantry {
    recipes: BTreeMap<String, Vec<String>>,
    ingredients: BTreeMap<String, bool>,
}

impl Pantry {
    /// Creates an empty pantry
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a recipe, replacing any existing recipe of the same name
    ///
    /// `raw_ingredients` is a comma-separated list; tokens are trimmed and
    /// empty tokens dropped. Duplicate references are kept as-is.
    pub fn add_recipe(&mut self, name: &str, raw_ingredients: &str) -> Result<(), ModelError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ModelError::EmptyName);
        }

        let ingredients = split_ingredient_list(raw_ingredients);
        self.recipes.insert(name.to_string(), ingredients);
        Ok(())
    }

    /// Registers a new ingredient, initially unavailable
    ///
    /// Adding a name that already exists is rejected without touching the
    /// existing availability flag.
    pub fn add_ingredient(&mut self, name: &str) -> Result<(), ModelError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ModelError::EmptyName);
        }
        if self.ingredients.contains_key(name) {
            return Err(ModelError::DuplicateIngredient(name.to_string()));
        }

        self.ingredients.insert(name.to_string(), false);
        Ok(())
    }

    /// Sets the availability flag of a registered ingredient
    pub fn set_available(&mut self, name: &str, available: bool) -> Result<(), ModelError> {
        match self.ingredients.get_mut(name) {
            Some(flag) => {
                *flag = available;
                Ok(())
            }
            None => Err(ModelError::IngredientNotFound(name.to_string())),
        }
    }

    /// Removes a recipe by name
    pub fn remove_recipe(&mut self, name: &str) -> Result<(), ModelError> {
        self.recipes
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| ModelError::RecipeNotFound(name.to_string()))
    }

    /// Removes each named ingredient that exists, silently skipping the rest
    ///
    /// Returns the number of ingredients actually removed. Recipes referencing
    /// a removed ingredient keep the reference; it reads as unknown afterwards.
    pub fn remove_ingredients<'a, I>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        names
            .into_iter()
            .filter(|name| self.ingredients.remove(*name).is_some())
            .count()
    }

    /// Returns recipe names in codepoint order
    pub fn recipe_names(&self) -> impl Iterator<Item = &str> {
        self.recipes.keys().map(String::as_str)
    }

    /// Returns ingredient names in codepoint order
    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.keys().map(String::as_str)
    }

    /// Returns (name, available) pairs in codepoint order
    pub fn ingredients(&self) -> impl Iterator<Item = (&str, bool)> {
        self.ingredients.iter().map(|(name, flag)| (name.as_str(), *flag))
    }

    /// Returns the availability flag, or None if the ingredient is unregistered
    pub fn is_available(&self, name: &str) -> Option<bool> {
        self.ingredients.get(name).copied()
    }

    /// Returns true if a recipe with this name exists
    pub fn contains_recipe(&self, name: &str) -> bool {
        self.recipes.contains_key(name)
    }

    pub fn recipe_count(&self) -> usize {
        self.recipes.len()
    }

    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }

    /// Resolves one ingredient reference against the registered ingredients
    pub fn ingredient_state(&self, name: &str) -> IngredientState {
        match self.is_available(name) {
            Some(true) => IngredientState::Available,
            Some(false) => IngredientState::Missing,
            None => IngredientState::Unknown,
        }
    }

    /// Derives the completion status of a recipe
    ///
    /// Every reference in the recipe's ingredient list is resolved to a state;
    /// only `Available` counts towards the completion percent.
    pub fn recipe_status(&self, name: &str) -> Result<RecipeStatus, ModelError> {
        let references = self
            .recipes
            .get(name)
            .ok_or_else(|| ModelError::RecipeNotFound(name.to_string()))?;

        let entries: Vec<StatusEntry> = references
            .iter()
            .map(|reference| StatusEntry {
                name: reference.clone(),
                state: self.ingredient_state(reference),
            })
            .collect();

        let available = entries.iter().filter(|e| e.state.is_available()).count();

        Ok(RecipeStatus {
            recipe: name.to_string(),
            entries,
            available,
        })
    }
}

/// Splits a comma-separated ingredient list into trimmed, non-empty tokens
fn split_ingredient_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pancakes_pantry() -> Pantry {
        let mut pantry = Pantry::new();
        pantry.add_ingredient("egg").unwrap();
        pantry.add_ingredient("flour").unwrap();
        pantry.add_ingredient("milk").unwrap();
        pantry.set_available("egg", true).unwrap();
        pantry.set_available("milk", true).unwrap();
        pantry.add_recipe("Pancakes", "egg, flour, milk").unwrap();
        pantry
    }

    #[test]
    fn add_recipe_splits_and_trims() {
        let mut pantry = Pantry::new();
        pantry.add_recipe("Soup", " salt ,, pepper,  water  ,").unwrap();

        let status = pantry.recipe_status("Soup").unwrap();
        let names: Vec<_> = status.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["salt", "pepper", "water"]);
    }

    #[test]
    fn add_recipe_rejects_empty_name() {
        let mut pantry = Pantry::new();
        assert_eq!(pantry.add_recipe("   ", "salt"), Err(ModelError::EmptyName));
        assert_eq!(pantry.recipe_count(), 0);
    }

    #[test]
    fn add_recipe_keeps_duplicate_references() {
        let mut pantry = Pantry::new();
        pantry.add_recipe("Omelette", "egg, egg, butter").unwrap();

        let status = pantry.recipe_status("Omelette").unwrap();
        assert_eq!(status.total(), 3);
    }

    #[test]
    fn add_recipe_overwrites_existing() {
        let mut pantry = Pantry::new();
        pantry.add_recipe("Soup", "salt").unwrap();
        pantry.add_recipe("Soup", "pepper,water").unwrap();

        let status = pantry.recipe_status("Soup").unwrap();
        let names: Vec<_> = status.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["pepper", "water"]);
        assert_eq!(pantry.recipe_count(), 1);
    }

    #[test]
    fn add_ingredient_defaults_to_unavailable() {
        let mut pantry = Pantry::new();
        pantry.add_ingredient("salt").unwrap();

        assert_eq!(pantry.is_available("salt"), Some(false));
    }

    #[test]
    fn add_ingredient_rejects_empty_name() {
        let mut pantry = Pantry::new();
        assert_eq!(pantry.add_ingredient(""), Err(ModelError::EmptyName));
    }

    #[test]
    fn duplicate_ingredient_keeps_existing_flag() {
        let mut pantry = Pantry::new();
        pantry.add_ingredient("salt").unwrap();
        pantry.set_available("salt", true).unwrap();

        let result = pantry.add_ingredient("salt");
        assert_eq!(
            result,
            Err(ModelError::DuplicateIngredient("salt".to_string()))
        );
        assert_eq!(pantry.is_available("salt"), Some(true));
    }

    #[test]
    fn set_available_unknown_ingredient_fails() {
        let mut pantry = Pantry::new();
        assert_eq!(
            pantry.set_available("salt", true),
            Err(ModelError::IngredientNotFound("salt".to_string()))
        );
    }

    #[test]
    fn remove_recipe_missing_fails() {
        let mut pantry = Pantry::new();
        assert_eq!(
            pantry.remove_recipe("Soup"),
            Err(ModelError::RecipeNotFound("Soup".to_string()))
        );
    }

    #[test]
    fn remove_ingredients_skips_absent_names() {
        let mut pantry = Pantry::new();
        pantry.add_ingredient("salt").unwrap();
        pantry.add_ingredient("pepper").unwrap();

        let removed = pantry.remove_ingredients(["salt", "nonexistent", "pepper"]);
        assert_eq!(removed, 2);
        assert_eq!(pantry.ingredient_count(), 0);
    }

    #[test]
    fn removing_ingredient_does_not_cascade_into_recipes() {
        let mut pantry = pancakes_pantry();
        pantry.remove_ingredients(["egg"]);

        let status = pantry.recipe_status("Pancakes").unwrap();
        assert_eq!(status.total(), 3);
        assert_eq!(status.entries[0].state, IngredientState::Unknown);
        assert_eq!(status.available, 1);
    }

    #[test]
    fn names_are_sorted_by_codepoint() {
        let mut pantry = Pantry::new();
        pantry.add_recipe("banana bread", "").unwrap();
        pantry.add_recipe("Apple pie", "").unwrap();
        pantry.add_recipe("Zucchini", "").unwrap();

        // Uppercase sorts before lowercase in codepoint order
        let names: Vec<_> = pantry.recipe_names().collect();
        assert_eq!(names, vec!["Apple pie", "Zucchini", "banana bread"]);
    }

    #[test]
    fn recipe_status_pancakes_scenario() {
        let pantry = pancakes_pantry();
        let status = pantry.recipe_status("Pancakes").unwrap();

        assert_eq!(status.total(), 3);
        assert_eq!(status.available, 2);
        assert_eq!(status.percent(), 66); // floor of 66.67
    }

    #[test]
    fn recipe_status_is_idempotent() {
        let pantry = pancakes_pantry();
        let first = pantry.recipe_status("Pancakes").unwrap();
        let second = pantry.recipe_status("Pancakes").unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn recipe_status_missing_recipe_fails() {
        let pantry = Pantry::new();
        assert_eq!(
            pantry.recipe_status("Pancakes"),
            Err(ModelError::RecipeNotFound("Pancakes".to_string()))
        );
    }

    #[test]
    fn ingredient_state_resolution() {
        let mut pantry = Pantry::new();
        pantry.add_ingredient("egg").unwrap();
        pantry.add_ingredient("milk").unwrap();
        pantry.set_available("egg", true).unwrap();

        assert_eq!(pantry.ingredient_state("egg"), IngredientState::Available);
        assert_eq!(pantry.ingredient_state("milk"), IngredientState::Missing);
        assert_eq!(pantry.ingredient_state("tofu"), IngredientState::Unknown);
    }

    #[test]
    fn serde_roundtrip() {
        let pantry = pancakes_pantry();

        let json = serde_json::to_string(&pantry).unwrap();
        let parsed: Pantry = serde_json::from_str(&json).unwrap();

        assert_eq!(pantry, parsed);
    }

    #[test]
    fn snapshot_shape_has_recipes_and_ingredients() {
        let pantry = pancakes_pantry();
        let value = serde_json::to_value(&pantry).unwrap();

        assert!(value.get("recipes").is_some());
        assert!(value.get("ingredients").is_some());
        assert_eq!(value["ingredients"]["egg"], serde_json::json!(true));
        assert_eq!(
            value["recipes"]["Pancakes"],
            serde_json::json!(["egg", "flour", "milk"])
        );
    }

    #[test]
    fn deserializes_missing_sections_as_empty() {
        let pantry: Pantry = serde_json::from_str("{}").unwrap();
        assert_eq!(pantry.recipe_count(), 0);
        assert_eq!(pantry.ingredient_count(), 0);
    }
}
