//! Plain-data display cards built from raw drink records.
//!
//! Card construction is where the API's quirks get ironed out: numbered
//! ingredient/measure columns are paired up by suffix and the instruction
//! blob is split into sentences. The orchestrator hands cards to the
//! renderer; nothing here touches any output surface.

use serde::{Deserialize, Serialize};

use crate::api::{DrinkRecord, INGREDIENT_SLOTS};

/// Shown when the API returns a record without a name.
pub const UNNAMED_DRINK: &str = "No name found!";

/// An ingredient together with its measured amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientMeasure {
    pub ingredient: String,
    pub measure: String,
}

/// Everything a renderer needs to display one drink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayCard {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Instruction sentences, each terminated with a period.
    pub instructions: Vec<String>,
    /// Paired ingredients; empty when the record lists none.
    pub ingredients: Vec<IngredientMeasure>,
}

impl DisplayCard {
    /// Build a card from a raw record.
    pub fn from_record(record: &DrinkRecord) -> Self {
        Self {
            name: record.name().unwrap_or(UNNAMED_DRINK).to_string(),
            thumbnail: record.thumbnail().map(str::to_string),
            instructions: split_instructions(record.instructions()),
            ingredients: pair_ingredients(record),
        }
    }

    /// Whether the record listed any ingredient/measure pairs.
    pub fn has_ingredients(&self) -> bool {
        !self.ingredients.is_empty()
    }
}

/// Split the instruction blob on periods into non-empty sentences,
/// re-terminating each with a period.
fn split_instructions(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    raw.split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| format!("{}.", s))
        .collect()
}

/// Pair the numbered ingredient and measure columns by slot. A pair exists
/// only when both the ingredient and its measure are present and non-empty;
/// unused slots are null.
fn pair_ingredients(record: &DrinkRecord) -> Vec<IngredientMeasure> {
    (1..=INGREDIENT_SLOTS)
        .filter_map(|slot| {
            let ingredient = record.ingredient(slot)?;
            let measure = record.measure(slot)?;
            Some(IngredientMeasure {
                ingredient: ingredient.to_string(),
                measure: measure.to_string(),
            })
        })
        .collect()
}
