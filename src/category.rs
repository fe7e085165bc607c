//! Spending categories and the category builder.

use crate::config::FixtureConfig;
use crate::writer::CsvRecord;
use rand::Rng;
use serde::Deserialize;
use std::borrow::Cow;
use uuid::{Builder, Uuid};

/// Output file for the categories.
pub const CATEGORIES_FILE: &str = "categories.csv";

/// Column order of `categories.csv`.
pub const CATEGORY_COLUMNS: [&str; 5] = ["id", "name", "icon", "color", "user_id"];

/// Fixed `(name, icon, color)` triples, in output order.
pub const CATEGORY_DEFINITIONS: [(&str, &str, &str); 8] = [
    ("Groceries", "cart", "#FF6B6B"),
    ("Transport", "car", "#4ECDC4"),
    ("Shopping", "shopping", "#45B7D1"),
    ("Entertainment", "movie", "#96CEB4"),
    ("Health", "heart", "#FFEEAD"),
    ("Dining", "food", "#FFB347"),
    ("Utilities", "home", "#77DD77"),
    ("Education", "school", "#AEC6CF"),
];

/// A labeled bucket used to classify expenses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub icon: String,
    pub color: String,

    /// Owning profile.
    pub user_id: Uuid,
}

/// Builds the 8 fixed categories, each with a fresh random v4 identifier.
///
/// Identifiers are drawn from `rng`, so a seeded generator gives
/// reproducible ids. Collisions are not checked.
pub fn build_categories<R: Rng + ?Sized>(config: &FixtureConfig, rng: &mut R) -> Vec<Category> {
    CATEGORY_DEFINITIONS
        .iter()
        .map(|&(name, icon, color)| Category {
            id: random_uuid(rng),
            name: name.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
            user_id: config.owner_id,
        })
        .collect()
}

/// Draws a version 4 UUID from the given random source.
fn random_uuid<R: Rng + ?Sized>(rng: &mut R) -> Uuid {
    Builder::from_random_bytes(rng.gen()).into_uuid()
}

impl CsvRecord for Category {
    fn field(&self, column: &str) -> Option<Cow<'_, str>> {
        let value = match column {
            "id" => Cow::Owned(self.id.to_string()),
            "name" => Cow::Borrowed(self.name.as_str()),
            "icon" => Cow::Borrowed(self.icon.as_str()),
            "color" => Cow::Borrowed(self.color.as_str()),
            "user_id" => Cow::Owned(self.user_id.to_string()),
            _ => return None,
        };
        Some(value)
    }
}
