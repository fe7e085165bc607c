//! Per-category spending profiles: amount range and description vocabulary.
//!
//! The catalog is checked against the category list before any expense is
//! generated; a category without a profile is a configuration error.

use crate::category::Category;
use crate::decimal::Money;
use crate::error::{GeneratorError, Result};
use log::debug;
use std::collections::HashMap;
use std::ops::RangeInclusive;

/// Amount range and candidate descriptions for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpendingProfile {
    /// Smallest amount that may be drawn (inclusive).
    pub min: Money,

    /// Largest amount that may be drawn (inclusive).
    pub max: Money,

    /// Descriptions to pick from.
    pub descriptions: Vec<String>,
}

impl SpendingProfile {
    /// Creates a profile from whole-unit bounds and a description list.
    pub fn new(min_units: i64, max_units: i64, descriptions: &[&str]) -> Self {
        SpendingProfile {
            min: Money::from_units(min_units),
            max: Money::from_units(max_units),
            descriptions: descriptions.iter().map(|d| d.to_string()).collect(),
        }
    }

    /// Returns `true` if `amount` lies within `[min, max]`.
    pub fn contains(&self, amount: Money) -> bool {
        self.min <= amount && amount <= self.max
    }

    /// Checks the profile and returns its bounds in cents.
    pub(crate) fn check(&self, category: &str) -> Result<RangeInclusive<i64>> {
        let invalid = |message: String| GeneratorError::InvalidProfile {
            category: category.to_string(),
            message,
        };

        if !self.min.is_positive() {
            return Err(invalid(format!(
                "minimum amount {} must be positive",
                self.min
            )));
        }
        if self.min > self.max {
            return Err(invalid(format!(
                "minimum {} exceeds maximum {}",
                self.min, self.max
            )));
        }
        if self.descriptions.is_empty() {
            return Err(invalid("no descriptions".to_string()));
        }
        match (self.min.cents(), self.max.cents()) {
            (Some(min), Some(max)) => Ok(min..=max),
            _ => Err(invalid(format!("maximum {} is too large", self.max))),
        }
    }
}

/// Spending profiles keyed by category name.
#[derive(Debug, Clone)]
pub struct Catalog {
    profiles: HashMap<String, SpendingProfile>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog {
            profiles: HashMap::new(),
        }
    }

    /// Adds or replaces the profile for a category.
    pub fn insert(&mut self, category: impl Into<String>, profile: SpendingProfile) {
        self.profiles.insert(category.into(), profile);
    }

    /// Removes the profile for a category, returning it if present.
    pub fn remove(&mut self, category: &str) -> Option<SpendingProfile> {
        self.profiles.remove(category)
    }

    /// Looks up the profile for a category name.
    pub fn profile(&self, category: &str) -> Result<&SpendingProfile> {
        self.profiles
            .get(category)
            .ok_or_else(|| GeneratorError::MissingProfile {
                category: category.to_string(),
            })
    }

    /// Number of profiles in the catalog.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// Checks that every category has a usable profile.
    pub fn validate(&self, categories: &[Category]) -> Result<()> {
        for category in categories {
            self.profile(&category.name)?.check(&category.name)?;
        }
        debug!(
            "Spending catalog covers all {} categories",
            categories.len()
        );
        Ok(())
    }

    /// The built-in profiles for the eight standard categories.
    pub fn standard() -> Self {
        let mut catalog = Catalog::new();
        catalog.insert(
            "Groceries",
            SpendingProfile::new(
                200,
                5000,
                &["Weekly groceries", "Monthly supplies", "Supermarket shopping"],
            ),
        );
        catalog.insert(
            "Transport",
            SpendingProfile::new(
                50,
                2000,
                &["Fuel", "Public transport", "Cab ride", "Train ticket"],
            ),
        );
        catalog.insert(
            "Shopping",
            SpendingProfile::new(
                500,
                10000,
                &["Clothing", "Electronics", "Home decor", "Gifts"],
            ),
        );
        catalog.insert(
            "Entertainment",
            SpendingProfile::new(
                300,
                5000,
                &["Movie tickets", "Concert", "Theme park", "Streaming service"],
            ),
        );
        catalog.insert(
            "Health",
            SpendingProfile::new(
                500,
                15000,
                &["Doctor visit", "Medicines", "Health checkup", "Gym membership"],
            ),
        );
        catalog.insert(
            "Dining",
            SpendingProfile::new(
                200,
                4000,
                &["Restaurant dinner", "Cafe lunch", "Takeout", "Food delivery"],
            ),
        );
        catalog.insert(
            "Utilities",
            SpendingProfile::new(
                1000,
                8000,
                &["Electricity bill", "Water bill", "Internet bill", "Gas bill"],
            ),
        );
        catalog.insert(
            "Education",
            SpendingProfile::new(
                1000,
                20000,
                &["Course fee", "Books", "Online course", "Workshop"],
            ),
        );
        catalog
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
