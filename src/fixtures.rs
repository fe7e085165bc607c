//! Fixture generation pipeline.
//!
//! Builds the board, the categories and the expense history in memory,
//! then writes each collection to its own CSV file.

use crate::board::{build_board, ExpenseBoard, BOARD_COLUMNS, BOARD_FILE};
use crate::catalog::Catalog;
use crate::category::{build_categories, Category, CATEGORIES_FILE, CATEGORY_COLUMNS};
use crate::config::FixtureConfig;
use crate::error::Result;
use crate::expense::{Expense, ExpenseGenerator, EXPENSES_FILE, EXPENSE_COLUMNS};
use crate::writer::{write_csv, write_csv_record};
use chrono::NaiveDateTime;
use log::{debug, info};
use rand::Rng;
use std::collections::BTreeMap;
use std::path::Path;

/// Everything produced by one generator run.
#[derive(Debug, Clone)]
pub struct FixtureSet {
    pub board: ExpenseBoard,
    pub categories: Vec<Category>,
    pub expenses: Vec<Expense>,
}

impl FixtureSet {
    /// Generates a full fixture set as of `now`.
    ///
    /// The catalog is validated against the categories before any expense
    /// is drawn. Category ids and all expense values come from `rng`.
    pub fn generate<R: Rng>(
        config: &FixtureConfig,
        catalog: &Catalog,
        mut rng: R,
        now: NaiveDateTime,
    ) -> Result<Self> {
        info!(
            "Generating fixtures for board {} owned by {}",
            config.board_id, config.owner_id
        );

        let board = build_board(config, now);
        let categories = build_categories(config, &mut rng);
        catalog.validate(&categories)?;

        let expenses = ExpenseGenerator::new(config, catalog, &mut rng).generate(&categories, now)?;
        info!(
            "Generated {} categories and {} expenses",
            categories.len(),
            expenses.len()
        );

        let fixtures = FixtureSet {
            board,
            categories,
            expenses,
        };
        for (name, count) in fixtures.expenses_per_category() {
            debug!("{}: {} expenses", name, count);
        }

        Ok(fixtures)
    }

    /// Number of expenses per category name, in name order.
    pub fn expenses_per_category(&self) -> BTreeMap<&str, usize> {
        let mut counts: BTreeMap<&str, usize> = self
            .categories
            .iter()
            .map(|c| (c.name.as_str(), 0))
            .collect();

        for expense in &self.expenses {
            if let Some(category) = self.categories.iter().find(|c| c.id == expense.category_id) {
                *counts.entry(category.name.as_str()).or_default() += 1;
            }
        }

        counts
    }

    /// Writes the board, categories and expenses files into `dir`, in that order.
    ///
    /// Stops at the first failure; files written before it stay on disk.
    pub fn write_all(&self, dir: &Path) -> Result<()> {
        write_csv_record(dir.join(BOARD_FILE), &self.board, &BOARD_COLUMNS)?;
        write_csv(dir.join(CATEGORIES_FILE), &self.categories, &CATEGORY_COLUMNS)?;
        write_csv(dir.join(EXPENSES_FILE), &self.expenses, &EXPENSE_COLUMNS)?;
        info!("Wrote fixtures to {}", dir.display());
        Ok(())
    }
}
