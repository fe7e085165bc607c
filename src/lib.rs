//! # Expense Fixtures
//!
//! Generates a year of synthetic personal-finance data for seeding a demo
//! or test database: one expense board, eight spending categories and one
//! expense per day, each written to its own CSV file.
//!
//! ## Design Principles
//!
//! - **Explicit configuration**: fixed identifiers live in [`FixtureConfig`]
//! - **Injectable randomness**: every sampler takes an `rand::Rng`
//! - **Fixed-point amounts**: 2 decimal places via `rust_decimal`
//! - **Explicit column order**: each file is written from a column list
//!
//! ## Example
//!
//! ```no_run
//! use expense_fixtures::{Catalog, FixtureConfig, FixtureSet};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use std::path::Path;
//!
//! let now = chrono::Local::now().naive_local();
//! let fixtures = FixtureSet::generate(
//!     &FixtureConfig::default(),
//!     &Catalog::default(),
//!     StdRng::seed_from_u64(7),
//!     now,
//! )
//! .unwrap();
//! fixtures.write_all(Path::new(".")).unwrap();
//! ```

pub mod board;
pub mod catalog;
pub mod category;
pub mod config;
pub mod decimal;
pub mod error;
pub mod expense;
pub mod fixtures;
pub mod timestamp;
pub mod writer;

pub use board::{build_board, ExpenseBoard};
pub use catalog::{Catalog, SpendingProfile};
pub use category::{build_categories, Category};
pub use config::FixtureConfig;
pub use decimal::Money;
pub use error::{GeneratorError, Result};
pub use expense::{Expense, ExpenseGenerator, PaymentMethod};
pub use fixtures::FixtureSet;
pub use writer::{write_csv, write_csv_record, CsvRecord};
