//! Expense Fixtures CLI
//!
//! Generates a year of synthetic expense data and writes
//! `expense_board.csv`, `categories.csv` and `expenses_365_days.csv`
//! into the current directory.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `info` or `debug` to control logging verbosity

use chrono::Local;
use expense_fixtures::board::BOARD_FILE;
use expense_fixtures::category::CATEGORIES_FILE;
use expense_fixtures::expense::EXPENSES_FILE;
use expense_fixtures::{Catalog, FixtureConfig, FixtureSet, Result};
use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::env;
use std::path::Path;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    if env::args().len() > 1 {
        warn!("Ignoring command-line arguments; the generator takes none");
    }

    let config = FixtureConfig::default();
    let catalog = Catalog::default();
    let now = Local::now().naive_local();

    let fixtures = FixtureSet::generate(&config, &catalog, StdRng::from_entropy(), now)?;
    fixtures.write_all(Path::new("."))?;

    println!("Generated expense board in {}", BOARD_FILE);
    println!("Generated category data in {}", CATEGORIES_FILE);
    println!(
        "Generated {} expense records in {}",
        fixtures.expenses.len(),
        EXPENSES_FILE
    );

    Ok(())
}
