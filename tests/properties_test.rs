//! Property tests over the written fixture files.
//!
//! Each test generates a fixture set, writes it to a scratch directory and
//! re-reads the files with a plain CSV reader.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use expense_fixtures::board::{BOARD_COLUMNS, BOARD_FILE};
use expense_fixtures::category::{CATEGORIES_FILE, CATEGORY_COLUMNS, CATEGORY_DEFINITIONS};
use expense_fixtures::expense::{EXPENSES_FILE, EXPENSE_COLUMNS};
use expense_fixtures::{
    Catalog, Category, Expense, ExpenseBoard, FixtureConfig, FixtureSet, PaymentMethod,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::Path;
use tempfile::TempDir;

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 7, 1)
        .unwrap()
        .and_hms_micro_opt(18, 45, 30, 987_654)
        .unwrap()
}

/// Generate with the given seed and write into a fresh directory
fn write_fixtures(seed: u64) -> TempDir {
    let dir = TempDir::new().unwrap();
    FixtureSet::generate(
        &FixtureConfig::default(),
        &Catalog::default(),
        StdRng::seed_from_u64(seed),
        now(),
    )
    .unwrap()
    .write_all(dir.path())
    .unwrap();
    dir
}

fn read_headers(path: &Path) -> Vec<String> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader.headers().unwrap().iter().map(String::from).collect()
}

fn read_rows<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader.deserialize::<T>().map(|row| row.unwrap()).collect()
}

// ==================== HEADERS ====================

#[test]
fn test_headers_match_documented_columns() {
    let dir = write_fixtures(1);

    assert_eq!(read_headers(&dir.path().join(BOARD_FILE)), BOARD_COLUMNS);
    assert_eq!(read_headers(&dir.path().join(CATEGORIES_FILE)), CATEGORY_COLUMNS);
    assert_eq!(read_headers(&dir.path().join(EXPENSES_FILE)), EXPENSE_COLUMNS);
}

#[test]
fn test_every_row_has_full_field_count() {
    let dir = write_fixtures(2);

    for (file, width) in [
        (BOARD_FILE, BOARD_COLUMNS.len()),
        (CATEGORIES_FILE, CATEGORY_COLUMNS.len()),
        (EXPENSES_FILE, EXPENSE_COLUMNS.len()),
    ] {
        let mut reader = csv::Reader::from_path(dir.path().join(file)).unwrap();
        for record in reader.records() {
            assert_eq!(record.unwrap().len(), width, "row width in {}", file);
        }
    }
}

// ==================== BOARD ====================

#[test]
fn test_board_file_has_single_default_row() {
    let dir = write_fixtures(3);
    let boards: Vec<ExpenseBoard> = read_rows(&dir.path().join(BOARD_FILE));

    assert_eq!(boards.len(), 1);
    let board = &boards[0];
    assert_eq!(board.id, FixtureConfig::default().board_id);
    assert_eq!(board.total_budget.to_string(), "0.00");
    assert!(!board.is_default);
    assert!(board.per_person_budget.is_none());
    assert!(board.share_code.is_none());
    assert_eq!(board.created_at, now());
    assert_eq!(board.updated_at, now());
}

// ==================== CATEGORIES ====================

#[test]
fn test_categories_are_the_fixed_eight() {
    let dir = write_fixtures(4);
    let categories: Vec<Category> = read_rows(&dir.path().join(CATEGORIES_FILE));

    assert_eq!(categories.len(), 8);

    let names: HashSet<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    let expected: HashSet<&str> = CATEGORY_DEFINITIONS.iter().map(|d| d.0).collect();
    assert_eq!(names, expected);

    let ids: HashSet<_> = categories.iter().map(|c| c.id).collect();
    assert_eq!(ids.len(), 8);
}

// ==================== EXPENSES ====================

#[test]
fn test_expense_dates_fill_the_window() {
    let dir = write_fixtures(5);
    let expenses: Vec<Expense> = read_rows(&dir.path().join(EXPENSES_FILE));

    assert_eq!(expenses.len(), 365);

    let start = now() - Duration::days(365);
    let expected: Vec<NaiveDateTime> = (0..365).map(|i| start + Duration::days(i)).collect();
    let dates: Vec<NaiveDateTime> = expenses.iter().map(|e| e.date).collect();
    assert_eq!(dates, expected);

    for expense in &expenses {
        assert!(expense.date >= start && expense.date < now());
        assert_eq!(expense.created_at, expense.date);
        assert_eq!(expense.updated_at, expense.date);
    }
}

#[test]
fn test_expenses_reference_written_categories() {
    let dir = write_fixtures(6);
    let categories: Vec<Category> = read_rows(&dir.path().join(CATEGORIES_FILE));
    let expenses: Vec<Expense> = read_rows(&dir.path().join(EXPENSES_FILE));

    let ids: HashSet<_> = categories.iter().map(|c| c.id).collect();
    for expense in &expenses {
        assert!(ids.contains(&expense.category_id));
        assert_eq!(expense.board_id, FixtureConfig::default().board_id);
        assert_eq!(expense.created_by, FixtureConfig::default().owner_id);
    }
}

#[test]
fn test_amounts_fall_in_category_range() {
    let dir = write_fixtures(7);
    let categories: Vec<Category> = read_rows(&dir.path().join(CATEGORIES_FILE));
    let expenses: Vec<Expense> = read_rows(&dir.path().join(EXPENSES_FILE));
    let catalog = Catalog::default();

    for expense in &expenses {
        let category = categories
            .iter()
            .find(|c| c.id == expense.category_id)
            .unwrap();
        let profile = catalog.profile(&category.name).unwrap();

        assert!(expense.amount.is_positive());
        assert!(
            profile.contains(expense.amount),
            "{} amount {} outside [{}, {}]",
            category.name,
            expense.amount,
            profile.min,
            profile.max
        );
        assert!(profile.descriptions.contains(&expense.description));
    }
}

#[test]
fn test_payment_methods_are_known_labels() {
    let dir = write_fixtures(8);
    let expenses: Vec<Expense> = read_rows(&dir.path().join(EXPENSES_FILE));

    let methods: HashSet<PaymentMethod> = expenses.iter().map(|e| e.payment_method).collect();
    assert!(methods.iter().all(|m| PaymentMethod::ALL.contains(m)));
    assert!(methods.contains(&PaymentMethod::BankTransfer));
}

// ==================== RUN-TO-RUN ====================

#[test]
fn test_different_seeds_share_only_fixed_identifiers() {
    let first = write_fixtures(9);
    let second = write_fixtures(10);

    let board_a: Vec<ExpenseBoard> = read_rows(&first.path().join(BOARD_FILE));
    let board_b: Vec<ExpenseBoard> = read_rows(&second.path().join(BOARD_FILE));
    assert_eq!(board_a[0].id, board_b[0].id);

    let cats_a: Vec<Category> = read_rows(&first.path().join(CATEGORIES_FILE));
    let cats_b: Vec<Category> = read_rows(&second.path().join(CATEGORIES_FILE));
    let ids_a: HashSet<_> = cats_a.iter().map(|c| c.id).collect();
    assert!(cats_b.iter().all(|c| !ids_a.contains(&c.id)));

    let exp_a: Vec<Expense> = read_rows(&first.path().join(EXPENSES_FILE));
    let exp_b: Vec<Expense> = read_rows(&second.path().join(EXPENSES_FILE));
    let amounts_a: Vec<_> = exp_a.iter().map(|e| e.amount).collect();
    let amounts_b: Vec<_> = exp_b.iter().map(|e| e.amount).collect();
    assert_ne!(amounts_a, amounts_b);
}

#[test]
fn test_same_seed_reproduces_files() {
    let first = write_fixtures(11);
    let second = write_fixtures(11);

    for file in [BOARD_FILE, CATEGORIES_FILE, EXPENSES_FILE] {
        assert_eq!(
            std::fs::read_to_string(first.path().join(file)).unwrap(),
            std::fs::read_to_string(second.path().join(file)).unwrap(),
            "{} differs",
            file
        );
    }
}
