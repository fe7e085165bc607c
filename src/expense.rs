//! Expense model and the daily expense generator.
//!
//! One expense is generated per calendar day over the configured history
//! window, which ends (exclusive) at the generation timestamp. Category,
//! amount, description and payment method are sampled independently for
//! every day from the injected random source.

use crate::catalog::{Catalog, SpendingProfile};
use crate::category::Category;
use crate::config::FixtureConfig;
use crate::decimal::Money;
use crate::error::{GeneratorError, Result};
use crate::timestamp;
use crate::writer::CsvRecord;
use chrono::{Duration, NaiveDateTime};
use log::debug;
use rand::Rng;
use serde::Deserialize;
use std::borrow::Cow;
use std::fmt;
use uuid::Uuid;

/// Output file for the expenses.
pub const EXPENSES_FILE: &str = "expenses_365_days.csv";

/// Column order of `expenses_365_days.csv`. Expenses carry no id column.
pub const EXPENSE_COLUMNS: [&str; 9] = [
    "board_id",
    "category_id",
    "amount",
    "description",
    "date",
    "created_by",
    "created_at",
    "updated_at",
    "payment_method",
];

/// Settlement channel used for an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum PaymentMethod {
    Card,
    Cash,
    #[serde(rename = "UPI")]
    Upi,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    Wallet,
}

impl PaymentMethod {
    /// Every payment method, in label order.
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::Card,
        PaymentMethod::Cash,
        PaymentMethod::Upi,
        PaymentMethod::BankTransfer,
        PaymentMethod::Wallet,
    ];

    /// Label written to the fixture file.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Card",
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Upi => "UPI",
            PaymentMethod::BankTransfer => "Bank Transfer",
            PaymentMethod::Wallet => "Wallet",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One dated, categorized expense on the board.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Expense {
    pub board_id: Uuid,
    pub category_id: Uuid,

    /// Positive amount with 2 decimal places.
    pub amount: Money,

    pub description: String,

    /// Day the expense occurred.
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub date: NaiveDateTime,

    pub created_by: Uuid,

    /// Equal to `date`.
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: NaiveDateTime,

    /// Equal to `date`.
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub updated_at: NaiveDateTime,

    pub payment_method: PaymentMethod,
}

impl CsvRecord for Expense {
    fn field(&self, column: &str) -> Option<Cow<'_, str>> {
        let value = match column {
            "board_id" => Cow::Owned(self.board_id.to_string()),
            "category_id" => Cow::Owned(self.category_id.to_string()),
            "amount" => Cow::Owned(self.amount.to_string()),
            "description" => Cow::Borrowed(self.description.as_str()),
            "date" => Cow::Owned(timestamp::format(&self.date)),
            "created_by" => Cow::Owned(self.created_by.to_string()),
            "created_at" => Cow::Owned(timestamp::format(&self.created_at)),
            "updated_at" => Cow::Owned(timestamp::format(&self.updated_at)),
            "payment_method" => Cow::Borrowed(self.payment_method.as_str()),
            _ => return None,
        };
        Some(value)
    }
}

/// Generates the daily expense history for one board.
pub struct ExpenseGenerator<'a, R> {
    config: &'a FixtureConfig,
    catalog: &'a Catalog,
    rng: R,
}

impl<'a, R: Rng> ExpenseGenerator<'a, R> {
    /// Creates a generator drawing from `rng`.
    pub fn new(config: &'a FixtureConfig, catalog: &'a Catalog, rng: R) -> Self {
        ExpenseGenerator {
            config,
            catalog,
            rng,
        }
    }

    /// Generates `config.history_days` expenses, one per day, in date order.
    ///
    /// Day `i` is `now - history_days + i`, so the window is
    /// `[now - history_days, now)` and keeps the time of day of `now`.
    pub fn generate(
        &mut self,
        categories: &[Category],
        now: NaiveDateTime,
    ) -> Result<Vec<Expense>> {
        if categories.is_empty() {
            return Err(GeneratorError::NoCategories);
        }

        let days = self.config.history_days;
        let start = now
            .checked_sub_signed(Duration::days(i64::from(days)))
            .ok_or(GeneratorError::HistoryOutOfRange { days })?;
        debug!("Generating {} expenses starting {}", days, start);

        let mut expenses = Vec::with_capacity(days as usize);
        for day in 0..days {
            let date = start
                .checked_add_signed(Duration::days(i64::from(day)))
                .ok_or(GeneratorError::HistoryOutOfRange { days })?;
            expenses.push(self.generate_one(categories, date)?);
        }

        Ok(expenses)
    }

    /// Builds the expense for a single day.
    fn generate_one(&mut self, categories: &[Category], date: NaiveDateTime) -> Result<Expense> {
        let catalog = self.catalog;
        let category = &categories[self.rng.gen_range(0..categories.len())];
        let profile = catalog.profile(&category.name)?;
        let cents = profile.check(&category.name)?;

        let amount = Money::from_cents(self.rng.gen_range(cents));
        let description = self.draw_description(profile);
        let payment_method = PaymentMethod::ALL[self.rng.gen_range(0..PaymentMethod::ALL.len())];

        Ok(Expense {
            board_id: self.config.board_id,
            category_id: category.id,
            amount,
            description,
            date,
            created_by: self.config.owner_id,
            created_at: date,
            updated_at: date,
            payment_method,
        })
    }

    /// Picks a description; the profile has already been checked non-empty.
    fn draw_description(&mut self, profile: &SpendingProfile) -> String {
        let idx = self.rng.gen_range(0..profile.descriptions.len());
        profile.descriptions[idx].clone()
    }
}
