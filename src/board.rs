//! Expense board model and builder.

use crate::config::FixtureConfig;
use crate::decimal::Money;
use crate::timestamp;
use crate::writer::CsvRecord;
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::borrow::Cow;
use uuid::Uuid;

/// Output file for the board.
pub const BOARD_FILE: &str = "expense_board.csv";

/// Column order of `expense_board.csv`.
pub const BOARD_COLUMNS: [&str; 12] = [
    "id",
    "name",
    "description",
    "total_budget",
    "created_by",
    "created_at",
    "updated_at",
    "board_color",
    "board_icon",
    "per_person_budget",
    "share_code",
    "is_default",
];

/// A named container that aggregates expenses under one budget.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExpenseBoard {
    pub id: Uuid,
    pub name: String,
    pub description: String,

    /// Overall budget. Always zero for generated boards.
    pub total_budget: Money,

    pub created_by: Uuid,

    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: NaiveDateTime,

    #[serde(deserialize_with = "timestamp::deserialize")]
    pub updated_at: NaiveDateTime,

    pub board_color: String,
    pub board_icon: String,

    /// Optional budget per member. Absent for generated boards.
    pub per_person_budget: Option<Money>,

    /// Optional invite code. Absent for generated boards.
    pub share_code: Option<String>,

    pub is_default: bool,
}

/// Builds the single sample board owned by `config.owner_id`.
///
/// Both timestamps are set to `now`.
pub fn build_board(config: &FixtureConfig, now: NaiveDateTime) -> ExpenseBoard {
    ExpenseBoard {
        id: config.board_id,
        name: "Sample Expense Board".to_string(),
        description: format!(
            "Sample board with {} days of expenses",
            config.history_days
        ),
        total_budget: Money::ZERO,
        created_by: config.owner_id,
        created_at: now,
        updated_at: now,
        board_color: "#FF6B6B".to_string(),
        board_icon: "home".to_string(),
        per_person_budget: None,
        share_code: None,
        is_default: false,
    }
}

impl CsvRecord for ExpenseBoard {
    fn field(&self, column: &str) -> Option<Cow<'_, str>> {
        let value = match column {
            "id" => Cow::Owned(self.id.to_string()),
            "name" => Cow::Borrowed(self.name.as_str()),
            "description" => Cow::Borrowed(self.description.as_str()),
            "total_budget" => Cow::Owned(self.total_budget.to_string()),
            "created_by" => Cow::Owned(self.created_by.to_string()),
            "created_at" => Cow::Owned(timestamp::format(&self.created_at)),
            "updated_at" => Cow::Owned(timestamp::format(&self.updated_at)),
            "board_color" => Cow::Borrowed(self.board_color.as_str()),
            "board_icon" => Cow::Borrowed(self.board_icon.as_str()),
            "per_person_budget" => match &self.per_person_budget {
                Some(budget) => Cow::Owned(budget.to_string()),
                None => Cow::Borrowed(""),
            },
            "share_code" => Cow::Borrowed(self.share_code.as_deref().unwrap_or("")),
            "is_default" => Cow::Owned(self.is_default.to_string()),
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_micro_opt(9, 30, 0, 250_000)
            .unwrap()
    }

    #[test]
    fn test_board_uses_config_identifiers() {
        let config = FixtureConfig::default();
        let board = build_board(&config, now());

        assert_eq!(board.id, config.board_id);
        assert_eq!(board.created_by, config.owner_id);
        assert_eq!(board.name, "Sample Expense Board");
        assert_eq!(board.description, "Sample board with 365 days of expenses");
    }

    #[test]
    fn test_board_defaults() {
        let board = build_board(&FixtureConfig::default(), now());

        assert!(board.total_budget.is_zero());
        assert_eq!(board.created_at, now());
        assert_eq!(board.created_at, board.updated_at);
        assert!(board.per_person_budget.is_none());
        assert!(board.share_code.is_none());
        assert!(!board.is_default);
    }

    #[test]
    fn test_board_fields_render_for_csv() {
        let board = build_board(&FixtureConfig::default(), now());

        assert_eq!(board.field("total_budget").unwrap(), "0.00");
        assert_eq!(board.field("per_person_budget").unwrap(), "");
        assert_eq!(board.field("share_code").unwrap(), "");
        assert_eq!(board.field("is_default").unwrap(), "false");
        assert_eq!(
            board.field("created_at").unwrap(),
            "2024-06-15T09:30:00.250000"
        );
        assert!(board.field("owner").is_none());
    }

    #[test]
    fn test_every_board_column_is_provided() {
        let board = build_board(&FixtureConfig::default(), now());
        for column in BOARD_COLUMNS {
            assert!(board.field(column).is_some(), "missing column {}", column);
        }
    }
}
