//! Generator configuration.
//!
//! All values are compiled in; `FixtureConfig::default()` is what the
//! binary runs with. Tests construct their own to vary identifiers or the
//! length of the history.

use uuid::{uuid, Uuid};

/// Owner of the generated board and categories.
pub const DEFAULT_OWNER_ID: Uuid = uuid!("97d86741-0b79-4fef-98c5-480ebb21a963");

/// Identifier of the generated expense board.
pub const DEFAULT_BOARD_ID: Uuid = uuid!("705dc06b-ee20-4b7b-9fea-3d9c2ab3e1d9");

/// Number of daily expenses generated by default.
pub const DEFAULT_HISTORY_DAYS: u32 = 365;

/// Fixed identifiers and volume shared by every builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureConfig {
    /// Profile that owns the board, the categories and every expense.
    pub owner_id: Uuid,

    /// Board that every expense belongs to.
    pub board_id: Uuid,

    /// Length of the daily expense history, ending at generation time.
    pub history_days: u32,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        FixtureConfig {
            owner_id: DEFAULT_OWNER_ID,
            board_id: DEFAULT_BOARD_ID,
            history_days: DEFAULT_HISTORY_DAYS,
        }
    }
}
