//! Tracks how much of the in-progress statement has been supplied.

use crate::ast::common::Join;

/// Builder position within the `field -> condition -> join` grammar.
///
/// ```text
/// AwaitingField { join: None }      --field-->      AwaitingOperator
/// AwaitingOperator                  --condition-->  StatementComplete
/// StatementComplete                 --and/or/nq-->  AwaitingField { join: Some(_) }
/// AwaitingField { join: Some(_) }   --field-->      AwaitingOperator
/// ```
///
/// Every other call from a given state is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cursor {
    /// No field yet. `join` is the logical operator waiting for the next
    /// statement, `None` only before the first statement.
    AwaitingField { join: Option<Join> },

    /// A field has been given and waits for its condition.
    AwaitingOperator { field: String, join: Option<Join> },

    /// The last statement is complete; `field` is its field.
    StatementComplete { field: String },
}

impl Default for Cursor {
    fn default() -> Self {
        Cursor::AwaitingField { join: None }
    }
}

impl Cursor {
    pub fn name(&self) -> &'static str {
        match self {
            Cursor::AwaitingField { .. } => "awaiting field",
            Cursor::AwaitingOperator { .. } => "awaiting operator",
            Cursor::StatementComplete { .. } => "statement complete",
        }
    }
}
