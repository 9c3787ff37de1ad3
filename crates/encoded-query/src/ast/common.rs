//! Small AST nodes shared by the builder and the renderer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Logical operator placed between two statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Join {
    /// Intersect with the previous statement.
    And,
    /// Union with the previous statement.
    Or,
    /// Start a new, disjoint filter set.
    Nq,
}

impl fmt::Display for Join {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Join::And => write!(f, "AND"),
            Join::Or => write!(f, "OR"),
            Join::Nq => write!(f, "NQ"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderDir {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    pub field: String,
    #[serde(default)]
    pub direction: OrderDir,
}
