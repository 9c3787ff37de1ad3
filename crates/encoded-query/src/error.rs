use crate::ast::operator::Operator;
use thiserror::Error;

/// Errors raised while building or rendering an encoded query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A call needed a field (or a completed statement) that isn't there.
    #[error("Missing field: {0}")]
    FieldMissing(MissingField),

    /// A second operator was applied to a statement that already has one.
    #[error("Multiple conditions on field '{field}': a statement takes a single operator")]
    MultipleConditions { field: String },

    /// Rendering was requested before any statement was completed.
    #[error("Empty query: at least one field with a condition is required")]
    EmptyQuery,

    /// The operands don't fit what the operator accepts.
    #[error("Type error in '{operator}': {reason}")]
    Type { operator: Operator, reason: String },
}

/// Why a [`QueryError::FieldMissing`] was raised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MissingField {
    #[error("a condition requires a preceding field()")]
    BeforeCondition,

    #[error("field name cannot be empty")]
    EmptyName,

    #[error("a logical operator requires a completed statement to join from")]
    NothingToJoin,

    #[error("logical operators cannot follow each other")]
    ConsecutiveJoin,

    #[error("the query ends with a logical operator and no statement after it")]
    DanglingJoin,

    #[error("field '{0}' has no condition")]
    NoCondition(String),
}

impl QueryError {
    pub(crate) fn type_error(operator: Operator, reason: impl Into<String>) -> Self {
        QueryError::Type {
            operator,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, QueryError>;

/// Errors raised while loading or replaying a query definition.
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("Invalid query definition: {0}")]
    Json(#[from] serde_json::Error),

    /// A step was rejected by the builder. `index` is zero-based.
    #[error("Step {index} rejected: {source}")]
    Step {
        index: usize,
        #[source]
        source: QueryError,
    },

    /// All steps were accepted but the query could not be rendered.
    #[error("Query rejected: {0}")]
    Query(#[from] QueryError),
}
