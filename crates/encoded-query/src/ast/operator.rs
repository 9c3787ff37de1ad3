use crate::{
    ast::operand::{Operand, OperandKind},
    error::{QueryError, Result},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operators a statement can apply to its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Equals,
    NotEquals,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
    Contains,
    NotContains,
    StartsWith,
    EndsWith,
    IsEmpty,
    IsNotEmpty,
    Between,
    IsOneOf,
    IsNotOneOf,
}

/// How many operands an operator takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Nullary,
    Unary,
    /// Exactly two operands of the same kind.
    Binary,
    /// One or more operands of the same kind.
    Variadic,
}

/// One row of the operator table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub arity: Arity,
    pub accepts: &'static [OperandKind],
}

const SCALAR: &[OperandKind] = &[OperandKind::String, OperandKind::Int];
const INT: &[OperandKind] = &[OperandKind::Int];
const STRING: &[OperandKind] = &[OperandKind::String];
const RANGE: &[OperandKind] = &[OperandKind::Int, OperandKind::Timestamp];
const NONE: &[OperandKind] = &[];

impl Operator {
    pub const fn signature(self) -> Signature {
        let (arity, accepts) = match self {
            Operator::Equals | Operator::NotEquals => (Arity::Unary, SCALAR),
            Operator::GreaterThan
            | Operator::GreaterThanOrEqual
            | Operator::LessThan
            | Operator::LessThanOrEqual => (Arity::Unary, INT),
            Operator::Contains
            | Operator::NotContains
            | Operator::StartsWith
            | Operator::EndsWith => (Arity::Unary, STRING),
            Operator::IsEmpty | Operator::IsNotEmpty => (Arity::Nullary, NONE),
            Operator::Between => (Arity::Binary, RANGE),
            Operator::IsOneOf | Operator::IsNotOneOf => (Arity::Variadic, STRING),
        };
        Signature { arity, accepts }
    }

    /// Checks operand count and kinds against the operator table.
    pub fn check(self, operands: &[Operand]) -> Result<()> {
        let signature = self.signature();

        let arity_ok = match signature.arity {
            Arity::Nullary => operands.is_empty(),
            Arity::Unary => operands.len() == 1,
            Arity::Binary => operands.len() == 2,
            Arity::Variadic => !operands.is_empty(),
        };
        if !arity_ok {
            let expected = match signature.arity {
                Arity::Nullary => "no operands",
                Arity::Unary => "exactly one operand",
                Arity::Binary => "exactly two operands",
                Arity::Variadic => "at least one operand",
            };
            return Err(QueryError::type_error(
                self,
                format!("expected {expected}, got {}", operands.len()),
            ));
        }

        for operand in operands {
            let kind = operand.kind();
            if !signature.accepts.contains(&kind) {
                return Err(QueryError::type_error(
                    self,
                    format!("{kind} operand is not accepted"),
                ));
            }
        }

        if let Some((first, rest)) = operands.split_first() {
            if rest.iter().any(|o| o.kind() != first.kind()) {
                return Err(QueryError::type_error(
                    self,
                    "operands must all be of the same kind",
                ));
            }
        }

        Ok(())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operator::Equals => "equals",
            Operator::NotEquals => "not_equals",
            Operator::GreaterThan => "greater_than",
            Operator::GreaterThanOrEqual => "greater_than_or_equal",
            Operator::LessThan => "less_than",
            Operator::LessThanOrEqual => "less_than_or_equal",
            Operator::Contains => "contains",
            Operator::NotContains => "not_contains",
            Operator::StartsWith => "starts_with",
            Operator::EndsWith => "ends_with",
            Operator::IsEmpty => "is_empty",
            Operator::IsNotEmpty => "is_not_empty",
            Operator::Between => "between",
            Operator::IsOneOf => "is_one_of",
            Operator::IsNotOneOf => "is_not_one_of",
        };
        write!(f, "{name}")
    }
}
