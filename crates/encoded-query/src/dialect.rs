//! Defines the `Dialect` trait for the tokens of an encoded query syntax.

use crate::ast::{
    common::{Join, OrderDir},
    operator::Operator,
};
use chrono::NaiveDateTime;

pub trait Dialect: Send + Sync {
    /// Token placed between a field and its operand(s).
    fn operator_token(&self, op: Operator) -> &'static str;

    /// Token placed before a statement joined with `join`.
    fn join_token(&self, join: Join) -> &'static str;

    /// Separates the two bounds of a range operand.
    fn range_separator(&self) -> &'static str;

    /// Separates the members of an operand list.
    fn list_separator(&self) -> &'static str;

    /// Token placed before an order clause.
    fn order_token(&self, dir: OrderDir) -> &'static str;

    /// Renders a timestamp operand as a literal the record store evaluates.
    fn format_timestamp(&self, ts: &NaiveDateTime) -> String;

    /// Returns the name of the dialect.
    fn name(&self) -> String;
}

/// ServiceNow encoded query syntax, e.g. `active=true^ORpriority<3^NQstateISEMPTY`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceNow;

impl Dialect for ServiceNow {
    fn operator_token(&self, op: Operator) -> &'static str {
        match op {
            Operator::Equals => "=",
            Operator::NotEquals => "!=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::Contains => "LIKE",
            Operator::NotContains => "NOTLIKE",
            Operator::StartsWith => "STARTSWITH",
            Operator::EndsWith => "ENDSWITH",
            Operator::IsEmpty => "ISEMPTY",
            Operator::IsNotEmpty => "ISNOTEMPTY",
            Operator::Between => "BETWEEN",
            Operator::IsOneOf => "IN",
            Operator::IsNotOneOf => "NOT IN",
        }
    }

    fn join_token(&self, join: Join) -> &'static str {
        match join {
            Join::And => "^",
            Join::Or => "^OR",
            Join::Nq => "^NQ",
        }
    }

    fn range_separator(&self) -> &'static str {
        "@"
    }

    fn list_separator(&self) -> &'static str {
        ","
    }

    fn order_token(&self, dir: OrderDir) -> &'static str {
        match dir {
            OrderDir::Asc => "^ORDERBY",
            OrderDir::Desc => "^ORDERBYDESC",
        }
    }

    fn format_timestamp(&self, ts: &NaiveDateTime) -> String {
        // The wall-clock fields go out verbatim; no timezone is applied.
        format!(
            r#"javascript:gs.dateGenerate("{}")"#,
            ts.format("%Y-%m-%d %H:%M:%S")
        )
    }

    fn name(&self) -> String {
        "ServiceNow".into()
    }
}
