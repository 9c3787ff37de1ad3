//! Query definitions: a query described as data.
//!
//! A definition is the list of builder calls in order, e.g.
//!
//! ```json
//! { "steps": [
//!     { "field": "active" },
//!     { "condition": { "operator": "equals", "operands": ["true"] } },
//!     { "join": "and" },
//!     { "field": "opened_at" },
//!     { "condition": { "operator": "between", "operands": [
//!         { "timestamp": "2016-02-01T00:00:00" },
//!         { "timestamp": "2016-02-10T00:00:00" } ] } },
//!     { "order_by": { "field": "number", "direction": "desc" } }
//! ] }
//! ```
//!
//! Steps are replayed through [`Query`], so a definition is held to exactly
//! the same rules as the fluent API.

use crate::{
    ast::{
        common::{Join, OrderBy},
        operand::Operand,
        operator::Operator,
    },
    build::query::Query,
    error::{DefinitionError, QueryError},
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryDefinition {
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Field(String),
    Condition(ConditionDef),
    Join(Join),
    OrderBy(OrderBy),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionDef {
    pub operator: Operator,
    #[serde(default)]
    pub operands: Vec<OperandDef>,
}

/// JSON shape of an operand: a number, a string, or `{"timestamp": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OperandDef {
    Int(i64),
    Timestamp { timestamp: NaiveDateTime },
    String(String),
}

impl From<OperandDef> for Operand {
    fn from(def: OperandDef) -> Self {
        match def {
            OperandDef::Int(i) => Operand::Int(i),
            OperandDef::Timestamp { timestamp } => Operand::Timestamp(timestamp),
            OperandDef::String(s) => Operand::String(s),
        }
    }
}

impl QueryDefinition {
    pub fn from_json(source: &str) -> Result<Self, DefinitionError> {
        let definition: QueryDefinition = serde_json::from_str(source)?;
        debug!("Loaded query definition with {} step(s)", definition.steps.len());
        Ok(definition)
    }

    /// Replays every step through a fresh [`Query`].
    pub fn to_query(&self) -> Result<Query, DefinitionError> {
        let mut query = Query::new();
        for (index, step) in self.steps.iter().enumerate() {
            step.apply(&mut query)
                .map_err(|source| DefinitionError::Step { index, source })?;
        }
        Ok(query)
    }

    /// Replays the definition and renders it with the default dialect.
    pub fn encode(&self) -> Result<String, DefinitionError> {
        let query = self.to_query()?;
        Ok(query.build()?)
    }
}

impl Step {
    pub fn apply(&self, query: &mut Query) -> Result<(), QueryError> {
        match self {
            Step::Field(name) => {
                query.field(name.as_str())?;
            }
            Step::Condition(cond) => {
                let operands = cond.operands.iter().cloned().map(Operand::from).collect();
                query.condition(cond.operator, operands)?;
            }
            Step::Join(join) => {
                query.join(*join)?;
            }
            Step::OrderBy(order) => {
                query.order(order.field.as_str(), order.direction)?;
            }
        }
        Ok(())
    }
}
