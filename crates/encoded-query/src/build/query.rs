//! Provides the fluent, validating builder for encoded queries.
//!
//! Every call is checked against the [`Cursor`] as soon as it is made, so an
//! out-of-order call fails right where it happens. The only checks left for
//! [`Query::build`] are the ones that depend on the chain being finished: an
//! empty query, a trailing logical operator, or a field without a condition.

use crate::{
    ast::{
        common::{Join, OrderBy, OrderDir},
        expr::Expression,
        operand::Operand,
        operator::Operator,
        statement::Statement,
    },
    build::cursor::Cursor,
    dialect::{Dialect, ServiceNow},
    error::{MissingField, QueryError, Result},
    render::{Render, Renderer},
};
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct Query {
    expr: Expression,
    cursor: Cursor,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new statement on `name`.
    ///
    /// A pending field without a condition is replaced. Fails with
    /// `MultipleConditions` right after a completed statement, since a join
    /// must come first, and with `FieldMissing` for an empty name. On error
    /// nothing changes.
    pub fn field(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        let field = name.into();
        if field.is_empty() {
            debug!("Rejected empty field name while {}", self.cursor.name());
            return Err(QueryError::FieldMissing(MissingField::EmptyName));
        }

        let join = match &self.cursor {
            Cursor::AwaitingField { join } => *join,
            Cursor::AwaitingOperator { field: pending, join } => {
                debug!("Replacing pending field '{}' with '{}'", pending, field);
                *join
            }
            Cursor::StatementComplete { .. } => {
                debug!("Rejected field '{}' with no join after a statement", field);
                return Err(QueryError::MultipleConditions { field });
            }
        };
        debug!("Field '{}' set", field);
        self.cursor = Cursor::AwaitingOperator { field, join };
        Ok(self)
    }

    pub fn equals(&mut self, value: impl Into<Operand>) -> Result<&mut Self> {
        self.condition(Operator::Equals, vec![value.into()])
    }

    pub fn not_equals(&mut self, value: impl Into<Operand>) -> Result<&mut Self> {
        self.condition(Operator::NotEquals, vec![value.into()])
    }

    pub fn greater_than(&mut self, value: impl Into<Operand>) -> Result<&mut Self> {
        self.condition(Operator::GreaterThan, vec![value.into()])
    }

    pub fn greater_than_or_equal(&mut self, value: impl Into<Operand>) -> Result<&mut Self> {
        self.condition(Operator::GreaterThanOrEqual, vec![value.into()])
    }

    pub fn less_than(&mut self, value: impl Into<Operand>) -> Result<&mut Self> {
        self.condition(Operator::LessThan, vec![value.into()])
    }

    pub fn less_than_or_equal(&mut self, value: impl Into<Operand>) -> Result<&mut Self> {
        self.condition(Operator::LessThanOrEqual, vec![value.into()])
    }

    /// Renders as `LIKE`.
    pub fn contains(&mut self, value: impl Into<Operand>) -> Result<&mut Self> {
        self.condition(Operator::Contains, vec![value.into()])
    }

    pub fn not_contains(&mut self, value: impl Into<Operand>) -> Result<&mut Self> {
        self.condition(Operator::NotContains, vec![value.into()])
    }

    pub fn starts_with(&mut self, value: impl Into<Operand>) -> Result<&mut Self> {
        self.condition(Operator::StartsWith, vec![value.into()])
    }

    pub fn ends_with(&mut self, value: impl Into<Operand>) -> Result<&mut Self> {
        self.condition(Operator::EndsWith, vec![value.into()])
    }

    pub fn is_empty(&mut self) -> Result<&mut Self> {
        self.condition(Operator::IsEmpty, Vec::new())
    }

    pub fn is_not_empty(&mut self) -> Result<&mut Self> {
        self.condition(Operator::IsNotEmpty, Vec::new())
    }

    /// Both bounds must be integers, or both timestamps.
    pub fn between(
        &mut self,
        low: impl Into<Operand>,
        high: impl Into<Operand>,
    ) -> Result<&mut Self> {
        self.condition(Operator::Between, vec![low.into(), high.into()])
    }

    pub fn is_one_of<I, T>(&mut self, values: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Operand>,
    {
        let operands = values.into_iter().map(Into::into).collect();
        self.condition(Operator::IsOneOf, operands)
    }

    pub fn is_not_one_of<I, T>(&mut self, values: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<Operand>,
    {
        let operands = values.into_iter().map(Into::into).collect();
        self.condition(Operator::IsNotOneOf, operands)
    }

    /// Completes the pending statement with `operator`.
    ///
    /// Checks run in order: missing field, then a second condition on the
    /// same statement, then the operator table. On error nothing changes.
    pub fn condition(&mut self, operator: Operator, operands: Vec<Operand>) -> Result<&mut Self> {
        let (field, join) = match &self.cursor {
            Cursor::AwaitingField { .. } => {
                let err = QueryError::FieldMissing(MissingField::BeforeCondition);
                return Err(self.reject(operator, err));
            }
            Cursor::StatementComplete { field } => {
                let err = QueryError::MultipleConditions {
                    field: field.clone(),
                };
                return Err(self.reject(operator, err));
            }
            Cursor::AwaitingOperator { field, join } => (field.clone(), *join),
        };

        let statement = Statement::new(field.clone(), operator, operands)
            .map_err(|err| self.reject(operator, err))?;

        debug!("Statement on '{}' completed with '{}'", field, operator);
        self.expr.push(join, statement);
        self.cursor = Cursor::StatementComplete { field };
        Ok(self)
    }

    pub fn and(&mut self) -> Result<&mut Self> {
        self.join(Join::And)
    }

    pub fn or(&mut self) -> Result<&mut Self> {
        self.join(Join::Or)
    }

    /// Starts a new, disjoint filter set.
    pub fn nq(&mut self) -> Result<&mut Self> {
        self.join(Join::Nq)
    }

    /// Sets the logical operator for the next statement.
    ///
    /// Fails right away when there is no completed statement to join from.
    pub fn join(&mut self, join: Join) -> Result<&mut Self> {
        let reason = match &self.cursor {
            Cursor::StatementComplete { .. } => {
                debug!("Join {} pending", join);
                self.cursor = Cursor::AwaitingField { join: Some(join) };
                return Ok(self);
            }
            Cursor::AwaitingField { join: None } => MissingField::NothingToJoin,
            Cursor::AwaitingField { join: Some(_) } => MissingField::ConsecutiveJoin,
            Cursor::AwaitingOperator { field, .. } => MissingField::NoCondition(field.clone()),
        };
        debug!("Rejected join {} while {}", join, self.cursor.name());
        Err(QueryError::FieldMissing(reason))
    }

    pub fn order_ascending(&mut self, field: impl Into<String>) -> Result<&mut Self> {
        self.order(field, OrderDir::Asc)
    }

    pub fn order_descending(&mut self, field: impl Into<String>) -> Result<&mut Self> {
        self.order(field, OrderDir::Desc)
    }

    /// Adds an order clause. Order clauses always render after every filter
    /// statement, in the order they were added.
    pub fn order(&mut self, field: impl Into<String>, direction: OrderDir) -> Result<&mut Self> {
        let reason = match &self.cursor {
            Cursor::AwaitingField { join: Some(_) } => Some(MissingField::DanglingJoin),
            Cursor::AwaitingOperator { field, .. } => {
                Some(MissingField::NoCondition(field.clone()))
            }
            Cursor::AwaitingField { join: None } | Cursor::StatementComplete { .. } => None,
        };
        if let Some(reason) = reason {
            debug!("Rejected order clause while {}", self.cursor.name());
            return Err(QueryError::FieldMissing(reason));
        }

        let field = field.into();
        debug!("Order by '{}' {:?}", field, direction);
        self.expr.push_order(OrderBy { field, direction });
        Ok(self)
    }

    /// Renders the query with the [`ServiceNow`] dialect.
    ///
    /// Does not change the builder, so it can be called any number of times.
    pub fn build(&self) -> Result<String> {
        self.build_with(&ServiceNow)
    }

    pub fn build_with(&self, dialect: &dyn Dialect) -> Result<String> {
        self.validate()?;

        let mut renderer = Renderer::new(dialect);
        self.expr.render(&mut renderer);
        Ok(renderer.finish())
    }

    /// Checks that the chain is finished and renderable.
    pub fn validate(&self) -> Result<()> {
        if self.expr.is_empty() {
            return Err(QueryError::EmptyQuery);
        }

        match &self.cursor {
            Cursor::AwaitingField { join: Some(_) } => {
                Err(QueryError::FieldMissing(MissingField::DanglingJoin))
            }
            Cursor::AwaitingOperator { field, .. } => Err(QueryError::FieldMissing(
                MissingField::NoCondition(field.clone()),
            )),
            Cursor::AwaitingField { join: None } | Cursor::StatementComplete { .. } => Ok(()),
        }
    }

    pub fn expression(&self) -> &Expression {
        &self.expr
    }

    pub fn statements(&self) -> impl Iterator<Item = &Statement> {
        self.expr.statements()
    }

    pub fn statement_count(&self) -> usize {
        self.expr.len()
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    fn reject(&self, operator: Operator, err: QueryError) -> QueryError {
        debug!("Rejected '{}' while {}: {}", operator, self.cursor.name(), err);
        err
    }
}
