//! Defines the ordered statement sequence an encoded query is rendered from.

use crate::ast::{
    common::{Join, OrderBy},
    statement::Statement,
};

/// A completed statement together with the join that precedes it.
///
/// Only the first link of an expression has no join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub join: Option<Join>,
    pub statement: Statement,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expression {
    links: Vec<Link>,
    order_by: Vec<OrderBy>,
}

impl Expression {
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn order_by(&self) -> &[OrderBy] {
        &self.order_by
    }

    pub fn statements(&self) -> impl Iterator<Item = &Statement> {
        self.links.iter().map(|link| &link.statement)
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// The builder's cursor guarantees `join` is `None` exactly when the
    /// expression is still empty.
    pub(crate) fn push(&mut self, join: Option<Join>, statement: Statement) {
        debug_assert_eq!(join.is_none(), self.links.is_empty());
        self.links.push(Link { join, statement });
    }

    pub(crate) fn push_order(&mut self, order: OrderBy) {
        self.order_by.push(order);
    }
}
