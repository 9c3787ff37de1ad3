use crate::{
    ast::{operand::Operand, operator::Operator},
    error::Result,
};

/// A single `field operator operand(s)` clause.
///
/// Statements are only created through [`Statement::new`], which runs the
/// operator table check, and cannot be changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    field: String,
    operator: Operator,
    operands: Vec<Operand>,
}

impl Statement {
    pub fn new(
        field: impl Into<String>,
        operator: Operator,
        operands: Vec<Operand>,
    ) -> Result<Self> {
        operator.check(&operands)?;
        Ok(Self {
            field: field.into(),
            operator,
            operands,
        })
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn operator(&self) -> Operator {
        self.operator
    }

    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }
}
