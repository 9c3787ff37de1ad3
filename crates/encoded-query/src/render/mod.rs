//! Turns a validated [`Expression`](crate::ast::expr::Expression) into an
//! encoded query string.

use crate::dialect::Dialect;

pub mod expr;
pub mod statement;

pub trait Render {
    fn render(&self, r: &mut Renderer);
}

pub struct Renderer<'a> {
    pub dialect: &'a dyn Dialect,
    pub out: String,
}

impl<'a> Renderer<'a> {
    pub fn new(dialect: &'a dyn Dialect) -> Self {
        Self {
            dialect,
            out: String::new(),
        }
    }

    pub fn finish(self) -> String {
        self.out
    }
}
