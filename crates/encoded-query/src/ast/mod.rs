pub mod common;
pub mod expr;
pub mod operand;
pub mod operator;
pub mod statement;
