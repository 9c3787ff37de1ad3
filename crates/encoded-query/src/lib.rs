//! Fluent builder for record-store encoded queries.
//!
//! ```
//! use encoded_query::Query;
//!
//! let mut query = Query::new();
//! query
//!     .field("active")?.equals("true")?
//!     .or()?
//!     .field("priority")?.less_than(3)?;
//!
//! assert_eq!(query.build()?, "active=true^ORpriority<3");
//! # Ok::<(), encoded_query::QueryError>(())
//! ```

pub mod ast;
pub mod build;
pub mod definition;
pub mod dialect;
pub mod error;
pub mod render;

pub use ast::{
    common::{Join, OrderBy, OrderDir},
    expr::Expression,
    operand::{Operand, OperandKind},
    operator::Operator,
    statement::Statement,
};
pub use build::query::Query;
pub use definition::QueryDefinition;
pub use dialect::{Dialect, ServiceNow};
pub use error::{DefinitionError, MissingField, QueryError, Result};
