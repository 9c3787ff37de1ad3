//! Values a condition compares a field against.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operand {
    String(String),
    Int(i64),
    /// Wall-clock timestamp. It is rendered exactly as given, with no
    /// timezone conversion.
    Timestamp(NaiveDateTime),
}

/// The type of an [`Operand`], used by the operator table to accept or
/// reject operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperandKind {
    String,
    Int,
    Timestamp,
}

impl Operand {
    pub fn kind(&self) -> OperandKind {
        match self {
            Operand::String(_) => OperandKind::String,
            Operand::Int(_) => OperandKind::Int,
            Operand::Timestamp(_) => OperandKind::Timestamp,
        }
    }
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandKind::String => write!(f, "string"),
            OperandKind::Int => write!(f, "integer"),
            OperandKind::Timestamp => write!(f, "timestamp"),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::String(s) => write!(f, "{s}"),
            Operand::Int(i) => write!(f, "{i}"),
            Operand::Timestamp(ts) => write!(f, "{}", ts.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

impl From<&str> for Operand {
    fn from(value: &str) -> Self {
        Operand::String(value.to_string())
    }
}

impl From<String> for Operand {
    fn from(value: String) -> Self {
        Operand::String(value)
    }
}

impl From<&String> for Operand {
    fn from(value: &String) -> Self {
        Operand::String(value.clone())
    }
}

macro_rules! int_operand {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Operand {
                fn from(value: $ty) -> Self {
                    Operand::Int(i64::from(value))
                }
            }
        )*
    };
}

int_operand!(i8, i16, i32, i64, u8, u16, u32);

impl From<NaiveDateTime> for Operand {
    fn from(value: NaiveDateTime) -> Self {
        Operand::Timestamp(value)
    }
}

/// A bare date is taken as midnight of that day.
impl From<NaiveDate> for Operand {
    fn from(value: NaiveDate) -> Self {
        Operand::Timestamp(value.and_time(NaiveTime::MIN))
    }
}

/// Zoned timestamps keep their local wall-clock fields; the offset is dropped.
impl<Tz: TimeZone> From<DateTime<Tz>> for Operand {
    fn from(value: DateTime<Tz>) -> Self {
        Operand::Timestamp(value.naive_local())
    }
}
