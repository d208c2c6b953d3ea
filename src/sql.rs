//! Database driver adapters: SQL `NULL` maps to `Absent` in both directions,
//! and any non-null column value is converted through the payload type's own
//! [`FromSql`]/[`ToSql`] implementation.

// used for binding and scanning driver values
use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, Value, ValueRef};

use crate::error::{MaybeError, Result};
use crate::maybe::Maybe;

impl<T: ToSql> ToSql for Maybe<T> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            Maybe::Present(value) => value.to_sql(),
            Maybe::Absent => Ok(ToSqlOutput::Owned(Value::Null)),
        }
    }
}

impl<T: FromSql> FromSql for Maybe<T> {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Null => Ok(Maybe::Absent),
            other => T::column_result(other).map(Maybe::Present),
        }
    }
}

impl<T: FromSql> Maybe<T> {
    /// Reads a raw driver value. `NULL` yields `Absent` with no error;
    /// anything else is converted into `T`, surfacing conversion failures
    /// as [`MaybeError::Conversion`].
    pub fn from_driver(value: ValueRef<'_>) -> Result<Self> {
        Ok(Self::column_result(value)?)
    }
}

impl<T: ToSql> Maybe<T> {
    /// Produces the driver value for parameter binding: `NULL` when absent,
    /// otherwise the payload's own conversion.
    pub fn to_driver(&self) -> Result<ToSqlOutput<'_>> {
        self.to_sql().map_err(MaybeError::from)
    }
}
