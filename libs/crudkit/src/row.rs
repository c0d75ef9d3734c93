//! Relational rows
//!
//! A [`Row`] is an ordered list of named raw values, the neutral shape that
//! record mappers read from and that bind parameters are checked against.

use crate::schema::{ColumnKind, TableSchema};
use chrono::NaiveDate;
use sea_orm::sea_query::ValueType;
use sea_orm::{DbErr, QueryResult, Value};
use thiserror::Error;

/// Failure to convert between a row and a domain record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("column '{column}' is missing from a '{table}' row")]
    MissingColumn { table: &'static str, column: String },

    #[error("column '{column}' is not declared for table '{table}'")]
    UnknownColumn { table: &'static str, column: String },

    #[error("column '{column}' of table '{table}' holds a value of the wrong type")]
    TypeMismatch { table: &'static str, column: String },

    #[error("table '{table}' takes {expected} bind parameters, got {actual}")]
    ParameterCount {
        table: &'static str,
        expected: usize,
        actual: usize,
    },
}

/// One relational row: column name to raw value, in column order
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    table: &'static str,
    columns: Vec<(String, Value)>,
}

impl Row {
    /// Empty row belonging to `table`
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            columns: Vec::new(),
        }
    }

    /// Builder-style [`Row::push`]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(column, value);
        self
    }

    /// Append a column
    pub fn push(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.columns.push((column.into(), value.into()));
    }

    /// Pair bind parameters with the schema's column order
    pub fn from_params(schema: &TableSchema, params: Vec<Value>) -> Result<Self, MappingError> {
        if params.len() != schema.columns.len() {
            return Err(MappingError::ParameterCount {
                table: schema.table,
                expected: schema.columns.len(),
                actual: params.len(),
            });
        }

        Ok(Self {
            table: schema.table,
            columns: schema
                .column_names()
                .map(str::to_owned)
                .zip(params)
                .collect(),
        })
    }

    /// Read every declared column of `schema` out of a driver result
    pub fn from_query_result(schema: &TableSchema, result: &QueryResult) -> Result<Self, DbErr> {
        let mut row = Self::new(schema.table);
        for column in schema.columns {
            let value: Value = match column.kind {
                ColumnKind::BigInt => result.try_get::<Option<i64>>("", column.name)?.into(),
                ColumnKind::Text => result.try_get::<Option<String>>("", column.name)?.into(),
                ColumnKind::Date => result.try_get::<Option<NaiveDate>>("", column.name)?.into(),
            };
            row.push(column.name, value);
        }
        Ok(row)
    }

    pub fn table(&self) -> &'static str {
        self.table
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Column names in row order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Raw value of a column
    pub fn value(&self, column: &str) -> Option<&Value> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Typed value of a column.
    ///
    /// Use `Option<T>` for nullable columns; a NULL read as plain `T` is a
    /// [`MappingError::TypeMismatch`].
    pub fn get<T: ValueType>(&self, column: &str) -> Result<T, MappingError> {
        let value = self
            .value(column)
            .ok_or_else(|| MappingError::MissingColumn {
                table: self.table,
                column: column.to_owned(),
            })?;

        <T as ValueType>::try_from(value.clone()).map_err(|_| MappingError::TypeMismatch {
            table: self.table,
            column: column.to_owned(),
        })
    }

    /// Check that the row holds exactly the columns declared by `schema`
    pub fn ensure_shape(&self, schema: &TableSchema) -> Result<(), MappingError> {
        if let Some(unknown) = self.columns().find(|name| schema.column(name).is_none()) {
            return Err(MappingError::UnknownColumn {
                table: schema.table,
                column: unknown.to_owned(),
            });
        }

        if let Some(missing) = schema.column_names().find(|name| self.value(name).is_none()) {
            return Err(MappingError::MissingColumn {
                table: schema.table,
                column: missing.to_owned(),
            });
        }

        Ok(())
    }

    /// Columns with their values, in row order
    pub fn into_columns(self) -> Vec<(String, Value)> {
        self.columns
    }

    /// Values only, in row order
    pub fn into_values(self) -> Vec<Value> {
        self.columns.into_iter().map(|(_, value)| value).collect()
    }
}
