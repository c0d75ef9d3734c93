//! Explicit table schema definitions
//!
//! A [`TableSchema`] is the single description of how an entity is laid out in
//! the relational store. Repositories build their statements from it, rows are
//! read according to its column kinds and migrations create tables from it.

use sea_orm::sea_query::{Alias, ColumnDef, ForeignKey, ForeignKeyAction, Table, TableCreateStatement};

/// Storage type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// 64-bit signed integer
    BigInt,
    /// Variable length text
    Text,
    /// Calendar date without time of day
    Date,
}

/// How the primary key of a table gets its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdStrategy {
    /// The store assigns the id on insert
    Generated,
    /// The caller supplies the id
    Assigned,
}

/// Referential action applied to child rows when the parent row is deleted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnDelete {
    Restrict,
    Cascade,
    SetNull,
}

impl From<OnDelete> for ForeignKeyAction {
    fn from(action: OnDelete) -> Self {
        match action {
            OnDelete::Restrict => ForeignKeyAction::Restrict,
            OnDelete::Cascade => ForeignKeyAction::Cascade,
            OnDelete::SetNull => ForeignKeyAction::SetNull,
        }
    }
}

/// A single declared column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: &'static str,
    pub kind: ColumnKind,
    pub nullable: bool,
}

impl ColumnSpec {
    /// Column that never holds NULL
    pub const fn required(name: &'static str, kind: ColumnKind) -> Self {
        Self {
            name,
            kind,
            nullable: false,
        }
    }

    /// Column that may hold NULL
    pub const fn nullable(name: &'static str, kind: ColumnKind) -> Self {
        Self {
            name,
            kind,
            nullable: true,
        }
    }
}

/// Foreign key from a column of this table to a column of another table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKeySpec {
    pub column: &'static str,
    pub references_table: &'static str,
    pub references_column: &'static str,
    pub on_delete: OnDelete,
}

/// Layout of one entity table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    /// Table name
    pub table: &'static str,
    /// Primary key column, must be one of `columns`
    pub primary_key: &'static str,
    /// Whether the store or the caller provides ids
    pub id_strategy: IdStrategy,
    /// Columns in bind-parameter order
    pub columns: &'static [ColumnSpec],
    /// Outgoing foreign keys
    pub foreign_keys: &'static [ForeignKeySpec],
}

impl TableSchema {
    /// Look up a declared column by name
    pub fn column(&self, name: &str) -> Option<&'static ColumnSpec> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Position of a column in the bind-parameter order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Declared column names in order
    pub fn column_names(&self) -> impl Iterator<Item = &'static str> {
        self.columns.iter().map(|c| c.name)
    }

    /// Whether `column` is written by an INSERT statement
    pub fn is_insertable(&self, column: &str) -> bool {
        column != self.primary_key || self.id_strategy == IdStrategy::Assigned
    }

    /// Foreign key of this table that references `parent`'s primary key
    pub fn foreign_key_to(&self, parent: &TableSchema) -> Option<&'static ForeignKeySpec> {
        self.foreign_keys
            .iter()
            .find(|fk| fk.references_table == parent.table && fk.references_column == parent.primary_key)
    }

    /// Build the `CREATE TABLE IF NOT EXISTS` statement for this schema
    pub fn create_table_statement(&self) -> TableCreateStatement {
        let mut table = Table::create();
        table.table(Alias::new(self.table)).if_not_exists();

        for column in self.columns {
            let mut def = ColumnDef::new(Alias::new(column.name));
            match column.kind {
                ColumnKind::BigInt => def.big_integer(),
                ColumnKind::Text => def.text(),
                ColumnKind::Date => def.date(),
            };

            if column.name == self.primary_key {
                def.not_null().primary_key();
                if self.id_strategy == IdStrategy::Generated {
                    def.auto_increment();
                }
            } else if column.nullable {
                def.null();
            } else {
                def.not_null();
            }

            table.col(&mut def);
        }

        for fk in self.foreign_keys {
            table.foreign_key(
                ForeignKey::create()
                    .name(format!("fk_{}_{}", self.table, fk.column))
                    .from(Alias::new(self.table), Alias::new(fk.column))
                    .to(Alias::new(fk.references_table), Alias::new(fk.references_column))
                    .on_delete(fk.on_delete.into()),
            );
        }

        table
    }
}
