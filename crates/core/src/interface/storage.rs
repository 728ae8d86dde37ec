// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::interface::{ColumnDef, ConstraintDef, Delta, TableDef};
use crate::DataType;

/// The row-storage collaborator. The schema-mutation core only ever asks it
/// to succeed or fail; what the data looks like is entirely its business.
pub trait Storage: Send + Sync + 'static {
    fn register_table(&self, table: &TableDef) -> crate::Result<()>;

    fn drop_table(&self, table: &TableDef) -> crate::Result<()>;

    /// Fill the new column in all existing rows with its default (or null).
    fn backfill_column(&self, table: &TableDef, column: &ColumnDef) -> crate::Result<()>;

    fn drop_column(&self, table: &TableDef, column: &ColumnDef) -> crate::Result<()>;

    /// Verify that every existing row of `column` can be coerced to `target`.
    fn check_coercion(
        &self,
        table: &TableDef,
        column: &ColumnDef,
        target: DataType,
    ) -> crate::Result<()>;

    /// Verify that no existing row holds a null in `column`.
    fn validate_not_null(&self, table: &TableDef, column: &ColumnDef) -> crate::Result<()>;

    /// Verify that every existing row satisfies the constraint about to be
    /// installed.
    fn validate_constraint(&self, table: &TableDef, constraint: &ConstraintDef)
    -> crate::Result<()>;

    /// Apply a batch of row edits that reached durable state.
    fn apply(&self, deltas: &[Delta]) -> crate::Result<()>;
}
