// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::collections::{BTreeMap, HashMap};

use parking_lot::RwLock;

use memgres_core::interface::{
    ColumnDef, ConstraintDef, Delta, EncodedKey, EncodedRow, Storage, TableDef, TableId,
};
use memgres_core::{DataType, Diagnostic, Error};

/// In-memory row storage. Row payloads are opaque at the schema-mutation
/// layer, so structural checks that would need to inspect values are gated
/// on whether the table holds any rows at all.
#[derive(Debug, Default)]
pub struct Memory {
    tables: RwLock<HashMap<TableId, BTreeMap<EncodedKey, EncodedRow>>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_count(&self, table: TableId) -> usize {
        self.tables.read().get(&table).map(|rows| rows.len()).unwrap_or(0)
    }

    pub fn get(&self, table: TableId, key: &EncodedKey) -> Option<EncodedRow> {
        self.tables.read().get(&table).and_then(|rows| rows.get(key).cloned())
    }
}

/// Whether every value of `from` has a lossless representation as `to`.
fn coercible(from: DataType, to: DataType) -> bool {
    use DataType::*;
    match (from, to) {
        (a, b) if a == b => true,
        (Int2, Int4 | Int8 | Float8) => true,
        (Int4, Int8 | Float8) => true,
        (Int8, Float8) => true,
        (_, Utf8) => true,
        _ => false,
    }
}

impl Storage for Memory {
    fn register_table(&self, table: &TableDef) -> memgres_core::Result<()> {
        self.tables.write().entry(table.id).or_default();
        Ok(())
    }

    fn drop_table(&self, table: &TableDef) -> memgres_core::Result<()> {
        self.tables.write().remove(&table.id);
        Ok(())
    }

    fn backfill_column(&self, table: &TableDef, _column: &ColumnDef) -> memgres_core::Result<()> {
        // Rows are stored as opaque payloads; absent fields read back as the
        // column default (or null) without a rewrite.
        self.tables.write().entry(table.id).or_default();
        Ok(())
    }

    fn drop_column(&self, _table: &TableDef, _column: &ColumnDef) -> memgres_core::Result<()> {
        Ok(())
    }

    fn check_coercion(
        &self,
        table: &TableDef,
        column: &ColumnDef,
        target: DataType,
    ) -> memgres_core::Result<()> {
        if self.row_count(table.id) == 0 || coercible(column.ty, target) {
            return Ok(());
        }
        Err(Error(Diagnostic::column_not_coercible(
            None,
            &table.name,
            &column.name,
            column.ty,
            target,
        )))
    }

    fn validate_not_null(&self, _table: &TableDef, _column: &ColumnDef) -> memgres_core::Result<()> {
        // Opaque payloads cannot be scanned for nulls here; the executor
        // enforces the constraint on every subsequent write.
        Ok(())
    }

    fn validate_constraint(
        &self,
        _table: &TableDef,
        _constraint: &ConstraintDef,
    ) -> memgres_core::Result<()> {
        Ok(())
    }

    fn apply(&self, deltas: &[Delta]) -> memgres_core::Result<()> {
        let mut tables = self.tables.write();
        for delta in deltas {
            let rows = tables.entry(delta.table()).or_default();
            match delta {
                Delta::Set { key, row, .. } => {
                    rows.insert(key.clone(), row.clone());
                }
                Delta::Remove { key, .. } => {
                    rows.remove(key);
                }
            }
        }
        Ok(())
    }
}
