// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use memgres_core::interface::{Storage, TableDef};
use memgres_rql::plan::AlterTablePlan;
use memgres_transaction::StandardCommandTransaction;

mod alter_table;

/// What a structural statement came to: its command tag, the statement it
/// ran for, the table as it looks afterwards, and how many of the requested
/// changes were existence-guard no-ops.
#[derive(Debug)]
pub struct AlterTableResult {
    pub tag: &'static str,
    pub plan: AlterTablePlan,
    /// Absent when a statement-level `IF EXISTS` skipped the whole
    /// statement.
    pub table: Option<TableDef>,
    pub ignored: usize,
    pub changes: usize,
}

impl AlterTableResult {
    /// Every requested change was a no-op. Callers use this for response
    /// metadata, e.g. row-count-equivalent signaling.
    pub fn no_op(&self) -> bool {
        self.ignored == self.changes
    }
}

pub(crate) struct Executor {}

pub fn execute_alter_table<S: Storage>(
    txn: &mut StandardCommandTransaction<S>,
    plan: AlterTablePlan,
) -> crate::Result<AlterTableResult> {
    Executor {}.alter_table(txn, plan)
}
