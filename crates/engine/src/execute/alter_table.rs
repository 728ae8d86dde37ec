// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use tracing::{debug, trace};

use memgres_catalog::column::ColumnToCreate;
use memgres_catalog::constraint::ConstraintToCreate;
use memgres_catalog::{Catalog, DEFAULT_SCHEMA};
use memgres_core::interface::{QueryTransaction, Storage, TableId};
use memgres_core::{Diagnostic, Error};
use memgres_rql::plan::{AlterTableChange, AlterTablePlan};
use memgres_transaction::StandardCommandTransaction;

use crate::execute::{AlterTableResult, Executor};

impl Executor {
    /// Applies an `ALTER TABLE` statement: resolve the target, force-commit
    /// the transaction, replay the changes in order, fork a fresh implicit
    /// scope. A failure at change `i` aborts the rest of the list while
    /// changes `0..i` stay durable; that partial application is the
    /// documented contract, not all-or-nothing.
    pub(crate) fn alter_table<S: Storage>(
        &self,
        txn: &mut StandardCommandTransaction<S>,
        plan: AlterTablePlan,
    ) -> crate::Result<AlterTableResult> {
        let schema_name =
            plan.schema.as_ref().map(|s| s.fragment.as_str()).unwrap_or(DEFAULT_SCHEMA);
        // `ONLY` has no effect: inheritance is not modeled

        let table = if plan.if_exists {
            let found = Catalog::find_schema_by_name(txn, schema_name)
                .and_then(|schema| Catalog::find_table_by_name(txn, &schema, &plan.table.fragment));
            match found {
                Some(table) => table,
                None => {
                    // the statement must have no effect at all, so the
                    // forced commit below must not run either
                    trace!(table = %plan.table, "target missing, skipping statement");
                    let changes = plan.changes.len();
                    return Ok(AlterTableResult {
                        tag: "ALTER",
                        plan,
                        table: None,
                        ignored: changes,
                        changes,
                    });
                }
            }
        } else {
            let schema = Catalog::get_schema_by_name(txn, plan.schema.clone(), schema_name)?;
            Catalog::get_table_by_name(txn, Some(plan.table.clone()), &schema, &plan.table.fragment)?
        };

        debug!(schema = schema_name, table = %table.name, changes = plan.changes.len(), "alter table");

        // commit pending edits before making changes, because the changes
        // below have no rollback representation
        txn.full_commit()?;

        let table_id = table.id;
        let total = plan.changes.len();
        let mut ignored = 0usize;

        for change in &plan.changes {
            match change {
                AlterTableChange::Rename { to } => {
                    Catalog::rename_table(txn, table_id, to.clone())?;
                }
                AlterTableChange::AddColumn { column, if_not_exists } => {
                    let present =
                        Catalog::find_column_by_name(txn, table_id, &column.name.fragment)?;
                    if present.is_some() && *if_not_exists {
                        ignored += 1;
                        continue;
                    }
                    // a present column without the guard fails in here
                    Catalog::create_column(
                        txn,
                        table_id,
                        ColumnToCreate {
                            span: Some(column.name.clone()),
                            name: column.name.fragment.clone(),
                            ty: column.ty,
                            nullable: column.nullable,
                            default: column.default.clone(),
                        },
                    )?;
                }
                AlterTableChange::DropColumn { column, if_exists } => {
                    let found = if *if_exists {
                        Catalog::find_column_by_name(txn, table_id, &column.fragment)?
                    } else {
                        Some(Catalog::get_column_by_name(
                            txn,
                            Some(column.clone()),
                            table_id,
                            &column.fragment,
                        )?)
                    };
                    match found {
                        Some(found) => {
                            Catalog::drop_column(txn, table_id, found.id, Some(column.clone()))?
                        }
                        // absent is only reachable with the guard
                        None => ignored += 1,
                    }
                }
                AlterTableChange::RenameColumn { column, to } => {
                    let found = Catalog::get_column_by_name(
                        txn,
                        Some(column.clone()),
                        table_id,
                        &column.fragment,
                    )?;
                    Catalog::rename_column(txn, table_id, found.id, to.clone())?;
                }
                AlterTableChange::AlterColumn { column, alteration } => {
                    let found = Catalog::get_column_by_name(
                        txn,
                        Some(column.clone()),
                        table_id,
                        &column.fragment,
                    )?;
                    Catalog::alter_column(txn, table_id, found.id, alteration.clone())?;
                }
                AlterTableChange::AddConstraint { constraint } => {
                    Catalog::create_constraint(
                        txn,
                        table_id,
                        ConstraintToCreate {
                            span: constraint.name.clone(),
                            name: constraint.name.clone(),
                            kind: constraint.kind,
                            columns: constraint.columns.clone(),
                        },
                    )?;
                }
                AlterTableChange::DropConstraint { constraint, if_exists } => {
                    match Catalog::find_constraint_by_name(txn, table_id, &constraint.fragment)? {
                        Some(found) => Catalog::drop_constraint(txn, table_id, found.id)?,
                        None if *if_exists => ignored += 1,
                        None => {
                            return Err(Error(Diagnostic::constraint_not_found(
                                Some(constraint.clone()),
                                &table_name(txn, table_id)?,
                                &constraint.fragment,
                            )));
                        }
                    }
                }
                AlterTableChange::RenameConstraint { constraint, .. } => {
                    return Err(Error(Diagnostic::unsupported_alter(
                        Some(constraint.clone()),
                        "RENAME CONSTRAINT",
                    )));
                }
                AlterTableChange::OwnerTo { owner } => {
                    // accepted so that pg_dump output replays; owner metadata
                    // is not modeled
                    trace!(owner = %owner, "ignoring owner change");
                    ignored += 1;
                }
            }
        }

        // new implicit scope for the caller to continue in
        txn.fork();

        let table = txn.find_table(table_id);
        Ok(AlterTableResult { tag: "ALTER", plan, table, ignored, changes: total })
    }
}

fn table_name<S: Storage>(
    txn: &StandardCommandTransaction<S>,
    table: TableId,
) -> crate::Result<String> {
    txn.find_table(table)
        .map(|t| t.name)
        .ok_or_else(|| Error(Diagnostic::internal(format!("unknown table id {}", table))))
}
