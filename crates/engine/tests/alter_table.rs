// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use memgres_catalog::test_utils::{ensure_test_schema, ensure_test_table};
use memgres_core::interface::{ColumnAlteration, ConstraintKind, QueryTransaction};
use memgres_core::{DataType, Span};
use memgres_engine::execute_alter_table;
use memgres_rql::plan::{AlterTableChange, AlterTablePlan, ColumnToAdd, ConstraintToAdd};
use memgres_storage::Memory;
use memgres_transaction::test_utils::create_test_transaction_engine;
use memgres_transaction::{StandardCommandTransaction, TransactionEngine};

fn plan(changes: Vec<AlterTableChange>) -> AlterTablePlan {
    AlterTablePlan {
        schema: Some(Span::testing("test_schema")),
        table: Span::testing("test_table"),
        if_exists: false,
        only: false,
        changes,
    }
}

fn add_column(name: &str, if_not_exists: bool) -> AlterTableChange {
    AlterTableChange::AddColumn {
        column: ColumnToAdd {
            name: Span::testing(name),
            ty: DataType::Int4,
            nullable: true,
            default: None,
        },
        if_not_exists,
    }
}

fn setup() -> (TransactionEngine<Memory>, StandardCommandTransaction<Memory>) {
    let engine = create_test_transaction_engine();
    let mut txn = engine.begin_command();
    ensure_test_schema(&mut txn);
    ensure_test_table(&mut txn);
    (engine, txn)
}

#[test]
fn test_rename_and_add_column() {
    let (engine, mut txn) = setup();
    let schema = ensure_test_schema(&mut txn);

    let result = execute_alter_table(
        &mut txn,
        plan(vec![
            AlterTableChange::Rename { to: Span::testing("renamed_table") },
            add_column("col_2", false),
        ]),
    )
    .unwrap();

    assert_eq!(result.tag, "ALTER");
    assert_eq!(result.ignored, 0);
    assert_eq!(result.changes, 2);
    assert!(!result.no_op());

    let table = result.table.unwrap();
    assert_eq!(table.name, "renamed_table");
    let added = table.column_by_name("col_2").unwrap();
    assert_eq!(added.ty, DataType::Int4);
    assert!(added.nullable);
    assert_eq!(added.default, None);

    // the caller continues inside a fresh implicit scope
    assert_eq!(txn.depth(), 1);

    // both changes are already durable for other sessions
    let query = engine.begin_query();
    assert!(query.find_table_by_name(schema.id, "test_table").is_none());
    let durable = query.find_table_by_name(schema.id, "renamed_table").unwrap();
    assert!(durable.column_by_name("col_2").is_some());
}

#[test]
fn test_add_column_if_not_exists_twice_in_one_statement() {
    let (_, mut txn) = setup();

    let result = execute_alter_table(
        &mut txn,
        plan(vec![add_column("col_2", true), add_column("col_2", true)]),
    )
    .unwrap();

    assert_eq!(result.ignored, 1);
    assert!(!result.no_op());

    let table = result.table.unwrap();
    assert_eq!(table.columns.iter().filter(|c| c.name == "col_2").count(), 1);
}

#[test]
fn test_add_existing_column_without_guard_fails() {
    let (_, mut txn) = setup();

    let err =
        execute_alter_table(&mut txn, plan(vec![add_column("col_1", false)])).unwrap_err();

    assert_eq!(err.code(), "CAT_005");
}

#[test]
fn test_drop_missing_column_with_if_exists_is_ignored() {
    let (engine, mut txn) = setup();
    let schema = ensure_test_schema(&mut txn);

    let result = execute_alter_table(
        &mut txn,
        plan(vec![AlterTableChange::DropColumn {
            column: Span::testing("ghost"),
            if_exists: true,
        }]),
    )
    .unwrap();

    assert_eq!(result.ignored, 1);
    assert_eq!(result.changes, 1);
    assert!(result.no_op());

    // table untouched
    let table = engine.begin_query().find_table_by_name(schema.id, "test_table").unwrap();
    assert_eq!(table.columns.len(), 1);
}

#[test]
fn test_drop_missing_column_without_if_exists_fails() {
    let (engine, mut txn) = setup();
    let schema = ensure_test_schema(&mut txn);

    let err = execute_alter_table(
        &mut txn,
        plan(vec![AlterTableChange::DropColumn {
            column: Span::testing("ghost"),
            if_exists: false,
        }]),
    )
    .unwrap_err();

    assert_eq!(err.code(), "CAT_006");

    let table = engine.begin_query().find_table_by_name(schema.id, "test_table").unwrap();
    assert_eq!(table.columns.len(), 1);
}

#[test]
fn test_drop_missing_constraint_names_table_and_constraint() {
    let (_, mut txn) = setup();

    let err = execute_alter_table(
        &mut txn,
        plan(vec![AlterTableChange::DropConstraint {
            constraint: Span::testing("ghost"),
            if_exists: false,
        }]),
    )
    .unwrap_err();

    assert_eq!(err.code(), "CAT_008");
    let message = err.diagnostic().message;
    assert!(message.contains("ghost"));
    assert!(message.contains("test_table"));
}

#[test]
fn test_drop_missing_constraint_with_if_exists_is_ignored() {
    let (_, mut txn) = setup();

    let result = execute_alter_table(
        &mut txn,
        plan(vec![AlterTableChange::DropConstraint {
            constraint: Span::testing("ghost"),
            if_exists: true,
        }]),
    )
    .unwrap();

    assert!(result.no_op());
}

#[test]
fn test_rename_constraint_is_always_unsupported() {
    let (_, mut txn) = setup();

    let err = execute_alter_table(
        &mut txn,
        plan(vec![AlterTableChange::RenameConstraint {
            constraint: Span::testing("anything"),
            to: Span::testing("other"),
        }]),
    )
    .unwrap_err();

    assert_eq!(err.code(), "ENG_001");
}

#[test]
fn test_owner_change_is_ignored() {
    let (_, mut txn) = setup();

    let result = execute_alter_table(
        &mut txn,
        plan(vec![AlterTableChange::OwnerTo { owner: Span::testing("somebody") }]),
    )
    .unwrap();

    assert_eq!(result.ignored, 1);
    assert!(result.no_op());
}

#[test]
fn test_failure_mid_statement_keeps_earlier_changes_durable() {
    let (engine, mut txn) = setup();
    let schema = ensure_test_schema(&mut txn);

    let err = execute_alter_table(
        &mut txn,
        plan(vec![
            add_column("col_2", false),
            AlterTableChange::DropConstraint {
                constraint: Span::testing("ghost"),
                if_exists: false,
            },
            add_column("col_3", false),
        ]),
    )
    .unwrap_err();

    assert_eq!(err.code(), "CAT_008");

    // the first change survived the failure of the second, the third never
    // ran
    let table = engine.begin_query().find_table_by_name(schema.id, "test_table").unwrap();
    assert!(table.column_by_name("col_2").is_some());
    assert!(table.column_by_name("col_3").is_none());
}

#[test]
fn test_forced_commit_makes_pending_edits_durable() {
    let (engine, mut txn) = setup();

    // a revocable data edit from the implicit statement scope
    let table = ensure_test_table(&mut txn);
    txn.fork();
    txn.set(table.id, b"k1".as_slice().into(), b"r1".as_slice().into()).unwrap();

    execute_alter_table(&mut txn, plan(vec![add_column("col_2", false)])).unwrap();

    // the structural statement force-committed the pending row
    assert_eq!(engine.storage().row_count(table.id), 1);
}

#[test]
fn test_missing_table_with_statement_level_if_exists() {
    let engine = create_test_transaction_engine();
    let mut txn = engine.begin_command();
    ensure_test_schema(&mut txn);

    let version = engine.store().version();
    let result = execute_alter_table(
        &mut txn,
        AlterTablePlan {
            schema: Some(Span::testing("test_schema")),
            table: Span::testing("ghost"),
            if_exists: true,
            only: false,
            changes: vec![add_column("col_2", false)],
        },
    )
    .unwrap();

    assert!(result.no_op());
    assert_eq!(result.ignored, 1);
    assert!(result.table.is_none());
    // the statement had no effect, so no forced commit ran either
    assert_eq!(engine.store().version(), version);
}

#[test]
fn test_missing_table_without_if_exists_fails() {
    let engine = create_test_transaction_engine();
    let mut txn = engine.begin_command();
    ensure_test_schema(&mut txn);

    let err = execute_alter_table(
        &mut txn,
        AlterTablePlan {
            schema: Some(Span::testing("test_schema")),
            table: Span::testing("ghost"),
            if_exists: false,
            only: false,
            changes: vec![],
        },
    )
    .unwrap_err();
    assert_eq!(err.code(), "CAT_002");

    let err = execute_alter_table(
        &mut txn,
        AlterTablePlan {
            schema: Some(Span::testing("missing_schema")),
            table: Span::testing("ghost"),
            if_exists: false,
            only: false,
            changes: vec![],
        },
    )
    .unwrap_err();
    assert_eq!(err.code(), "CAT_001");
}

#[test]
fn test_rename_then_alter_column_in_one_statement() {
    let (_, mut txn) = setup();

    let result = execute_alter_table(
        &mut txn,
        plan(vec![
            AlterTableChange::RenameColumn {
                column: Span::testing("col_1"),
                to: Span::testing("col_a"),
            },
            AlterTableChange::AlterColumn {
                column: Span::testing("col_a"),
                alteration: ColumnAlteration::SetType { ty: DataType::Int8 },
            },
        ]),
    )
    .unwrap();

    let table = result.table.unwrap();
    assert!(table.column_by_name("col_1").is_none());
    assert_eq!(table.column_by_name("col_a").unwrap().ty, DataType::Int8);
}

#[test]
fn test_add_then_drop_constraint() {
    let (_, mut txn) = setup();

    let result = execute_alter_table(
        &mut txn,
        plan(vec![AlterTableChange::AddConstraint {
            constraint: ConstraintToAdd {
                name: None,
                kind: ConstraintKind::Unique,
                columns: vec![Span::testing("col_1")],
            },
        }]),
    )
    .unwrap();

    let table = result.table.unwrap();
    assert!(table.constraint_by_name("test_table_col_1_key").is_some());

    // a dependent constraint blocks the column drop
    let err = execute_alter_table(
        &mut txn,
        plan(vec![AlterTableChange::DropColumn {
            column: Span::testing("col_1"),
            if_exists: false,
        }]),
    )
    .unwrap_err();
    assert_eq!(err.code(), "CAT_011");

    let result = execute_alter_table(
        &mut txn,
        plan(vec![
            AlterTableChange::DropConstraint {
                constraint: Span::testing("test_table_col_1_key"),
                if_exists: false,
            },
            AlterTableChange::DropColumn { column: Span::testing("col_1"), if_exists: false },
        ]),
    )
    .unwrap();

    let table = result.table.unwrap();
    assert!(table.constraints.is_empty());
    assert!(table.columns.is_empty());
}
