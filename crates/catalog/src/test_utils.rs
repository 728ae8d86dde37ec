// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Helpers shared by catalog and engine tests.

use memgres_core::interface::{CommandTransaction, SchemaDef, TableDef};
use memgres_core::DataType;

use crate::column::ColumnToCreate;
use crate::schema::SchemaToCreate;
use crate::table::TableToCreate;
use crate::Catalog;

pub fn ensure_test_schema(txn: &mut impl CommandTransaction) -> SchemaDef {
    if let Some(schema) = Catalog::find_schema_by_name(txn, "test_schema") {
        return schema;
    }

    Catalog::create_schema(txn, SchemaToCreate { span: None, name: "test_schema".to_string() })
        .unwrap()
}

/// A table `test_schema.test_table` with a single nullable `col_1 INT2`.
pub fn ensure_test_table(txn: &mut impl CommandTransaction) -> TableDef {
    let schema = ensure_test_schema(txn);
    if let Some(table) = txn.find_table_by_name(schema.id, "test_table") {
        return table;
    }

    Catalog::create_table(
        txn,
        TableToCreate {
            span: None,
            schema: schema.name,
            table: "test_table".to_string(),
            columns: vec![ColumnToCreate {
                span: None,
                name: "col_1".to_string(),
                ty: DataType::Int2,
                nullable: true,
                default: None,
            }],
        },
    )
    .unwrap()
}
