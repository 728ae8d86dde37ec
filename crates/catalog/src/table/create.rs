// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use memgres_core::interface::{ColumnDef, ColumnIndex, CommandTransaction, TableDef};
use memgres_core::{Diagnostic, Error, Span};

use crate::column::ColumnToCreate;
use crate::Catalog;

#[derive(Debug, Clone)]
pub struct TableToCreate {
    pub span: Option<Span>,
    pub schema: String,
    pub table: String,
    pub columns: Vec<ColumnToCreate>,
}

impl Catalog {
    pub fn create_table(
        txn: &mut impl CommandTransaction,
        to_create: TableToCreate,
    ) -> crate::Result<TableDef> {
        let Some(schema) = txn.find_schema_by_name(&to_create.schema) else {
            return Err(Error(Diagnostic::schema_not_found(to_create.span, &to_create.schema)));
        };

        if let Some(table) = txn.find_table_by_name(schema.id, &to_create.table) {
            return Err(Error(Diagnostic::table_already_exists(
                to_create.span,
                &schema.name,
                &table.name,
            )));
        }

        let id = txn.next_table_id()?;
        let mut table = TableDef {
            id,
            schema: schema.id,
            name: to_create.table,
            columns: Vec::with_capacity(to_create.columns.len()),
            constraints: vec![],
        };

        for (index, column) in to_create.columns.into_iter().enumerate() {
            if table.column_by_name(&column.name).is_some() {
                return Err(Error(Diagnostic::column_already_exists(
                    column.span,
                    &table.name,
                    &column.name,
                )));
            }
            table.columns.push(ColumnDef {
                id: txn.next_column_id()?,
                name: column.name,
                ty: column.ty,
                nullable: column.nullable,
                default: column.default,
                index: ColumnIndex(index as u16),
            });
        }

        txn.storage().register_table(&table)?;
        txn.track_table_created(table.clone())?;

        Ok(table)
    }
}
