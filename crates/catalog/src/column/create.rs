// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use memgres_core::interface::{ColumnDef, ColumnIndex, CommandTransaction, TableId};
use memgres_core::{Diagnostic, Error};

use crate::column::ColumnToCreate;
use crate::Catalog;

impl Catalog {
    /// Appends a column to the table. Existing rows are back-filled with the
    /// column default (or null) by the storage layer.
    pub fn create_column(
        txn: &mut impl CommandTransaction,
        table: TableId,
        to_create: ColumnToCreate,
    ) -> crate::Result<ColumnDef> {
        let pre = Self::table_by_id(txn, table)?;

        if let Some(column) = pre.column_by_name(&to_create.name) {
            return Err(Error(Diagnostic::column_already_exists(
                to_create.span,
                &pre.name,
                &column.name,
            )));
        }

        // ordinals of surviving columns stay stable across drops
        let index = pre.columns.iter().map(|c| c.index.0 + 1).max().unwrap_or(0);

        let column = ColumnDef {
            id: txn.next_column_id()?,
            name: to_create.name,
            ty: to_create.ty,
            nullable: to_create.nullable,
            default: to_create.default,
            index: ColumnIndex(index),
        };

        let mut post = pre.clone();
        post.columns.push(column.clone());

        txn.storage().backfill_column(&post, &column)?;
        txn.track_table_updated(pre, post)?;

        Ok(column)
    }
}
