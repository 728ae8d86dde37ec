// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use memgres_core::interface::{ColumnId, CommandTransaction, TableId};
use memgres_core::{Diagnostic, Error, Span};

use crate::Catalog;

impl Catalog {
    /// Removes the column. Rejected while any live constraint still covers
    /// it; dropping the constraint first is an explicit, separate change.
    pub fn drop_column(
        txn: &mut impl CommandTransaction,
        table: TableId,
        column: ColumnId,
        span: Option<Span>,
    ) -> crate::Result<()> {
        let pre = Self::table_by_id(txn, table)?;
        let Some(dropped) = pre.column(column) else {
            return Err(Error(Diagnostic::internal(format!("unknown column id {}", column))));
        };
        let dropped = dropped.clone();

        if let Some(constraint) = pre.constraints_on(column).next() {
            return Err(Error(Diagnostic::column_has_dependents(
                span,
                &pre.name,
                &dropped.name,
                &constraint.name,
            )));
        }

        txn.storage().drop_column(&pre, &dropped)?;

        let mut post = pre.clone();
        post.columns.retain(|c| c.id != column);
        txn.track_table_updated(pre, post)?;

        Ok(())
    }
}
