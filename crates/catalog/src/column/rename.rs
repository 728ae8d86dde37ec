// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use memgres_core::interface::{ColumnDef, ColumnId, CommandTransaction, TableId};
use memgres_core::{Diagnostic, Error, Span};

use crate::Catalog;

impl Catalog {
    pub fn rename_column(
        txn: &mut impl CommandTransaction,
        table: TableId,
        column: ColumnId,
        to: Span,
    ) -> crate::Result<ColumnDef> {
        let pre = Self::table_by_id(txn, table)?;
        let name = to.fragment.clone();

        if let Some(taken) = pre.column_by_name(&name) {
            return Err(Error(Diagnostic::column_already_exists(
                Some(to),
                &pre.name,
                &taken.name,
            )));
        }

        let mut post = pre.clone();
        let Some(renamed) = post.columns.iter_mut().find(|c| c.id == column) else {
            return Err(Error(Diagnostic::internal(format!("unknown column id {}", column))));
        };
        renamed.name = name;
        let renamed = renamed.clone();

        txn.track_table_updated(pre, post)?;

        Ok(renamed)
    }
}

#[cfg(test)]
mod tests {
    use memgres_core::interface::QueryTransaction;
    use memgres_core::Span;
    use memgres_transaction::test_utils::create_test_command_transaction;

    use crate::test_utils::{ensure_test_schema, ensure_test_table};
    use crate::Catalog;

    #[test]
    fn test_ok() {
        let mut txn = create_test_command_transaction();
        ensure_test_schema(&mut txn);
        let table = ensure_test_table(&mut txn);
        let column = table.column_by_name("col_1").unwrap();

        let renamed =
            Catalog::rename_column(&mut txn, table.id, column.id, Span::testing("renamed"))
                .unwrap();

        assert_eq!(renamed.id, column.id);
        assert_eq!(renamed.name, "renamed");

        let table = txn.find_table(table.id).unwrap();
        assert!(table.column_by_name("col_1").is_none());
        assert!(table.column_by_name("renamed").is_some());
    }

    #[test]
    fn test_name_taken() {
        let mut txn = create_test_command_transaction();
        ensure_test_schema(&mut txn);
        let table = ensure_test_table(&mut txn);
        let column = table.column_by_name("col_1").unwrap();

        let err = Catalog::rename_column(&mut txn, table.id, column.id, Span::testing("col_1"))
            .unwrap_err();

        assert_eq!(err.code(), "CAT_005");
    }
}
