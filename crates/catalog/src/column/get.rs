// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use memgres_core::interface::{ColumnDef, QueryTransaction, TableId};
use memgres_core::{Diagnostic, Error, Span};

use crate::Catalog;

impl Catalog {
    /// Silent lookup; a miss is `None`. Existence-guard policies upstream
    /// are built on this form.
    pub fn find_column_by_name(
        txn: &impl QueryTransaction,
        table: TableId,
        name: &str,
    ) -> crate::Result<Option<ColumnDef>> {
        let table = Self::table_by_id(txn, table)?;
        Ok(table.column_by_name(name).cloned())
    }

    /// Resolving form; a miss is an error naming table and column.
    pub fn get_column_by_name(
        txn: &impl QueryTransaction,
        span: Option<Span>,
        table: TableId,
        name: &str,
    ) -> crate::Result<ColumnDef> {
        let table = Self::table_by_id(txn, table)?;
        match table.column_by_name(name) {
            Some(column) => Ok(column.clone()),
            None => Err(Error(Diagnostic::column_not_found(span, &table.name, name))),
        }
    }
}

#[cfg(test)]
mod tests {
    use memgres_transaction::test_utils::create_test_command_transaction;

    use crate::test_utils::{ensure_test_schema, ensure_test_table};
    use crate::Catalog;

    #[test]
    fn test_find_silent_on_miss() {
        let mut txn = create_test_command_transaction();
        ensure_test_schema(&mut txn);
        let table = ensure_test_table(&mut txn);

        assert!(Catalog::find_column_by_name(&txn, table.id, "ghost").unwrap().is_none());
        assert!(Catalog::find_column_by_name(&txn, table.id, "col_1").unwrap().is_some());
    }

    #[test]
    fn test_get_fails_on_miss() {
        let mut txn = create_test_command_transaction();
        ensure_test_schema(&mut txn);
        let table = ensure_test_table(&mut txn);

        let err = Catalog::get_column_by_name(&txn, None, table.id, "ghost").unwrap_err();
        assert_eq!(err.code(), "CAT_006");
    }
}
