// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use memgres_core::interface::{CommandTransaction, TableDef, TableId};
use memgres_core::{Diagnostic, Error, Span};

use crate::Catalog;

impl Catalog {
    /// Renames the table within its owning schema. The stable id is
    /// unaffected; only the name index moves.
    pub fn rename_table(
        txn: &mut impl CommandTransaction,
        table: TableId,
        to: Span,
    ) -> crate::Result<TableDef> {
        let pre = Self::table_by_id(txn, table)?;
        let name = to.fragment.clone();

        if let Some(taken) = txn.find_table_by_name(pre.schema, &name) {
            let schema = Self::schema_by_id(txn, pre.schema)?;
            return Err(Error(Diagnostic::table_already_exists(
                Some(to),
                &schema.name,
                &taken.name,
            )));
        }

        let mut post = pre.clone();
        post.name = name;
        txn.track_table_updated(pre, post.clone())?;

        Ok(post)
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
        let schema = ensure_test_schema(&mut txn);
        let table = ensure_test_table(&mut txn);

        let renamed =
            Catalog::rename_table(&mut txn, table.id, Span::testing("renamed_table")).unwrap();

        assert_eq!(renamed.id, table.id);
        assert_eq!(renamed.name, "renamed_table");
        assert!(txn.find_table_by_name(schema.id, "test_table").is_none());
        assert_eq!(txn.find_table_by_name(schema.id, "renamed_table").unwrap().id, table.id);
    }

    #[test]
    fn test_name_taken() {
        let mut txn = create_test_command_transaction();
        ensure_test_schema(&mut txn);
        let table = ensure_test_table(&mut txn);

        let err = Catalog::rename_table(&mut txn, table.id, Span::testing("test_table"))
            .unwrap_err();

        assert_eq!(err.code(), "CAT_004");
    }
}
