// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use memgres_core::interface::{CommandTransaction, TableId};

use crate::Catalog;

impl Catalog {
    pub fn drop_table(txn: &mut impl CommandTransaction, table: TableId) -> crate::Result<()> {
        let pre = Self::table_by_id(txn, table)?;
        txn.storage().drop_table(&pre)?;
        txn.track_table_deleted(pre)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use memgres_core::interface::QueryTransaction;
    use memgres_transaction::test_utils::create_test_command_transaction;

    use crate::test_utils::{ensure_test_schema, ensure_test_table};
    use crate::Catalog;

    #[test]
    fn test_ok() {
        let mut txn = create_test_command_transaction();
        let schema = ensure_test_schema(&mut txn);
        let table = ensure_test_table(&mut txn);

        Catalog::drop_table(&mut txn, table.id).unwrap();

        assert!(txn.find_table(table.id).is_none());
        assert!(txn.find_table_by_name(schema.id, "test_table").is_none());
    }
}
