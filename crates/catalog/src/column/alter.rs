// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use memgres_core::interface::{
    ColumnAlteration, ColumnDef, ColumnId, CommandTransaction, TableId,
};
use memgres_core::{Diagnostic, Error};

use crate::Catalog;

impl Catalog {
    /// Applies an in-place type/default/nullability change. Whether existing
    /// data survives the change is the storage layer's verdict.
    pub fn alter_column(
        txn: &mut impl CommandTransaction,
        table: TableId,
        column: ColumnId,
        alteration: ColumnAlteration,
    ) -> crate::Result<ColumnDef> {
        let pre = Self::table_by_id(txn, table)?;
        let Some(current) = pre.column(column) else {
            return Err(Error(Diagnostic::internal(format!("unknown column id {}", column))));
        };
        let current = current.clone();

        match &alteration {
            ColumnAlteration::SetType { ty } => {
                txn.storage().check_coercion(&pre, &current, *ty)?;
            }
            ColumnAlteration::SetNotNull => {
                txn.storage().validate_not_null(&pre, &current)?;
            }
            ColumnAlteration::SetDefault { .. }
            | ColumnAlteration::DropDefault
            | ColumnAlteration::DropNotNull => {}
        }

        let mut post = pre.clone();
        let Some(altered) = post.columns.iter_mut().find(|c| c.id == column) else {
            return Err(Error(Diagnostic::internal(format!("unknown column id {}", column))));
        };

        match alteration {
            ColumnAlteration::SetType { ty } => altered.ty = ty,
            ColumnAlteration::SetDefault { default } => altered.default = Some(default),
            ColumnAlteration::DropDefault => altered.default = None,
            ColumnAlteration::SetNotNull => altered.nullable = false,
            ColumnAlteration::DropNotNull => altered.nullable = true,
        }
        let altered = altered.clone();

        txn.track_table_updated(pre, post)?;

        Ok(altered)
    }
}

#[cfg(test)]
mod tests {
    use memgres_core::interface::{ColumnAlteration, QueryTransaction};
    use memgres_core::{DataType, Value};
    use memgres_transaction::test_utils::create_test_command_transaction;

    use crate::test_utils::{ensure_test_schema, ensure_test_table};
    use crate::Catalog;

    #[test]
    fn test_set_type() {
        let mut txn = create_test_command_transaction();
        ensure_test_schema(&mut txn);
        let table = ensure_test_table(&mut txn);
        let column = table.column_by_name("col_1").unwrap();

        let altered = Catalog::alter_column(
            &mut txn,
            table.id,
            column.id,
            ColumnAlteration::SetType { ty: DataType::Int8 },
        )
        .unwrap();

        assert_eq!(altered.ty, DataType::Int8);
        let table = txn.find_table(table.id).unwrap();
        assert_eq!(table.column_by_name("col_1").unwrap().ty, DataType::Int8);
    }

    #[test]
    fn test_set_and_drop_default() {
        let mut txn = create_test_command_transaction();
        ensure_test_schema(&mut txn);
        let table = ensure_test_table(&mut txn);
        let column = table.column_by_name("col_1").unwrap();

        let altered = Catalog::alter_column(
            &mut txn,
            table.id,
            column.id,
            ColumnAlteration::SetDefault { default: Value::Int2(7) },
        )
        .unwrap();
        assert_eq!(altered.default, Some(Value::Int2(7)));

        let altered =
            Catalog::alter_column(&mut txn, table.id, column.id, ColumnAlteration::DropDefault)
                .unwrap();
        assert_eq!(altered.default, None);
    }

    #[test]
    fn test_not_null_round_trip() {
        let mut txn = create_test_command_transaction();
        ensure_test_schema(&mut txn);
        let table = ensure_test_table(&mut txn);
        let column = table.column_by_name("col_1").unwrap();

        let altered =
            Catalog::alter_column(&mut txn, table.id, column.id, ColumnAlteration::SetNotNull)
                .unwrap();
        assert!(!altered.nullable);

        let altered =
            Catalog::alter_column(&mut txn, table.id, column.id, ColumnAlteration::DropNotNull)
                .unwrap();
        assert!(altered.nullable);
    }
}
