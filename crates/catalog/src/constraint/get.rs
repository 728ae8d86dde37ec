// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use memgres_core::interface::{ConstraintDef, QueryTransaction, TableId};

use crate::Catalog;

impl Catalog {
    /// Lookup by name; a miss is `None`, never an error. Callers decide
    /// whether a missing constraint is ignorable.
    pub fn find_constraint_by_name(
        txn: &impl QueryTransaction,
        table: TableId,
        name: &str,
    ) -> crate::Result<Option<ConstraintDef>> {
        let table = Self::table_by_id(txn, table)?;
        Ok(table.constraint_by_name(name).cloned())
    }
}
