// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use memgres_core::interface::{CommandTransaction, ConstraintId, TableId};
use memgres_core::{Diagnostic, Error};

use crate::Catalog;

impl Catalog {
    /// Uninstalls the constraint. Not idempotent: callers resolve the
    /// constraint fresh before every call, so an unknown id is an engine bug.
    pub fn drop_constraint(
        txn: &mut impl CommandTransaction,
        table: TableId,
        constraint: ConstraintId,
    ) -> crate::Result<()> {
        let pre = Self::table_by_id(txn, table)?;

        if pre.constraints.iter().all(|c| c.id != constraint) {
            return Err(Error(Diagnostic::internal(format!(
                "unknown constraint id {}",
                constraint
            ))));
        }

        let mut post = pre.clone();
        post.constraints.retain(|c| c.id != constraint);
        txn.track_table_updated(pre, post)?;

        Ok(())
    }
}
