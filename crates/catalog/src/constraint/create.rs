// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use memgres_core::interface::{ColumnId, CommandTransaction, ConstraintDef, TableDef, TableId};
use memgres_core::{Diagnostic, Error};

use crate::constraint::ConstraintToCreate;
use crate::Catalog;

impl Catalog {
    /// Installs a constraint on the table. Existing data is validated by the
    /// storage layer before anything is recorded; what the constraint means
    /// is the validation layer's business.
    pub fn create_constraint(
        txn: &mut impl CommandTransaction,
        table: TableId,
        to_create: ConstraintToCreate,
    ) -> crate::Result<ConstraintDef> {
        let pre = Self::table_by_id(txn, table)?;

        let mut columns: Vec<ColumnId> = Vec::with_capacity(to_create.columns.len());
        for column in &to_create.columns {
            let Some(found) = pre.column_by_name(&column.fragment) else {
                return Err(Error(Diagnostic::column_not_found(
                    Some(column.clone()),
                    &pre.name,
                    &column.fragment,
                )));
            };
            columns.push(found.id);
        }

        let name = match &to_create.name {
            Some(name) => name.fragment.clone(),
            None => synthesize_name(&pre, &to_create),
        };

        if let Some(taken) = pre.constraint_by_name(&name) {
            return Err(Error(Diagnostic::constraint_already_exists(
                to_create.span,
                &pre.name,
                &taken.name,
            )));
        }

        let constraint = ConstraintDef {
            id: txn.next_constraint_id()?,
            name,
            kind: to_create.kind,
            columns,
        };

        txn.storage().validate_constraint(&pre, &constraint)?;

        let mut post = pre.clone();
        post.constraints.push(constraint.clone());
        txn.track_table_updated(pre, post)?;

        Ok(constraint)
    }
}

fn synthesize_name(table: &TableDef, to_create: &ConstraintToCreate) -> String {
    match to_create.columns.as_slice() {
        [column] => format!("{}_{}_{}", table.name, column.fragment, to_create.kind.suffix()),
        _ => format!("{}_{}", table.name, to_create.kind.suffix()),
    }
}
