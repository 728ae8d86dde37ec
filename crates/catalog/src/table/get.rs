// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use memgres_core::interface::{QueryTransaction, SchemaDef, TableDef, TableId};
use memgres_core::{Diagnostic, Error, Span};

use crate::Catalog;

impl Catalog {
    pub fn find_table_by_name(
        txn: &impl QueryTransaction,
        schema: &SchemaDef,
        name: &str,
    ) -> Option<TableDef> {
        txn.find_table_by_name(schema.id, name)
    }

    /// Resolving form of the lookup; a miss is an error naming schema and
    /// table.
    pub fn get_table_by_name(
        txn: &impl QueryTransaction,
        span: Option<Span>,
        schema: &SchemaDef,
        name: &str,
    ) -> crate::Result<TableDef> {
        match txn.find_table_by_name(schema.id, name) {
            Some(table) => Ok(table),
            None => Err(Error(Diagnostic::table_not_found(span, &schema.name, name))),
        }
    }

    /// Tables are addressed by stable id between resolution and mutation; an
    /// id that stops resolving mid-statement is an engine bug, not bad input.
    pub(crate) fn table_by_id(
        txn: &impl QueryTransaction,
        table: TableId,
    ) -> crate::Result<TableDef> {
        txn.find_table(table)
            .ok_or_else(|| Error(Diagnostic::internal(format!("unknown table id {}", table))))
    }
}
