// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use memgres_core::interface::{CommandTransaction, SchemaDef};
use memgres_core::{Diagnostic, Error, Span};

use crate::Catalog;

#[derive(Debug, Clone)]
pub struct SchemaToCreate {
    pub span: Option<Span>,
    pub name: String,
}

impl Catalog {
    pub fn create_schema(
        txn: &mut impl CommandTransaction,
        to_create: SchemaToCreate,
    ) -> crate::Result<SchemaDef> {
        if txn.find_schema_by_name(&to_create.name).is_some() {
            return Err(Error(Diagnostic::schema_already_exists(to_create.span, &to_create.name)));
        }

        let id = txn.next_schema_id()?;
        let schema = SchemaDef { id, name: to_create.name };
        txn.track_schema_created(schema.clone())?;

        Ok(schema)
    }
}
