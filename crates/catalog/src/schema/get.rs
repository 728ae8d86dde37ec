// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use memgres_core::interface::{QueryTransaction, SchemaDef, SchemaId};
use memgres_core::{Diagnostic, Error, Span};

use crate::Catalog;

impl Catalog {
    pub fn find_schema_by_name(txn: &impl QueryTransaction, name: &str) -> Option<SchemaDef> {
        txn.find_schema_by_name(name)
    }

    /// Resolving form of the lookup; a miss is an error naming the schema.
    pub fn get_schema_by_name(
        txn: &impl QueryTransaction,
        span: Option<Span>,
        name: &str,
    ) -> crate::Result<SchemaDef> {
        match txn.find_schema_by_name(name) {
            Some(schema) => Ok(schema),
            None => Err(Error(Diagnostic::schema_not_found(span, name))),
        }
    }

    pub(crate) fn schema_by_id(
        txn: &impl QueryTransaction,
        schema: SchemaId,
    ) -> crate::Result<SchemaDef> {
        txn.find_schema(schema)
            .ok_or_else(|| Error(Diagnostic::internal(format!("unknown schema id {}", schema))))
    }
}

#[cfg(test)]
mod tests {
    use memgres_transaction::test_utils::create_test_command_transaction;

    use crate::Catalog;

    #[test]
    fn test_default_schema_present() {
        let txn = create_test_command_transaction();

        let schema = Catalog::get_schema_by_name(&txn, None, "public").unwrap();
        assert_eq!(schema.id, 1);
        assert_eq!(schema.name, "public");
    }

    #[test]
    fn test_not_found() {
        let txn = create_test_command_transaction();

        let err = Catalog::get_schema_by_name(&txn, None, "missing").unwrap_err();
        assert_eq!(err.code(), "CAT_001");
    }
}
