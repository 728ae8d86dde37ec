// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::sync::Arc;

use memgres_catalog::CatalogStore;
use memgres_core::interface::{
    CommitVersion, QueryTransaction, SchemaDef, SchemaId, TableDef, TableId,
};

/// A read-only view of the catalog, pinned to the version current when the
/// transaction began. Commits from other sessions stay invisible to it.
pub struct StandardQueryTransaction {
    store: Arc<CatalogStore>,
    version: CommitVersion,
}

impl StandardQueryTransaction {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        let version = store.version();
        Self { store, version }
    }
}

impl QueryTransaction for StandardQueryTransaction {
    fn version(&self) -> CommitVersion {
        self.version
    }

    fn find_schema(&self, schema: SchemaId) -> Option<SchemaDef> {
        self.store.find_schema(schema, self.version)
    }

    fn find_schema_by_name(&self, name: &str) -> Option<SchemaDef> {
        self.store.find_schema_by_name(name, self.version)
    }

    fn find_table(&self, table: TableId) -> Option<TableDef> {
        self.store.find_table(table, self.version)
    }

    fn find_table_by_name(&self, schema: SchemaId, name: &str) -> Option<TableDef> {
        self.store.find_table_by_name(schema, name, self.version)
    }
}
