// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::sync::atomic::{AtomicU64, Ordering};

use crossbeam_skiplist::SkipMap;
use parking_lot::Mutex;
use tracing::debug;

use memgres_core::interface::{
    Change, ColumnId, CommitVersion, ConstraintId, SchemaDef, SchemaId, TableDef, TableId,
};

/// Process-wide durable catalog state: versioned definitions addressed by
/// stable id, plus current-name indexes. Shared across sessions behind an
/// `Arc`; structural commits are serialized by `commit_lock` because once a
/// commit is applied there is no compensating rollback.
#[derive(Debug)]
pub struct CatalogStore {
    version: AtomicU64,
    commit_lock: Mutex<()>,

    schema_seq: AtomicU64,
    table_seq: AtomicU64,
    column_seq: AtomicU64,
    constraint_seq: AtomicU64,

    schemas: SkipMap<SchemaId, crate::Versioned<SchemaDef>>,
    schemas_by_name: SkipMap<String, SchemaId>,
    tables: SkipMap<TableId, crate::Versioned<TableDef>>,
    tables_by_name: SkipMap<(SchemaId, String), TableId>,
}

pub const DEFAULT_SCHEMA: &str = "public";

impl CatalogStore {
    /// A fresh store holding only the default `public` schema.
    pub fn new() -> Self {
        let store = Self {
            version: AtomicU64::new(0),
            commit_lock: Mutex::new(()),
            schema_seq: AtomicU64::new(2),
            table_seq: AtomicU64::new(1),
            column_seq: AtomicU64::new(1),
            constraint_seq: AtomicU64::new(1),
            schemas: SkipMap::new(),
            schemas_by_name: SkipMap::new(),
            tables: SkipMap::new(),
            tables_by_name: SkipMap::new(),
        };

        store.set_schema(
            SchemaId(1),
            0,
            Some(SchemaDef { id: SchemaId(1), name: DEFAULT_SCHEMA.to_string() }),
        );
        store
    }

    pub fn version(&self) -> CommitVersion {
        self.version.load(Ordering::Acquire)
    }

    pub fn next_schema_id(&self) -> SchemaId {
        SchemaId(self.schema_seq.fetch_add(1, Ordering::Relaxed))
    }

    pub fn next_table_id(&self) -> TableId {
        TableId(self.table_seq.fetch_add(1, Ordering::Relaxed))
    }

    pub fn next_column_id(&self) -> ColumnId {
        ColumnId(self.column_seq.fetch_add(1, Ordering::Relaxed))
    }

    pub fn next_constraint_id(&self) -> ConstraintId {
        ConstraintId(self.constraint_seq.fetch_add(1, Ordering::Relaxed))
    }

    pub fn find_schema(&self, schema: SchemaId, version: CommitVersion) -> Option<SchemaDef> {
        self.schemas.get(&schema).and_then(|entry| entry.value().get(version))
    }

    pub fn find_schema_by_name(&self, name: &str, version: CommitVersion) -> Option<SchemaDef> {
        self.schemas_by_name.get(name).and_then(|entry| {
            let schema = *entry.value();
            self.find_schema(schema, version)
        })
    }

    pub fn find_table(&self, table: TableId, version: CommitVersion) -> Option<TableDef> {
        self.tables.get(&table).and_then(|entry| entry.value().get(version))
    }

    pub fn find_table_by_name(
        &self,
        schema: SchemaId,
        name: &str,
        version: CommitVersion,
    ) -> Option<TableDef> {
        self.tables_by_name.get(&(schema, name.to_string())).and_then(|entry| {
            let table = *entry.value();
            self.find_table(table, version)
        })
    }

    /// Apply a batch of catalog edits as one durable commit and publish the
    /// new version. Callers hand over edits in the order they were recorded;
    /// later edits to the same id win.
    pub fn commit(
        &self,
        schemas: &[Change<SchemaDef>],
        tables: &[Change<TableDef>],
    ) -> CommitVersion {
        let _guard = self.commit_lock.lock();
        let version = self.version.load(Ordering::Acquire) + 1;

        for change in schemas {
            let Some(id) = change.post.as_ref().or(change.pre.as_ref()).map(|schema| schema.id)
            else {
                continue;
            };
            self.set_schema(id, version, change.post.clone());
        }

        for change in tables {
            let Some(id) = change.post.as_ref().or(change.pre.as_ref()).map(|table| table.id)
            else {
                continue;
            };
            self.set_table(id, version, change.post.clone());
        }

        self.version.store(version, Ordering::Release);
        debug!(version, schemas = schemas.len(), tables = tables.len(), "catalog commit");
        version
    }

    fn set_schema(&self, id: SchemaId, version: CommitVersion, schema: Option<SchemaDef>) {
        if let Some(entry) = self.schemas.get(&id) {
            if let Some(pre) = entry.value().get_latest() {
                self.schemas_by_name.remove(&pre.name);
            }
        }

        if let Some(post) = &schema {
            self.schemas_by_name.insert(post.name.clone(), id);
        }

        let versioned = self.schemas.get_or_insert_with(id, crate::Versioned::new);
        versioned.value().insert(version, schema);
    }

    fn set_table(&self, id: TableId, version: CommitVersion, table: Option<TableDef>) {
        if let Some(entry) = self.tables.get(&id) {
            if let Some(pre) = entry.value().get_latest() {
                self.tables_by_name.remove(&(pre.schema, pre.name.clone()));
            }
        }

        if let Some(post) = &table {
            self.tables_by_name.insert((post.schema, post.name.clone()), id);
        }

        let versioned = self.tables.get_or_insert_with(id, crate::Versioned::new);
        versioned.value().insert(version, table);
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
