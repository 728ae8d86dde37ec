// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::sync::Arc;

use tracing::{debug, trace};

use memgres_catalog::CatalogStore;
use memgres_core::interface::{
    Change, ColumnId, CommandTransaction, CommitVersion, ConstraintId, Delta, EncodedKey,
    EncodedRow, OperationType, QueryTransaction, SchemaDef, SchemaId, Storage, TableDef, TableId,
};
use memgres_core::{Diagnostic, Error};

use crate::changes::TransactionalChanges;
use crate::TransactionId;

/// One session's writable transaction: a stack of nested scopes over the
/// shared catalog. Edits recorded in a nested scope stay private to this
/// transaction until the scope commits; edits recorded with no nested scope
/// open land in durable state at once, with no rollback representation.
pub struct StandardCommandTransaction<S: Storage> {
    id: TransactionId,
    store: Arc<CatalogStore>,
    storage: Arc<S>,
    version: CommitVersion,
    scopes: Vec<TransactionalChanges>,
}

impl<S: Storage> StandardCommandTransaction<S> {
    pub fn new(store: Arc<CatalogStore>, storage: Arc<S>) -> Self {
        let version = store.version();
        Self { id: TransactionId::generate(), store, storage, version, scopes: vec![] }
    }

    pub fn id(&self) -> TransactionId {
        self.id
    }

    /// Number of nested scopes currently open.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Opens a nested scope. Infallible; nothing about the data changes.
    pub fn fork(&mut self) {
        self.scopes.push(TransactionalChanges::new());
        trace!(id = %self.id, depth = self.scopes.len(), "fork");
    }

    /// Pops the innermost scope and merges its edits one level down: into
    /// the enclosing scope, or into durable state when it was the last one.
    pub fn commit(&mut self) -> crate::Result<()> {
        let Some(child) = self.scopes.pop() else {
            return Err(Error(Diagnostic::transaction_without_scope("commit")));
        };
        trace!(id = %self.id, depth = self.scopes.len(), "commit scope");

        match self.scopes.last_mut() {
            Some(parent) => {
                parent.absorb(child);
                Ok(())
            }
            None => self.apply_durable(child),
        }
    }

    /// Pops the innermost scope and discards its edits.
    pub fn rollback(&mut self) -> crate::Result<()> {
        if self.scopes.pop().is_none() {
            return Err(Error(Diagnostic::transaction_without_scope("rollback")));
        }
        trace!(id = %self.id, depth = self.scopes.len(), "rollback scope");
        Ok(())
    }

    /// Collapses every open scope, outermost first, into one durable commit
    /// and leaves the transaction at a fresh root-level scope. Required
    /// before structural changes: once this returns, nothing recorded so far
    /// can be rolled back, and neither can anything recorded until the next
    /// `fork`. Harmless when nothing is pending.
    pub fn full_commit(&mut self) -> crate::Result<()> {
        let mut merged = TransactionalChanges::new();
        for scope in self.scopes.drain(..) {
            merged.absorb(scope);
        }
        debug!(id = %self.id, "full commit");
        self.apply_durable(merged)?;

        // the fresh root-level scope reads at the newest version
        self.version = self.store.version();
        Ok(())
    }

    /// Buffers a row write in the innermost scope, or applies it durably
    /// when no nested scope is open.
    pub fn set(&mut self, table: TableId, key: EncodedKey, row: EncodedRow) -> crate::Result<()> {
        self.record_delta(Delta::Set { table, key, row })
    }

    pub fn remove(&mut self, table: TableId, key: EncodedKey) -> crate::Result<()> {
        self.record_delta(Delta::Remove { table, key })
    }

    fn record_delta(&mut self, delta: Delta) -> crate::Result<()> {
        match self.scopes.last_mut() {
            Some(scope) => {
                scope.add_delta(delta);
                Ok(())
            }
            None => self.storage.apply(std::slice::from_ref(&delta)),
        }
    }

    fn record_schema(&mut self, change: Change<SchemaDef>) -> crate::Result<()> {
        match self.scopes.last_mut() {
            Some(scope) => {
                scope.add_schema_def_change(change);
                Ok(())
            }
            None => {
                let mut changes = TransactionalChanges::new();
                changes.add_schema_def_change(change);
                self.apply_durable(changes)
            }
        }
    }

    fn record_table(&mut self, change: Change<TableDef>) -> crate::Result<()> {
        match self.scopes.last_mut() {
            Some(scope) => {
                scope.add_table_def_change(change);
                Ok(())
            }
            None => {
                let mut changes = TransactionalChanges::new();
                changes.add_table_def_change(change);
                self.apply_durable(changes)
            }
        }
    }

    fn apply_durable(&mut self, changes: TransactionalChanges) -> crate::Result<()> {
        if changes.is_empty() {
            return Ok(());
        }

        let version = self.store.commit(&changes.schema_def, &changes.table_def);
        self.storage.apply(&changes.deltas)?;
        self.version = version;
        Ok(())
    }
}

impl<S: Storage> QueryTransaction for StandardCommandTransaction<S> {
    fn version(&self) -> CommitVersion {
        self.version
    }

    fn find_schema(&self, schema: SchemaId) -> Option<SchemaDef> {
        for scope in self.scopes.iter().rev() {
            if let Some(found) = scope.schema(schema) {
                return found;
            }
        }
        self.store.find_schema(schema, self.version)
    }

    fn find_schema_by_name(&self, name: &str) -> Option<SchemaDef> {
        for scope in self.scopes.iter().rev() {
            if let Some(found) = scope.schema_by_name(name) {
                return found;
            }
        }
        self.store.find_schema_by_name(name, self.version)
    }

    fn find_table(&self, table: TableId) -> Option<TableDef> {
        for scope in self.scopes.iter().rev() {
            if let Some(found) = scope.table(table) {
                return found;
            }
        }
        self.store.find_table(table, self.version)
    }

    fn find_table_by_name(&self, schema: SchemaId, name: &str) -> Option<TableDef> {
        for scope in self.scopes.iter().rev() {
            if let Some(found) = scope.table_by_name(schema, name) {
                return found;
            }
        }
        self.store.find_table_by_name(schema, name, self.version)
    }
}

impl<S: Storage> CommandTransaction for StandardCommandTransaction<S> {
    type Storage = S;

    fn storage(&self) -> &S {
        &self.storage
    }

    fn next_schema_id(&mut self) -> memgres_core::Result<SchemaId> {
        Ok(self.store.next_schema_id())
    }

    fn next_table_id(&mut self) -> memgres_core::Result<TableId> {
        Ok(self.store.next_table_id())
    }

    fn next_column_id(&mut self) -> memgres_core::Result<ColumnId> {
        Ok(self.store.next_column_id())
    }

    fn next_constraint_id(&mut self) -> memgres_core::Result<ConstraintId> {
        Ok(self.store.next_constraint_id())
    }

    fn track_schema_created(&mut self, post: SchemaDef) -> memgres_core::Result<()> {
        self.record_schema(Change { pre: None, post: Some(post), op: OperationType::Create })
    }

    fn track_table_created(&mut self, post: TableDef) -> memgres_core::Result<()> {
        self.record_table(Change { pre: None, post: Some(post), op: OperationType::Create })
    }

    fn track_table_updated(&mut self, pre: TableDef, post: TableDef) -> memgres_core::Result<()> {
        self.record_table(Change {
            pre: Some(pre),
            post: Some(post),
            op: OperationType::Update,
        })
    }

    fn track_table_deleted(&mut self, pre: TableDef) -> memgres_core::Result<()> {
        self.record_table(Change { pre: Some(pre), post: None, op: OperationType::Delete })
    }
}
