// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use serde::{Deserialize, Serialize};

use crate::interface::{
    ColumnId, ConstraintId, SchemaDef, SchemaId, Storage, TableDef, TableId,
};

/// Monotonic catalog version; every durable structural commit produces the
/// next one. Readers resolve definitions as of their version.
pub type CommitVersion = u64;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationType {
    Create,
    Update,
    Delete,
}

/// A single pending catalog edit: the definition before and after. `pre` is
/// absent for creations, `post` for deletions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Change<T> {
    pub pre: Option<T>,
    pub post: Option<T>,
    pub op: OperationType,
}

/// Read access to catalog definitions as seen by one transaction: its own
/// pending edits first, then durable state at its version.
pub trait QueryTransaction {
    fn version(&self) -> CommitVersion;

    fn find_schema(&self, schema: SchemaId) -> Option<SchemaDef>;

    fn find_schema_by_name(&self, name: &str) -> Option<SchemaDef>;

    fn find_table(&self, table: TableId) -> Option<TableDef>;

    fn find_table_by_name(&self, schema: SchemaId, name: &str) -> Option<TableDef>;
}

/// Write access: catalog operations record their edits through `track_*`;
/// whether an edit lands in a revocable scope or straight in durable state
/// is the transaction's decision, never the caller's.
pub trait CommandTransaction: QueryTransaction {
    type Storage: Storage;

    fn storage(&self) -> &Self::Storage;

    fn next_schema_id(&mut self) -> crate::Result<SchemaId>;

    fn next_table_id(&mut self) -> crate::Result<TableId>;

    fn next_column_id(&mut self) -> crate::Result<ColumnId>;

    fn next_constraint_id(&mut self) -> crate::Result<ConstraintId>;

    fn track_schema_created(&mut self, post: SchemaDef) -> crate::Result<()>;

    fn track_table_created(&mut self, post: TableDef) -> crate::Result<()>;

    fn track_table_updated(&mut self, pre: TableDef, post: TableDef) -> crate::Result<()>;

    fn track_table_deleted(&mut self, pre: TableDef) -> crate::Result<()>;
}
