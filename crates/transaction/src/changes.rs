// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use memgres_core::interface::{
    Change, Delta, OperationType, SchemaDef, SchemaId, TableDef, TableId,
};

/// Everything one transaction scope has recorded and not yet merged: catalog
/// edits, kept per definition kind, and row deltas. Replay order within a
/// kind is the recording order; later edits to the same id win.
#[derive(Debug, Default)]
pub struct TransactionalChanges {
    pub schema_def: Vec<Change<SchemaDef>>,
    pub table_def: Vec<Change<TableDef>>,
    pub deltas: Vec<Delta>,
}

impl TransactionalChanges {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.schema_def.is_empty() && self.table_def.is_empty() && self.deltas.is_empty()
    }

    pub fn add_schema_def_change(&mut self, change: Change<SchemaDef>) {
        self.schema_def.push(change);
    }

    pub fn add_table_def_change(&mut self, change: Change<TableDef>) {
        self.table_def.push(change);
    }

    pub fn add_delta(&mut self, delta: Delta) {
        self.deltas.push(delta);
    }

    /// Merge a committed child scope into this one. The child's edits were
    /// recorded after everything already here, so they append.
    pub fn absorb(&mut self, child: TransactionalChanges) {
        self.schema_def.extend(child.schema_def);
        self.table_def.extend(child.table_def);
        self.deltas.extend(child.deltas);
    }

    /// What this scope knows about a schema: `None` when it never touched
    /// it, `Some(None)` when it deleted it, `Some(Some(_))` otherwise.
    pub(crate) fn schema(&self, id: SchemaId) -> Option<Option<SchemaDef>> {
        for change in self.schema_def.iter().rev() {
            if let Some(schema) = &change.post {
                if schema.id == id {
                    return Some(Some(schema.clone()));
                }
            } else if let Some(schema) = &change.pre {
                if schema.id == id && change.op == OperationType::Delete {
                    return Some(None);
                }
            }
        }
        None
    }

    pub(crate) fn schema_by_name(&self, name: &str) -> Option<Option<SchemaDef>> {
        for change in self.schema_def.iter().rev() {
            if change.post.as_ref().is_some_and(|s| s.name == name) {
                return Some(change.post.clone());
            }
            if change.pre.as_ref().is_some_and(|s| s.name == name) {
                // the name was renamed away or deleted in this scope
                return Some(None);
            }
        }
        None
    }

    pub(crate) fn table(&self, id: TableId) -> Option<Option<TableDef>> {
        for change in self.table_def.iter().rev() {
            if let Some(table) = &change.post {
                if table.id == id {
                    return Some(Some(table.clone()));
                }
            } else if let Some(table) = &change.pre {
                if table.id == id && change.op == OperationType::Delete {
                    return Some(None);
                }
            }
        }
        None
    }

    pub(crate) fn table_by_name(&self, schema: SchemaId, name: &str) -> Option<Option<TableDef>> {
        for change in self.table_def.iter().rev() {
            if change.post.as_ref().is_some_and(|t| t.schema == schema && t.name == name) {
                return Some(change.post.clone());
            }
            if change.pre.as_ref().is_some_and(|t| t.schema == schema && t.name == name) {
                return Some(None);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use memgres_core::interface::{Change, OperationType, SchemaId, TableDef, TableId};

    use crate::TransactionalChanges;

    fn table_def(id: TableId, name: &str) -> TableDef {
        TableDef {
            id,
            schema: SchemaId(1),
            name: name.to_string(),
            columns: vec![],
            constraints: vec![],
        }
    }

    #[test]
    fn test_latest_change_wins() {
        let mut changes = TransactionalChanges::new();
        changes.add_table_def_change(Change {
            pre: None,
            post: Some(table_def(TableId(1), "t")),
            op: OperationType::Create,
        });
        changes.add_table_def_change(Change {
            pre: Some(table_def(TableId(1), "t")),
            post: Some(table_def(TableId(1), "t2")),
            op: OperationType::Update,
        });

        assert_eq!(changes.table(TableId(1)).unwrap().unwrap().name, "t2");
        // the old name no longer resolves
        assert_eq!(changes.table_by_name(SchemaId(1), "t"), Some(None));
        assert!(changes.table_by_name(SchemaId(1), "t2").unwrap().is_some());
    }

    #[test]
    fn test_delete_shadows() {
        let mut changes = TransactionalChanges::new();
        changes.add_table_def_change(Change {
            pre: Some(table_def(TableId(1), "t")),
            post: None,
            op: OperationType::Delete,
        });

        assert_eq!(changes.table(TableId(1)), Some(None));
        assert_eq!(changes.table_by_name(SchemaId(1), "t"), Some(None));
        assert_eq!(changes.table(TableId(2)), None);
    }
}
