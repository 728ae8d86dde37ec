// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

mod catalog;
mod delta;
mod storage;
mod transaction;

pub use catalog::{
    ColumnAlteration, ColumnDef, ColumnId, ColumnIndex, ConstraintDef, ConstraintId,
    ConstraintKind, SchemaDef, SchemaId, TableDef, TableId,
};
pub use delta::{Delta, EncodedKey, EncodedRow};
pub use storage::Storage;
pub use transaction::{
    Change, CommandTransaction, CommitVersion, OperationType, QueryTransaction,
};
