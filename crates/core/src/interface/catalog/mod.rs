// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

mod column;
mod constraint;
mod schema;
mod table;

pub use column::{ColumnAlteration, ColumnDef, ColumnId, ColumnIndex};
pub use constraint::{ConstraintDef, ConstraintId, ConstraintKind};
pub use schema::{SchemaDef, SchemaId};
pub use table::{TableDef, TableId};
