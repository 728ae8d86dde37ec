// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use serde::{Deserialize, Serialize};

use memgres_core::interface::{ColumnAlteration, ConstraintKind};
use memgres_core::{DataType, Span, Value};

/// A parsed `ALTER TABLE` statement as handed over by the parser. Syntax is
/// already validated; every name still carries its source span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlterTablePlan {
    pub schema: Option<Span>,
    pub table: Span,
    /// Statement-level `IF EXISTS`: a missing target table skips the whole
    /// statement instead of failing it.
    pub if_exists: bool,
    /// The `ONLY` modifier. Inheritance is not modeled; it is accepted and
    /// ignored.
    pub only: bool,
    pub changes: Vec<AlterTableChange>,
}

/// The closed set of change kinds an `ALTER TABLE` statement can request.
/// Executors match exhaustively; a new variant fails to compile until every
/// consumer handles it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AlterTableChange {
    Rename { to: Span },
    AddColumn { column: ColumnToAdd, if_not_exists: bool },
    DropColumn { column: Span, if_exists: bool },
    RenameColumn { column: Span, to: Span },
    AlterColumn { column: Span, alteration: ColumnAlteration },
    AddConstraint { constraint: ConstraintToAdd },
    DropConstraint { constraint: Span, if_exists: bool },
    RenameConstraint { constraint: Span, to: Span },
    OwnerTo { owner: Span },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnToAdd {
    pub name: Span,
    pub ty: DataType,
    pub nullable: bool,
    pub default: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintToAdd {
    /// Absent when the statement leaves the constraint unnamed; the catalog
    /// synthesizes a postgres-style name on install.
    pub name: Option<Span>,
    pub kind: ConstraintKind,
    pub columns: Vec<Span>,
}
