// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

mod create;
mod drop;
mod get;

use memgres_core::interface::ConstraintKind;
use memgres_core::Span;

#[derive(Debug, Clone)]
pub struct ConstraintToCreate {
    pub span: Option<Span>,
    /// Absent for unnamed constraints; a postgres-style name is synthesized
    /// from the table, the covered columns and the kind.
    pub name: Option<Span>,
    pub kind: ConstraintKind,
    pub columns: Vec<Span>,
}
