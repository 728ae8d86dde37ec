// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

mod alter;
mod create;
mod drop;
mod get;
mod rename;

use memgres_core::{DataType, Span, Value};

#[derive(Debug, Clone)]
pub struct ColumnToCreate {
    pub span: Option<Span>,
    pub name: String,
    pub ty: DataType,
    pub nullable: bool,
    pub default: Option<Value>,
}
