// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::diagnostic::Diagnostic;
use crate::{DataType, Span};

impl Diagnostic {
    pub fn schema_not_found(span: Option<Span>, schema: &str) -> Self {
        Self {
            code: "CAT_001".to_string(),
            statement: None,
            message: format!("schema `{}` does not exist", schema),
            column: None,
            span,
            label: None,
            help: None,
            notes: vec![],
        }
    }

    pub fn table_not_found(span: Option<Span>, schema: &str, table: &str) -> Self {
        Self {
            code: "CAT_002".to_string(),
            statement: None,
            message: format!("table `{}.{}` does not exist", schema, table),
            column: None,
            span,
            label: None,
            help: None,
            notes: vec![],
        }
    }

    pub fn schema_already_exists(span: Option<Span>, schema: &str) -> Self {
        Self {
            code: "CAT_003".to_string(),
            statement: None,
            message: format!("schema `{}` already exists", schema),
            column: None,
            span,
            label: None,
            help: None,
            notes: vec![],
        }
    }

    pub fn table_already_exists(span: Option<Span>, schema: &str, table: &str) -> Self {
        Self {
            code: "CAT_004".to_string(),
            statement: None,
            message: format!("table `{}.{}` already exists", schema, table),
            column: None,
            span,
            label: Some("name is taken in the owning schema".to_string()),
            help: None,
            notes: vec![],
        }
    }

    pub fn column_already_exists(span: Option<Span>, table: &str, column: &str) -> Self {
        Self {
            code: "CAT_005".to_string(),
            statement: None,
            message: format!("column `{}` of table `{}` already exists", column, table),
            column: None,
            span,
            label: None,
            help: Some("use ADD COLUMN IF NOT EXISTS to skip existing columns".to_string()),
            notes: vec![],
        }
    }

    pub fn column_not_found(span: Option<Span>, table: &str, column: &str) -> Self {
        Self {
            code: "CAT_006".to_string(),
            statement: None,
            message: format!("column `{}` of table `{}` does not exist", column, table),
            column: None,
            span,
            label: None,
            help: None,
            notes: vec![],
        }
    }

    /// Existing rows cannot be coerced into the requested column type.
    pub fn column_not_coercible(
        span: Option<Span>,
        table: &str,
        column: &str,
        from: DataType,
        to: DataType,
    ) -> Self {
        Self {
            code: "CAT_007".to_string(),
            statement: None,
            message: format!(
                "existing data of column `{}.{}` cannot be converted from {} to {}",
                table, column, from, to
            ),
            column: None,
            span,
            label: None,
            help: Some("drop and re-add the column, or convert the data first".to_string()),
            notes: vec![],
        }
    }

    pub fn constraint_not_found(span: Option<Span>, table: &str, constraint: &str) -> Self {
        Self {
            code: "CAT_008".to_string(),
            statement: None,
            message: format!(
                "constraint `{}` of relation `{}` does not exist",
                constraint, table
            ),
            column: None,
            span,
            label: None,
            help: None,
            notes: vec![],
        }
    }

    pub fn constraint_already_exists(span: Option<Span>, table: &str, constraint: &str) -> Self {
        Self {
            code: "CAT_009".to_string(),
            statement: None,
            message: format!("constraint `{}` of relation `{}` already exists", constraint, table),
            column: None,
            span,
            label: None,
            help: None,
            notes: vec![],
        }
    }

    /// Existing rows do not satisfy a constraint that is being installed.
    pub fn constraint_violation(span: Option<Span>, table: &str, constraint: &str) -> Self {
        Self {
            code: "CAT_010".to_string(),
            statement: None,
            message: format!(
                "existing data of relation `{}` violates constraint `{}`",
                table, constraint
            ),
            column: None,
            span,
            label: None,
            help: None,
            notes: vec![],
        }
    }

    /// A column cannot be dropped while a live constraint still covers it.
    pub fn column_has_dependents(
        span: Option<Span>,
        table: &str,
        column: &str,
        constraint: &str,
    ) -> Self {
        Self {
            code: "CAT_011".to_string(),
            statement: None,
            message: format!(
                "cannot drop column `{}.{}` because constraint `{}` depends on it",
                table, column, constraint
            ),
            column: None,
            span,
            label: None,
            help: Some("drop the constraint first".to_string()),
            notes: vec![],
        }
    }
}
