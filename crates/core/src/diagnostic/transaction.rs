// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::diagnostic::Diagnostic;

impl Diagnostic {
    /// Commit or rollback was requested at the root scope, which has no
    /// enclosing scope to merge into or fall back to.
    pub fn transaction_without_scope(operation: &str) -> Self {
        Self {
            code: "TXN_001".to_string(),
            statement: None,
            message: format!("cannot {} the root transaction scope", operation),
            column: None,
            span: None,
            label: None,
            help: Some("the root scope is ended through full_commit only".to_string()),
            notes: vec![],
        }
    }
}
