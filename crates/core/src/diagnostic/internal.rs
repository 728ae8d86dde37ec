// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::diagnostic::Diagnostic;

impl Diagnostic {
    /// An invariant the engine relies on was broken. Not a user error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: "INT_001".to_string(),
            statement: None,
            message: message.into(),
            column: None,
            span: None,
            label: None,
            help: Some("this is a bug, please report it".to_string()),
            notes: vec![],
        }
    }
}
