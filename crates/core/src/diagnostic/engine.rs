// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::diagnostic::Diagnostic;
use crate::Span;

impl Diagnostic {
    pub fn unsupported_alter(span: Option<Span>, what: &str) -> Self {
        Self {
            code: "ENG_001".to_string(),
            statement: None,
            message: format!("{} is not supported", what),
            column: None,
            span,
            label: None,
            help: None,
            notes: vec![],
        }
    }
}
