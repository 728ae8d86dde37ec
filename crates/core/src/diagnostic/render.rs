// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::fmt::Write;

use crate::diagnostic::Diagnostic;

/// Renders a diagnostic as plain text, one piece of context per line.
pub struct DefaultRenderer;

impl DefaultRenderer {
    pub fn render_string(diagnostic: &Diagnostic) -> String {
        let mut out = String::new();

        let _ = write!(out, "error[{}]: {}", diagnostic.code, diagnostic.message);

        if let Some(span) = &diagnostic.span {
            let _ = write!(
                out,
                "\n  --> {}:{}: `{}`",
                span.line.0, span.column.0, span.fragment
            );
        }

        if let Some(label) = &diagnostic.label {
            let _ = write!(out, "\n  = {}", label);
        }

        if let Some(help) = &diagnostic.help {
            let _ = write!(out, "\n  help: {}", help);
        }

        for note in &diagnostic.notes {
            let _ = write!(out, "\n  note: {}", note);
        }

        if let Some(statement) = &diagnostic.statement {
            let _ = write!(out, "\n  while executing: {}", statement);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use crate::diagnostic::{DefaultRenderer, Diagnostic};
    use crate::Span;

    #[test]
    fn test_renders_code_and_message() {
        let diagnostic = Diagnostic {
            code: "CAT_002".to_string(),
            statement: None,
            message: "table `t` does not exist".to_string(),
            column: None,
            span: None,
            label: None,
            help: None,
            notes: vec![],
        };

        let out = DefaultRenderer::render_string(&diagnostic);
        assert_eq!(out, "error[CAT_002]: table `t` does not exist");
    }

    #[test]
    fn test_renders_span_and_help() {
        let diagnostic = Diagnostic {
            code: "CAT_006".to_string(),
            statement: None,
            message: "column `ghost` does not exist".to_string(),
            column: None,
            span: Some(Span::testing("ghost")),
            label: None,
            help: Some("use IF EXISTS to skip missing columns".to_string()),
            notes: vec![],
        };

        let out = DefaultRenderer::render_string(&diagnostic);
        assert!(out.contains("--> 1:0: `ghost`"));
        assert!(out.contains("help: use IF EXISTS"));
    }
}
