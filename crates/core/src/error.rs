// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::fmt::{Display, Formatter};

use crate::diagnostic::{DefaultRenderer, Diagnostic};

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let out = DefaultRenderer::render_string(&self.0);
        f.write_str(out.as_str())
    }
}

impl Error {
    pub fn diagnostic(self) -> Diagnostic {
        self.0
    }

    pub fn code(&self) -> &str {
        self.0.code.as_str()
    }
}

impl std::error::Error for Error {}
