// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Trait to provide a `Span` either directly or lazily (via closure).
pub trait IntoSpan {
    fn into_span(self) -> Span;
}

impl IntoSpan for Span {
    fn into_span(self) -> Span {
        self
    }
}

impl IntoSpan for &Span {
    fn into_span(self) -> Span {
        self.clone()
    }
}

impl<F> IntoSpan for F
where
    F: Fn() -> Span,
{
    fn into_span(self) -> Span {
        self()
    }
}

/// A fragment of the source statement, carried on parsed nodes so that
/// diagnostics can point back at the offending text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    /// Offset of the fragment within the statement, starting at 0.
    pub column: SpanColumn,
    /// Line of the fragment within the statement, starting at 1.
    pub line: SpanLine,

    pub fragment: String,
}

impl AsRef<str> for Span {
    fn as_ref(&self) -> &str {
        self.fragment.as_str()
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.fragment, f)
    }
}

impl Span {
    pub fn testing(s: impl Into<String>) -> Self {
        Self { column: SpanColumn(0), line: SpanLine(1), fragment: s.into() }
    }

    pub fn testing_empty() -> Self {
        Self::testing("")
    }
}

#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Ord, Eq, Serialize, Deserialize)]
pub struct SpanColumn(pub u32);

impl Deref for SpanColumn {
    type Target = u32;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Ord, Eq, Serialize, Deserialize)]
pub struct SpanLine(pub u32);

impl Deref for SpanLine {
    type Target = u32;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
