// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

// #![cfg_attr(not(debug_assertions), deny(missing_docs))]
#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use data_type::DataType;
pub use diagnostic::{DefaultRenderer, Diagnostic, DiagnosticColumn};
pub use error::Error;
pub use span::{IntoSpan, Span, SpanColumn, SpanLine};
pub use value::Value;

mod data_type;
mod diagnostic;
mod error;
pub mod interface;
mod span;
mod value;

pub type Result<T> = std::result::Result<T, Error>;
