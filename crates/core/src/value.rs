// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::DataType;

/// A constant value as it appears in the catalog, e.g. a column default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Undefined,
    Bool(bool),
    Int2(i16),
    Int4(i32),
    Int8(i64),
    Float8(f64),
    Utf8(String),
}

impl Value {
    pub fn data_type(&self) -> Option<DataType> {
        match self {
            Value::Undefined => None,
            Value::Bool(_) => Some(DataType::Bool),
            Value::Int2(_) => Some(DataType::Int2),
            Value::Int4(_) => Some(DataType::Int4),
            Value::Int8(_) => Some(DataType::Int8),
            Value::Float8(_) => Some(DataType::Float8),
            Value::Utf8(_) => Some(DataType::Utf8),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Bool(v) => Display::fmt(v, f),
            Value::Int2(v) => Display::fmt(v, f),
            Value::Int4(v) => Display::fmt(v, f),
            Value::Int8(v) => Display::fmt(v, f),
            Value::Float8(v) => Display::fmt(v, f),
            Value::Utf8(v) => Display::fmt(v, f),
        }
    }
}
