// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::interface::TableId;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EncodedKey(pub Vec<u8>);

impl Deref for EncodedKey {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl From<&[u8]> for EncodedKey {
    fn from(value: &[u8]) -> Self {
        Self(value.to_vec())
    }
}

impl From<Vec<u8>> for EncodedKey {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedRow(pub Vec<u8>);

impl Deref for EncodedRow {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl From<&[u8]> for EncodedRow {
    fn from(value: &[u8]) -> Self {
        Self(value.to_vec())
    }
}

impl From<Vec<u8>> for EncodedRow {
    fn from(value: Vec<u8>) -> Self {
        Self(value)
    }
}

/// A pending row edit recorded against a transaction scope. Unlike catalog
/// changes, deltas stay revocable until their scope reaches durable state.
#[derive(Debug, Clone, PartialEq)]
pub enum Delta {
    Set { table: TableId, key: EncodedKey, row: EncodedRow },
    Remove { table: TableId, key: EncodedKey },
}

impl Delta {
    pub fn table(&self) -> TableId {
        match self {
            Self::Set { table, .. } | Self::Remove { table, .. } => *table,
        }
    }

    pub fn key(&self) -> &EncodedKey {
        match self {
            Self::Set { key, .. } | Self::Remove { key, .. } => key,
        }
    }

    /// Returns the row; `None` marks a removal.
    pub fn row(&self) -> Option<&EncodedRow> {
        match self {
            Self::Set { row, .. } => Some(row),
            Self::Remove { .. } => None,
        }
    }
}
