// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

#![cfg_attr(not(debug_assertions), deny(warnings))]

use std::fmt::{Display, Formatter};
use std::ops::Deref;

pub use changes::TransactionalChanges;
pub use engine::TransactionEngine;
pub use memgres_core::Error;
pub use standard::{StandardCommandTransaction, StandardQueryTransaction};

mod changes;
mod engine;
pub mod standard;
pub mod test_utils;

pub type Result<T> = std::result::Result<T, Error>;

/// A unique identifier for a transaction using UUIDv7 for time-ordered
/// uniqueness
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct TransactionId(uuid::Uuid);

impl Default for TransactionId {
    fn default() -> Self {
        Self::generate()
    }
}

impl Deref for TransactionId {
    type Target = uuid::Uuid;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl TransactionId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::now_v7())
    }
}
