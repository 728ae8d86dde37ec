// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::interface::ColumnId;

#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Ord, Eq, Hash, Serialize, Deserialize)]
pub struct ConstraintId(pub u64);

impl Deref for ConstraintId {
    type Target = u64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq<u64> for ConstraintId {
    fn eq(&self, other: &u64) -> bool {
        self.0.eq(other)
    }
}

impl Display for ConstraintId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// What a constraint enforces is decided by the validation layer; the
/// catalog records the kind only to name and install the object.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConstraintKind {
    Check,
    Unique,
    PrimaryKey,
    ForeignKey,
    NotNull,
}

impl ConstraintKind {
    /// Postgres-style suffix used when synthesizing a constraint name.
    pub fn suffix(&self) -> &'static str {
        match self {
            ConstraintKind::Check => "check",
            ConstraintKind::Unique => "key",
            ConstraintKind::PrimaryKey => "pkey",
            ConstraintKind::ForeignKey => "fkey",
            ConstraintKind::NotNull => "not_null",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintDef {
    pub id: ConstraintId,
    pub name: String,
    pub kind: ConstraintKind,
    pub columns: Vec<ColumnId>,
}
