// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

// #![cfg_attr(not(debug_assertions), deny(missing_docs))]
#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use memgres_core::Error;
pub use store::{CatalogStore, DEFAULT_SCHEMA};
pub use versioned::Versioned;

pub mod column;
pub mod constraint;
pub mod schema;
mod store;
pub mod table;
pub mod test_utils;
mod versioned;

pub type Result<T> = std::result::Result<T, Error>;

/// Catalog operations are associated functions scoped to a transaction; the
/// struct itself carries no state. Durable state lives in [`CatalogStore`].
pub struct Catalog {}
