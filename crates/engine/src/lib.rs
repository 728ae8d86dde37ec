// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use execute::{execute_alter_table, AlterTableResult};
pub use memgres_core::Error;

mod execute;

pub type Result<T> = std::result::Result<T, Error>;
