// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

mod create;
mod get;

pub use create::SchemaToCreate;
