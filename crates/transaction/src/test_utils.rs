// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

//! Helpers shared by downstream crates' tests.

use std::sync::Arc;

use memgres_catalog::CatalogStore;
use memgres_storage::Memory;

use crate::standard::StandardCommandTransaction;
use crate::TransactionEngine;

pub fn create_test_transaction_engine() -> TransactionEngine<Memory> {
    TransactionEngine::new(Arc::new(CatalogStore::new()), Arc::new(Memory::new()))
}

pub fn create_test_command_transaction() -> StandardCommandTransaction<Memory> {
    create_test_transaction_engine().begin_command()
}
