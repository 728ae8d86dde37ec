// Copyright (c) memgres.dev 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::sync::Arc;

use memgres_catalog::CatalogStore;
use memgres_core::interface::Storage;

use crate::standard::{StandardCommandTransaction, StandardQueryTransaction};

/// Hands out transactions over one shared catalog and row store. Cheap to
/// clone; every clone begins transactions against the same state.
pub struct TransactionEngine<S: Storage> {
    store: Arc<CatalogStore>,
    storage: Arc<S>,
}

impl<S: Storage> TransactionEngine<S> {
    pub fn new(store: Arc<CatalogStore>, storage: Arc<S>) -> Self {
        Self { store, storage }
    }

    pub fn begin_command(&self) -> StandardCommandTransaction<S> {
        StandardCommandTransaction::new(self.store.clone(), self.storage.clone())
    }

    pub fn begin_query(&self) -> StandardQueryTransaction {
        StandardQueryTransaction::new(self.store.clone())
    }

    pub fn store(&self) -> &Arc<CatalogStore> {
        &self.store
    }

    pub fn storage(&self) -> &Arc<S> {
        &self.storage
    }
}

impl<S: Storage> Clone for TransactionEngine<S> {
    fn clone(&self) -> Self {
        Self { store: self.store.clone(), storage: self.storage.clone() }
    }
}
