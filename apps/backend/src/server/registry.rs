use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use tracing::info;

use super::table_task::{spawn_table, TableHandle};
use crate::config::ServerConfig;
use crate::error::AppError;
use crate::services::{Table, TableConfig, TableId};

/// Live tables by id. Tables remove themselves when the last player leaves.
pub struct TableRegistry {
    tables: DashMap<TableId, TableHandle>,
    next_id: AtomicU64,
    config: ServerConfig,
}

impl TableRegistry {
    pub fn new(config: ServerConfig) -> Arc<Self> {
        Arc::new(Self {
            tables: DashMap::new(),
            next_id: AtomicU64::new(1),
            config,
        })
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub(crate) fn remove(&self, id: TableId) {
        self.tables.remove(&id);
    }

    /// Oldest table still accepting players, or a new one.
    pub fn open_table(self: &Arc<Self>) -> Result<TableHandle, AppError> {
        let open = self
            .tables
            .iter()
            .filter(|entry| entry.value().is_open())
            .min_by_key(|entry| *entry.key())
            .map(|entry| entry.value().clone());
        if let Some(handle) = open {
            return Ok(handle);
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let seed = match self.config.seed {
            Some(base) => base.wrapping_add(id),
            None => rand::random(),
        };
        let config = TableConfig::new(self.config.seats, seed)?;
        let handle = spawn_table(Table::new(id, config), Arc::clone(self));
        self.tables.insert(id, handle.clone());
        info!(table_id = id, seats = config.seats, "table created");
        Ok(handle)
    }
}
