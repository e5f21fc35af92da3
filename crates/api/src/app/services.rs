use std::sync::Arc;

use categorydesk_infra::RecordStore;

use crate::config::AppConfig;

/// Shared handles injected into every handler.
#[derive(Debug, Clone)]
pub struct AppServices {
    pub store: Arc<RecordStore>,
    pub max_page_size: u32,
}

impl AppServices {
    pub fn new(store: Arc<RecordStore>, max_page_size: u32) -> Self {
        Self {
            store,
            max_page_size,
        }
    }
}

pub fn build_services(config: &AppConfig) -> AppServices {
    let store = if config.seed_data {
        RecordStore::seeded()
    } else {
        tracing::info!("starting with an empty record store");
        RecordStore::new()
    };
    AppServices::new(Arc::new(store), config.max_page_size)
}
