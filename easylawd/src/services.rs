use std::sync::Arc;

use anyhow::{anyhow, Result};
use easylaw_es::SearchEngine;
use once_cell::sync::OnceCell;

/// Long-lived handles shared read-only by every request task.
#[derive(Clone)]
pub struct Services {
    engine: Arc<dyn SearchEngine>,
    max_per_page: u32,
}

impl Services {
    /// `max_per_page == 0` leaves `per_page` unbounded.
    pub fn new(engine: Arc<dyn SearchEngine>, max_per_page: u32) -> Self {
        Self { engine, max_per_page }
    }

    pub fn engine(&self) -> &dyn SearchEngine {
        &*self.engine
    }

    pub fn max_per_page(&self) -> u32 {
        self.max_per_page
    }
}

static SERVICES: OnceCell<Services> = OnceCell::new();

pub fn init(services: Services) -> Result<()> {
    SERVICES
        .set(services)
        .map_err(|_| anyhow!("services already initialized"))
}

pub fn services() -> Result<&'static Services> {
    SERVICES.get().ok_or_else(|| anyhow!("services not initialized"))
}
