pub mod models;
pub mod service;
pub mod store;

use std::sync::Arc;

use async_trait::async_trait;
use bookstore_kernel::{InitCtx, Module};
use tokio::sync::Mutex;

use models::Book;
use service::CatalogService;

/// Catalog module: owns the shared catalog and lists configured books on init.
pub struct CatalogModule {
    catalog: Arc<Mutex<CatalogService>>,
}

impl CatalogModule {
    pub fn new() -> Self {
        Self {
            catalog: Arc::new(Mutex::new(CatalogService::new())),
        }
    }

    /// Handle to the catalog shared with callers.
    pub fn service(&self) -> Arc<Mutex<CatalogService>> {
        Arc::clone(&self.catalog)
    }
}

impl Default for CatalogModule {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Module for CatalogModule {
    fn name(&self) -> &'static str {
        "catalog"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let mut catalog = self.catalog.lock().await;

        for seed in &ctx.settings.catalog.books {
            let book = Book::from(seed.clone());
            if let Err(err) = catalog.try_add_book(book) {
                tracing::warn!(module = self.name(), error = %err, "skipping catalog seed");
            }
        }

        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            books = catalog.len(),
            "catalog module initialized"
        );
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        let catalog = self.catalog.lock().await;
        tracing::info!(
            module = self.name(),
            books = catalog.len(),
            "catalog module stopped"
        );
        Ok(())
    }
}

/// Create a new instance of the catalog module
pub fn create_module() -> CatalogModule {
    CatalogModule::new()
}
