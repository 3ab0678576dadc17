pub mod models;
pub mod service;
pub mod store;

use std::sync::Arc;

use async_trait::async_trait;
use bookstore_kernel::{InitCtx, Module};
use tokio::sync::Mutex;

use crate::modules::catalog::service::CatalogService;
use models::User;
use service::AccountService;

/// Accounts module: owns the shared account registry and registers configured users on init.
///
/// Seeded purchase titles are resolved against the catalog, so the catalog
/// module must be initialized first.
pub struct AccountsModule {
    accounts: Arc<Mutex<AccountService>>,
    catalog: Arc<Mutex<CatalogService>>,
}

impl AccountsModule {
    pub fn new(catalog: Arc<Mutex<CatalogService>>) -> Self {
        Self {
            accounts: Arc::new(Mutex::new(AccountService::new())),
            catalog,
        }
    }

    pub fn service(&self) -> Arc<Mutex<AccountService>> {
        Arc::clone(&self.accounts)
    }
}

#[async_trait]
impl Module for AccountsModule {
    fn name(&self) -> &'static str {
        "accounts"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        let mut accounts = self.accounts.lock().await;
        let catalog = self.catalog.lock().await;

        for seed in &ctx.settings.accounts.users {
            let mut user = User::from(seed.clone());
            for title in &seed.purchased {
                match catalog.find_by_title(title) {
                    Some(book) => user.purchased_books.push(book.clone()),
                    None => tracing::warn!(
                        module = self.name(),
                        username = %user.username,
                        title = %title,
                        "skipping seeded purchase of unlisted book"
                    ),
                }
            }

            if let Err(err) = accounts.try_register_user(user) {
                tracing::warn!(module = self.name(), error = %err, "skipping account seed");
            }
        }

        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            users = accounts.len(),
            "accounts module initialized"
        );
        Ok(())
    }

    async fn stop(&self) -> anyhow::Result<()> {
        let accounts = self.accounts.lock().await;
        tracing::info!(
            module = self.name(),
            users = accounts.len(),
            "accounts module stopped"
        );
        Ok(())
    }
}

/// Create a new instance of the accounts module
pub fn create_module(catalog: Arc<Mutex<CatalogService>>) -> AccountsModule {
    AccountsModule::new(catalog)
}
