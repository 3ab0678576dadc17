use std::sync::Arc;

use anyhow::{anyhow, Context};
use bookstore_kernel::{settings::Settings, InitCtx, ModuleRegistry};
use tokio::sync::Mutex;

use crate::modules::{
    self,
    accounts::{models::User, service::AccountService},
    catalog::{models::Book, service::CatalogService},
};

/// Shared handle over the catalog and the accounts.
///
/// Each collection sits behind its own mutex. Operations that need both lock
/// accounts before the catalog.
#[derive(Clone)]
pub struct Bookstore {
    catalog: Arc<Mutex<CatalogService>>,
    accounts: Arc<Mutex<AccountService>>,
}

impl Bookstore {
    pub fn new(
        catalog: Arc<Mutex<CatalogService>>,
        accounts: Arc<Mutex<AccountService>>,
    ) -> Self {
        Self { catalog, accounts }
    }

    /// Register, initialize and start every module from `settings`.
    pub async fn bootstrap(settings: &Settings) -> anyhow::Result<(Self, ModuleRegistry)> {
        let mut registry = ModuleRegistry::new();
        let bookstore = modules::register_all(&mut registry);
        let ctx = InitCtx { settings };

        registry
            .init_modules(&ctx)
            .await
            .context("failed to initialize bookstore modules")?;
        registry
            .start_modules(&ctx)
            .await
            .context("failed to start bookstore modules")?;

        Ok((bookstore, registry))
    }

    pub fn catalog(&self) -> &Arc<Mutex<CatalogService>> {
        &self.catalog
    }

    pub fn accounts(&self) -> &Arc<Mutex<AccountService>> {
        &self.accounts
    }

    /// Logs in and buys the listed book titled `title`; returns the remaining balance.
    pub async fn purchase(
        &self,
        username: &str,
        password: &str,
        title: &str,
    ) -> anyhow::Result<f64> {
        let mut accounts = self.accounts.lock().await;
        accounts
            .try_login_user(username, password)
            .with_context(|| format!("cannot purchase '{title}'"))?;

        let catalog = self.catalog.lock().await;
        let book = catalog
            .find_by_title(title)
            .cloned()
            .ok_or_else(|| anyhow!("no book titled '{title}' is listed"))?;

        let user = accounts
            .user_mut(username)
            .ok_or_else(|| anyhow!("account '{username}' disappeared"))?;
        catalog
            .try_purchase_book(user, &book)
            .with_context(|| format!("cannot purchase '{title}'"))?;

        Ok(user.balance)
    }

    /// Logs in and reviews a purchased book titled `title`.
    ///
    /// A book that has since been delisted is reviewed through the user's own copy.
    pub async fn review(
        &self,
        username: &str,
        password: &str,
        title: &str,
        text: &str,
    ) -> anyhow::Result<Book> {
        let accounts = self.accounts.lock().await;
        let user = accounts
            .try_login_user(username, password)
            .with_context(|| format!("cannot review '{title}'"))?;

        let mut catalog = self.catalog.lock().await;
        let mut book = catalog
            .find_by_title(title)
            .or_else(|| user.purchased_books.iter().find(|book| book.title == title))
            .cloned()
            .ok_or_else(|| anyhow!("no book titled '{title}' is listed or owned"))?;

        catalog
            .try_add_book_review(user, &mut book, text)
            .with_context(|| format!("cannot review '{title}'"))?;

        Ok(book)
    }

    /// Logs in and rewrites the account's credentials.
    pub async fn update_profile(
        &self,
        username: &str,
        password: &str,
        new_username: &str,
        new_password: &str,
        new_email: &str,
    ) -> anyhow::Result<User> {
        let mut accounts = self.accounts.lock().await;
        let mut user = accounts
            .try_login_user(username, password)
            .cloned()
            .context("cannot update profile")?;

        accounts
            .try_update_user_profile(&mut user, new_username, new_password, new_email)
            .context("cannot update profile")?;

        Ok(user)
    }
}
