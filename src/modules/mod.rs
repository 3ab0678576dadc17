pub mod accounts;
pub mod catalog;

use std::sync::Arc;

use bookstore_kernel::ModuleRegistry;

use crate::bookstore::Bookstore;

/// Register all bookstore modules with the registry and hand back the shared services
pub fn register_all(registry: &mut ModuleRegistry) -> Bookstore {
    let catalog = catalog::create_module();
    let accounts = accounts::create_module(catalog.service());
    let bookstore = Bookstore::new(catalog.service(), accounts.service());

    registry.register(Arc::new(catalog));
    registry.register(Arc::new(accounts));

    bookstore
}
