use anyhow::Context;
use bookstore_app::Bookstore;
use bookstore_kernel::settings::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load bookstore settings")?;
    bookstore_telemetry::init(&settings.telemetry);

    tracing::info!(env = ?settings.environment, "bookstore bootstrap starting");

    let (bookstore, registry) = Bookstore::bootstrap(&settings).await?;

    tracing::info!(
        books = bookstore.catalog().lock().await.len(),
        users = bookstore.accounts().lock().await.len(),
        "bookstore bootstrap complete"
    );

    registry
        .stop_modules()
        .await
        .with_context(|| "failed to stop bookstore modules")?;
    Ok(())
}
