use anyhow::Result;
use pilltrack_core::{env_or_default, DEFAULT_PORT};
use pilltrack_http::{create_router, AppState};
use pilltrack_storage::PillStore;
use std::sync::Arc;

pub(crate) async fn run(port: Option<u16>, host: String) -> Result<()> {
    let store = PillStore::connect(&crate::database_url()?).await?;
    store.run_migrations().await?;

    let port = port.unwrap_or_else(|| env_or_default("PORT", DEFAULT_PORT));
    let state = Arc::new(AppState { store });
    let router = create_router(state);

    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
