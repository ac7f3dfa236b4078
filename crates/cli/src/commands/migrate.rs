//! Standalone schema setup: connect, run migrations, exit.
//!
//! `serve` also migrates on boot; this exists for provisioning a database
//! without starting the server.

use anyhow::Result;
use pilltrack_storage::PillStore;

pub(crate) async fn run() -> Result<()> {
    let store = PillStore::connect(&crate::database_url()?).await?;
    store.run_migrations().await?;
    println!("Migrations complete");
    Ok(())
}
