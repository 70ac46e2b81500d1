use anyhow::Result;
use sqlx::Executor;
use tracing::debug;

use crate::Connection;

/// Install the database schema.
pub async fn install(conn: &Connection) -> Result<()> {
    let mut conn = conn.lock().await;
    let schema_data = include_str!("../db/schema.sql");
    debug!("installing database schema");
    (&mut *conn).execute(schema_data).await?;
    Ok(())
}
