use anyhow::Result;
use async_trait::async_trait;
use sqlx::{QueryBuilder, Sqlite};

use crate::{results::SlotValue, Connection};

/// A named piece of durable storage holding one text value.
/// Writing a slot replaces its whole value.
#[async_trait]
pub trait Slot {
    async fn read_slot(&self, key: &str) -> Result<Option<String>>;
    async fn write_slot(&self, key: &str, value: &str) -> Result<()>;
}

#[async_trait]
impl Slot for Connection {
    async fn read_slot(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.lock().await;
        let row: Option<SlotValue> =
            QueryBuilder::<Sqlite>::new("SELECT value FROM storage WHERE key = ")
                .push_bind(key)
                .build_query_as()
                .fetch_optional(&mut *conn)
                .await?;
        Ok(row.map(|r| r.value))
    }

    async fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        let mut conn = self.lock().await;
        let mut qry = QueryBuilder::<Sqlite>::new("INSERT INTO storage (key, value) VALUES (");
        qry.separated(", ").push_bind(key).push_bind(value);
        qry.push(") ON CONFLICT(key) DO UPDATE SET value = excluded.value")
            .build()
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}
