use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteConnection},
    Connection as SqlConnection,
};
use tokio::sync::Mutex;
use tracing::debug;

use crate::schema;

/// A thread safe connection to the database
pub type Connection = Arc<Mutex<SqliteConnection>>;

/// Open a connection to the database. The file is created
/// and the schema installed if needed.
pub async fn open(filename: &str) -> Result<Connection> {
    debug!(filename, "opening member database");
    let conn = SqliteConnectOptions::from_str(filename)?.create_if_missing(true);
    let conn = SqliteConnection::connect_with(&conn).await?;
    let conn = Arc::new(Mutex::new(conn));

    schema::install(&conn).await?;

    Ok(conn)
}

pub struct TestHandle {
    path: PathBuf,
}

impl Drop for TestHandle {
    fn drop(&mut self) {
        if self.path.exists() {
            let _ = fs::remove_file(&self.path);
        }
    }
}

/// Open a new test database connection.
/// The database will be created on each open and removed
/// when the handle is dropped.
pub async fn open_test() -> (TestHandle, Connection) {
    let path = std::env::temp_dir().join(format!("gym_test_{}.sqlite3", rand::random::<u64>()));
    let handle = TestHandle { path: path.clone() };

    let filename = path.to_string_lossy().to_string();
    let conn = open(&filename).await.unwrap();

    (handle, conn)
}
