//! SQLite connection wrapper (one connection is plenty for a CLI).

use rusqlite::{Connection, Result};
use std::path::Path;
use std::time::Duration;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        Self::configure(Connection::open(Path::new(path))?)
    }

    /// Private in-memory database for tests.
    pub fn in_memory() -> Result<Self> {
        Self::configure(Connection::open_in_memory()?)
    }

    fn configure(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        // A second fitlog process may hold the write lock briefly.
        conn.busy_timeout(Duration::from_secs(5))?;
        Ok(Self { conn })
    }
}
