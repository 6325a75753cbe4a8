use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::path::ensure_parent_dir;
use std::path::Path;
use tracing::debug;

/// Open (creating if needed) the database file and bring its schema up to date.
pub fn open_db(path: &str) -> AppResult<DbPool> {
    ensure_parent_dir(Path::new(path))?;
    let pool = DbPool::new(path)?;
    init_db(&pool.conn)?;
    debug!(path, "database ready");
    Ok(pool)
}

/// All schema creation and upgrades go through the migration engine.
pub fn init_db(conn: &rusqlite::Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    Ok(())
}
