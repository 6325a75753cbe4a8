//! Schema migrations. Each step runs once and is recorded in the `log`
//! table as `migration_applied`, so reopening a database is cheap.

use rusqlite::{Connection, OptionalExtension, Result};
use tracing::info;

/// Ensure that the `log` table exists. It also stores migration markers,
/// so it is created before anything else.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

fn create_workouts_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS workouts (
            id          TEXT PRIMARY KEY,
            user_id     TEXT NOT NULL,
            title       TEXT NOT NULL,
            type        TEXT NOT NULL,
            duration    INTEGER NOT NULL CHECK(duration > 0),
            distance    REAL,
            calories    INTEGER NOT NULL DEFAULT 0 CHECK(calories >= 0),
            notes       TEXT,
            date        TEXT NOT NULL,
            completed   INTEGER NOT NULL DEFAULT 1,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_workouts_user_created ON workouts(user_id, created_at);
        "#,
    )?;
    Ok(())
}

fn create_goals_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS goals (
            id          TEXT PRIMARY KEY,
            user_id     TEXT NOT NULL,
            title       TEXT NOT NULL,
            target      REAL NOT NULL CHECK(target > 0),
            current     REAL NOT NULL DEFAULT 0,
            unit        TEXT NOT NULL,
            type        TEXT NOT NULL,
            deadline    TEXT,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_goals_user_created ON goals(user_id, created_at);
        "#,
    )?;
    Ok(())
}

/// Coordinates were added after the first schema; older files get the
/// two nullable columns.
fn add_location_columns(conn: &Connection) -> Result<()> {
    let mut stmt = conn.prepare("PRAGMA table_info('workouts')")?;
    let cols: Vec<String> = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<Result<_>>()?;

    if !cols.iter().any(|c| c == "latitude") {
        conn.execute_batch("ALTER TABLE workouts ADD COLUMN latitude REAL;")?;
    }
    if !cols.iter().any(|c| c == "longitude") {
        conn.execute_batch("ALTER TABLE workouts ADD COLUMN longitude REAL;")?;
    }
    Ok(())
}

type Step = fn(&Connection) -> Result<()>;

const MIGRATIONS: &[(&str, &str, Step)] = &[
    (
        "20240101_0001_create_workouts",
        "Created workouts table",
        create_workouts_table,
    ),
    (
        "20240101_0002_create_goals",
        "Created goals table",
        create_goals_table,
    ),
    (
        "20240301_0003_workout_location",
        "Added latitude/longitude to workouts",
        add_location_columns,
    ),
];

/// Public entry point: run all pending migrations.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    for (version, message, step) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }
        let tx = conn.unchecked_transaction()?;
        step(&tx)?;
        mark_applied(&tx, version, message)?;
        tx.commit()?;
        info!(version, "migration applied");
    }

    Ok(())
}
