use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::Connection;

pub fn open_connection(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)
        .with_context(|| format!("failed to open db: {}", db_path.display()))?;
    conn.execute("PRAGMA foreign_keys = ON", [])
        .context("failed to enable foreign key enforcement")?;
    Ok(conn)
}

pub fn init_db(db_path: &Path) -> Result<()> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create parent dir: {}", parent.display()))?;
    }

    let conn = open_connection(db_path)?;

    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS app_user (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            username    TEXT NOT NULL UNIQUE,
            created_at  TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        );

        CREATE TABLE IF NOT EXISTS workshop_setting (
            user_id         INTEGER PRIMARY KEY,
            piece_unit      TEXT,
            business_label  TEXT,
            FOREIGN KEY (user_id) REFERENCES app_user(id)
        );

        CREATE TABLE IF NOT EXISTS session (
            id          INTEGER PRIMARY KEY CHECK (id = 1),
            user_id     INTEGER NOT NULL,
            signed_in_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            FOREIGN KEY (user_id) REFERENCES app_user(id)
        );

        CREATE TABLE IF NOT EXISTS piece_record (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id     INTEGER NOT NULL,
            work_date   TEXT NOT NULL,
            product     TEXT NOT NULL,
            quantity    INTEGER NOT NULL,
            note        TEXT NOT NULL DEFAULT '',
            FOREIGN KEY (user_id) REFERENCES app_user(id)
        );

        CREATE INDEX IF NOT EXISTS idx_piece_record_user_date
            ON piece_record(user_id, work_date);
        ",
    )
    .context("failed to initialize schema")?;

    Ok(())
}
