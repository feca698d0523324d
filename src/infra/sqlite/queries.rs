use std::path::Path;

use anyhow::{anyhow, Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use crate::domain::entities::record::{
    format_work_date, parse_work_date, NewPieceRecord, PieceRecord, RecordId,
};
use crate::domain::entities::user::{User, UserId, WorkshopSettings};
use crate::infra::sqlite::schema::open_connection;

const USER_SELECT: &str = "
    SELECT u.id, u.username, w.user_id, w.piece_unit, w.business_label
    FROM app_user u
    LEFT JOIN workshop_setting w ON w.user_id = u.id";

fn user_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
    let has_workshop: Option<i64> = row.get(2)?;
    let workshop = match has_workshop {
        Some(_) => Some(WorkshopSettings {
            piece_unit: row.get(3)?,
            business_label: row.get(4)?,
        }),
        None => None,
    };
    Ok(User {
        id: UserId(row.get(0)?),
        username: row.get(1)?,
        workshop,
    })
}

fn query_user_by_id(conn: &Connection, user_id: i64) -> Result<Option<User>> {
    conn.query_row(
        &format!("{USER_SELECT} WHERE u.id = ?1"),
        [user_id],
        user_from_row,
    )
    .optional()
    .context("failed to query user")
}

pub fn load_user(db_path: &Path, user_id: i64) -> Result<Option<User>> {
    let conn = open_connection(db_path)?;
    query_user_by_id(&conn, user_id)
}

pub fn find_or_create_user(db_path: &Path, username: &str) -> Result<User> {
    let conn = open_connection(db_path)?;

    let existing = conn
        .query_row(
            &format!("{USER_SELECT} WHERE u.username = ?1"),
            [username],
            user_from_row,
        )
        .optional()
        .context("failed to query user by name")?;
    if let Some(user) = existing {
        return Ok(user);
    }

    conn.execute("INSERT INTO app_user(username) VALUES (?1)", [username])
        .context("failed to insert user")?;
    let user_id = conn.last_insert_rowid();

    query_user_by_id(&conn, user_id)?
        .ok_or_else(|| anyhow!("user {user_id} missing after insert"))
}

pub fn upsert_workshop_settings(
    db_path: &Path,
    user_id: i64,
    settings: &WorkshopSettings,
) -> Result<()> {
    let conn = open_connection(db_path)?;
    conn.execute(
        "INSERT INTO workshop_setting(user_id, piece_unit, business_label)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(user_id) DO UPDATE SET
            piece_unit = excluded.piece_unit,
            business_label = excluded.business_label",
        params![user_id, settings.piece_unit, settings.business_label],
    )
    .context("failed to upsert workshop settings")?;
    Ok(())
}

pub fn load_session_user_id(db_path: &Path) -> Result<Option<i64>> {
    let conn = open_connection(db_path)?;
    conn.query_row("SELECT user_id FROM session WHERE id = 1", [], |row| {
        row.get(0)
    })
    .optional()
    .context("failed to query session")
}

pub fn save_session(db_path: &Path, user_id: i64) -> Result<()> {
    let conn = open_connection(db_path)?;
    conn.execute(
        "INSERT INTO session(id, user_id) VALUES (1, ?1)
         ON CONFLICT(id) DO UPDATE SET
            user_id = excluded.user_id,
            signed_in_at = CURRENT_TIMESTAMP",
        [user_id],
    )
    .context("failed to save session")?;
    Ok(())
}

pub fn clear_session(db_path: &Path) -> Result<()> {
    let conn = open_connection(db_path)?;
    conn.execute("DELETE FROM session", [])
        .context("failed to clear session")?;
    Ok(())
}

pub fn list_records(db_path: &Path, user_id: i64) -> Result<Vec<PieceRecord>> {
    let conn = open_connection(db_path)?;
    let mut stmt = conn
        .prepare(
            "SELECT id, work_date, product, quantity, note
             FROM piece_record
             WHERE user_id = ?1
             ORDER BY work_date DESC, id DESC",
        )
        .context("failed to prepare record query")?;

    let raw_rows = stmt
        .query_map([user_id], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, i64>(3)?,
                row.get::<_, String>(4)?,
            ))
        })
        .context("failed to query records")?;

    let mut records = Vec::new();
    for raw in raw_rows {
        let (id, work_date, product, quantity, note) =
            raw.context("failed to read record row")?;
        let work_date = parse_work_date(&work_date)
            .ok_or_else(|| anyhow!("record {id} has invalid work_date: {work_date}"))?;
        records.push(PieceRecord {
            id: RecordId(id),
            user_id: UserId(user_id),
            work_date,
            product,
            quantity,
            note,
        });
    }

    Ok(records)
}

pub fn insert_records(
    db_path: &Path,
    user_id: i64,
    records: &[NewPieceRecord],
) -> Result<Vec<i64>> {
    let mut conn = open_connection(db_path)?;
    let tx = conn.transaction().context("failed to start transaction")?;

    let mut ids = Vec::with_capacity(records.len());
    {
        let mut insert_record = tx
            .prepare(
                "INSERT INTO piece_record(user_id, work_date, product, quantity, note)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )
            .context("failed to prepare record insert")?;

        for record in records {
            insert_record
                .execute(params![
                    user_id,
                    format_work_date(record.work_date),
                    record.product.trim(),
                    record.quantity,
                    record.note.trim(),
                ])
                .context("failed to insert record")?;
            ids.push(tx.last_insert_rowid());
        }
    }

    tx.commit().context("failed to commit record insert")?;
    Ok(ids)
}
