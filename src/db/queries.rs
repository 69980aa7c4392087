use chrono::{NaiveDateTime, Utc};
use rusqlite::{params, Connection};

use crate::errors::AppError;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ── Collections ──

pub fn load_collection(conn: &Connection, name: &str) -> Result<Option<String>, AppError> {
    let result = conn.query_row(
        "SELECT records FROM collections WHERE name = ?1",
        params![name],
        |row| row.get::<_, String>(0),
    );

    match result {
        Ok(records) => Ok(Some(records)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn save_collection(conn: &Connection, name: &str, records_json: &str) -> Result<(), AppError> {
    let now = Utc::now().naive_utc().format(TIMESTAMP_FORMAT).to_string();
    conn.execute(
        "INSERT INTO collections (name, records, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(name) DO UPDATE SET
           records = excluded.records,
           updated_at = excluded.updated_at",
        params![name, records_json, now],
    )?;
    Ok(())
}

// ── Sessions ──

pub struct SessionRow {
    pub sender: String,
    pub flow: String,
    pub updated_at: String,
}

pub fn get_session_row(conn: &Connection, sender: &str) -> Result<Option<SessionRow>, AppError> {
    let result = conn.query_row(
        "SELECT sender, flow, updated_at FROM sessions WHERE sender = ?1",
        params![sender],
        |row| {
            Ok(SessionRow {
                sender: row.get(0)?,
                flow: row.get(1)?,
                updated_at: row.get(2)?,
            })
        },
    );

    match result {
        Ok(row) => Ok(Some(row)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

pub fn list_session_rows(conn: &Connection) -> Result<Vec<SessionRow>, AppError> {
    let mut stmt = conn.prepare("SELECT sender, flow, updated_at FROM sessions")?;
    let rows = stmt.query_map([], |row| {
        Ok(SessionRow {
            sender: row.get(0)?,
            flow: row.get(1)?,
            updated_at: row.get(2)?,
        })
    })?;

    let mut sessions = vec![];
    for row in rows {
        sessions.push(row?);
    }
    Ok(sessions)
}

pub fn upsert_session(
    conn: &Connection,
    sender: &str,
    flow_json: &str,
    updated_at: &NaiveDateTime,
) -> Result<(), AppError> {
    conn.execute(
        "INSERT INTO sessions (sender, flow, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(sender) DO UPDATE SET
           flow = excluded.flow,
           updated_at = excluded.updated_at",
        params![sender, flow_json, updated_at.format(TIMESTAMP_FORMAT).to_string()],
    )?;
    Ok(())
}

pub fn delete_session(conn: &Connection, sender: &str) -> Result<bool, AppError> {
    let count = conn.execute("DELETE FROM sessions WHERE sender = ?1", params![sender])?;
    Ok(count > 0)
}

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).ok()
}
