use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{Duration, NaiveDateTime, Utc};
use rusqlite::Connection;
use serde_json::Value;

use super::queries::{self, SessionRow};
use super::{Collection, RecordStore};
use crate::errors::AppError;
use crate::models::{Flow, Session};
use crate::services::sessions::SessionStore;

fn lock(conn: &Mutex<Connection>) -> Result<MutexGuard<'_, Connection>, AppError> {
    conn.lock()
        .map_err(|_| AppError::Internal("database lock poisoned".to_string()))
}

/// Collections stored as JSON array text, one row per collection.
pub struct SqliteRecordStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteRecordStore {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }
}

impl RecordStore for SqliteRecordStore {
    fn load(&self, collection: Collection) -> Result<Vec<Value>, AppError> {
        let db = lock(&self.conn)?;
        match queries::load_collection(&db, collection.as_str())? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(vec![]),
        }
    }

    fn save(&self, collection: Collection, records: &[Value]) -> Result<(), AppError> {
        let raw = serde_json::to_string(records)?;
        let db = lock(&self.conn)?;
        queries::save_collection(&db, collection.as_str(), &raw)
    }
}

/// Sessions shared by every process pointed at the same database file.
pub struct SqliteSessionStore {
    conn: Arc<Mutex<Connection>>,
    timeout: Duration,
}

impl SqliteSessionStore {
    pub fn new(conn: Arc<Mutex<Connection>>, timeout_secs: i64) -> Self {
        Self {
            conn,
            timeout: Duration::seconds(timeout_secs),
        }
    }

    /// None when the row is stale or cannot be decoded.
    fn decode(&self, row: &SessionRow, now: NaiveDateTime) -> Option<Session> {
        let updated_at = queries::parse_timestamp(&row.updated_at)?;
        let flow: Flow = serde_json::from_str(&row.flow).ok()?;
        let session = Session::new(flow, updated_at);
        if session.is_expired(now, self.timeout) {
            return None;
        }
        Some(session)
    }
}

impl SessionStore for SqliteSessionStore {
    fn get(&self, sender: &str) -> Result<Option<Session>, AppError> {
        let db = lock(&self.conn)?;
        let Some(row) = queries::get_session_row(&db, sender)? else {
            return Ok(None);
        };

        let session = self.decode(&row, Utc::now().naive_utc());
        if session.is_none() {
            tracing::debug!(sender = %row.sender, "discarding stale or unreadable session");
            queries::delete_session(&db, sender)?;
        }
        Ok(session)
    }

    fn set(&self, sender: &str, session: &Session) -> Result<(), AppError> {
        let flow_json = serde_json::to_string(&session.flow)?;
        let db = lock(&self.conn)?;
        queries::upsert_session(&db, sender, &flow_json, &session.updated_at)
    }

    fn clear(&self, sender: &str) -> Result<(), AppError> {
        let db = lock(&self.conn)?;
        queries::delete_session(&db, sender)?;
        Ok(())
    }

    fn sweep(&self, now: NaiveDateTime) -> Result<usize, AppError> {
        let db = lock(&self.conn)?;
        let mut removed = 0;
        for row in queries::list_session_rows(&db)? {
            if self.decode(&row, now).is_none() && queries::delete_session(&db, &row.sender)? {
                removed += 1;
            }
        }
        Ok(removed)
    }
}
