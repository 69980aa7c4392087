use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{Duration, NaiveDateTime, Utc};

use crate::errors::AppError;
use crate::models::Session;

/// Per-sender conversation state. `sweep` is called once per inbound message, before any
/// lookup, so an expired session never influences routing.
pub trait SessionStore: Send + Sync {
    fn get(&self, sender: &str) -> Result<Option<Session>, AppError>;
    fn set(&self, sender: &str, session: &Session) -> Result<(), AppError>;
    fn clear(&self, sender: &str) -> Result<(), AppError>;
    /// Drops every session older than the timeout; returns how many were removed.
    fn sweep(&self, now: NaiveDateTime) -> Result<usize, AppError>;
}

pub struct MemorySessionStore {
    sessions: Mutex<HashMap<String, Session>>,
    timeout: Duration,
}

impl MemorySessionStore {
    pub fn new(timeout_secs: i64) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            timeout: Duration::seconds(timeout_secs),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Session>>, AppError> {
        self.sessions
            .lock()
            .map_err(|_| AppError::Internal("session store lock poisoned".to_string()))
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, sender: &str) -> Result<Option<Session>, AppError> {
        let now = Utc::now().naive_utc();
        let mut sessions = self.lock()?;
        match sessions.get(sender) {
            Some(s) if s.is_expired(now, self.timeout) => {
                sessions.remove(sender);
                Ok(None)
            }
            Some(s) => Ok(Some(s.clone())),
            None => Ok(None),
        }
    }

    fn set(&self, sender: &str, session: &Session) -> Result<(), AppError> {
        self.lock()?.insert(sender.to_string(), session.clone());
        Ok(())
    }

    fn clear(&self, sender: &str) -> Result<(), AppError> {
        self.lock()?.remove(sender);
        Ok(())
    }

    fn sweep(&self, now: NaiveDateTime) -> Result<usize, AppError> {
        let mut sessions = self.lock()?;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired(now, self.timeout));
        Ok(before - sessions.len())
    }
}
