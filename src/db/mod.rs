pub mod json_store;
pub mod migrations;
pub mod queries;
pub mod sqlite;

use anyhow::Context;
use rusqlite::Connection;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::errors::AppError;

pub use json_store::JsonFileStore;
pub use sqlite::{SqliteRecordStore, SqliteSessionStore};

pub fn init_db(path: &str) -> anyhow::Result<Connection> {
    let conn = Connection::open(path).context("failed to open database")?;

    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")
        .context("failed to set database pragmas")?;

    migrations::run_migrations(&conn)?;

    Ok(conn)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Conversations,
    Bookings,
    CakeOrders,
    Reviews,
    MenuOrders,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Conversations => "conversations",
            Collection::Bookings => "bookings",
            Collection::CakeOrders => "cakes",
            Collection::Reviews => "reviews",
            Collection::MenuOrders => "menu_orders",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.json", self.as_str())
    }
}

/// Whole-collection storage: every load returns the full array and every save replaces it.
pub trait RecordStore: Send + Sync {
    fn load(&self, collection: Collection) -> Result<Vec<Value>, AppError>;
    fn save(&self, collection: Collection, records: &[Value]) -> Result<(), AppError>;
}

/// Loads and decodes a collection. Read failures yield an empty list; records that no
/// longer match the schema are skipped individually.
pub fn load_records<T: DeserializeOwned>(store: &dyn RecordStore, collection: Collection) -> Vec<T> {
    let values = match store.load(collection) {
        Ok(values) => values,
        Err(e) => {
            tracing::error!(error = %e, collection = collection.as_str(), "failed to load records");
            return vec![];
        }
    };

    values
        .into_iter()
        .filter_map(|value| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(error = %e, collection = collection.as_str(), "skipping unreadable record");
                None
            }
        })
        .collect()
}

/// Appends one record by rewriting the collection. Returns false (after logging) on any
/// failure; a collection that cannot be read is never overwritten.
pub fn append_record<T: Serialize>(store: &dyn RecordStore, collection: Collection, record: &T) -> bool {
    let result = (|| -> Result<(), AppError> {
        let mut values = store.load(collection)?;
        values.push(serde_json::to_value(record)?);
        store.save(collection, &values)
    })();

    match result {
        Ok(()) => true,
        Err(e) => {
            tracing::error!(error = %e, collection = collection.as_str(), "failed to append record");
            false
        }
    }
}
