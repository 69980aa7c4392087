use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use serde_json::Value;

use super::{Collection, RecordStore};
use crate::errors::AppError;

/// One pretty-printed JSON array per collection under a data directory.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create data directory: {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn path(&self, collection: Collection) -> PathBuf {
        self.dir.join(collection.file_name())
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self, collection: Collection) -> Result<Vec<Value>, AppError> {
        let path = self.path(collection);
        if !path.exists() {
            return Ok(vec![]);
        }

        let raw = fs::read_to_string(&path)?;
        if raw.trim().is_empty() {
            return Ok(vec![]);
        }

        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, collection: Collection, records: &[Value]) -> Result<(), AppError> {
        let path = self.path(collection);
        let tmp = path.with_extension("json.tmp");

        let body = serde_json::to_string_pretty(records)?;
        fs::write(&tmp, body)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}
