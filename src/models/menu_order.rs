use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::new_record_id;

/// Only written when `PERSIST_MENU_ORDERS` is enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuOrder {
    #[serde(default = "new_record_id")]
    pub id: String,
    pub customer: String,
    pub item: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(rename = "timestamp")]
    pub created_at: NaiveDateTime,
}
