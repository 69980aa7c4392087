use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::new_record_id;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    #[serde(default = "new_record_id")]
    pub id: String,
    pub customer: String,
    pub review: String,
    /// Always within 1..=5 when present.
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(rename = "timestamp")]
    pub created_at: NaiveDateTime,
}
