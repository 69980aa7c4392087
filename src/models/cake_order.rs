use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::new_record_id;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CakeOrder {
    #[serde(default = "new_record_id")]
    pub id: String,
    pub customer: String,
    pub flavour: String,
    #[serde(default)]
    pub message: Option<String>,
    pub date: String,
    pub time: String,
    #[serde(rename = "timestamp")]
    pub created_at: NaiveDateTime,
}
