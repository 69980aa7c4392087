use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::new_record_id;

/// A confirmed table booking. `date` and `time` are kept exactly as the customer typed them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    #[serde(default = "new_record_id")]
    pub id: String,
    pub customer: String,
    pub people: u32,
    pub date: String,
    pub time: String,
    #[serde(rename = "timestamp")]
    pub created_at: NaiveDateTime,
}

impl Booking {
    pub fn new(customer: &str, people: u32, date: &str, time: &str, now: NaiveDateTime) -> Self {
        Self {
            id: new_record_id(),
            customer: customer.to_string(),
            people,
            date: date.to_string(),
            time: time.to_string(),
            created_at: now,
        }
    }
}
