use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Audit trail entry: one inbound message and the reply it produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionLog {
    pub sender: String,
    pub message: String,
    pub reply: String,
    pub timestamp: NaiveDateTime,
}
