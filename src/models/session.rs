use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Where a booking conversation currently stands, carrying everything collected so far.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum BookingStep {
    People,
    Date { people: u32 },
    Time { people: u32, date: String },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum CakeStep {
    Flavour,
    Message {
        flavour: String,
    },
    Date {
        flavour: String,
        message: Option<String>,
    },
    Time {
        flavour: String,
        message: Option<String>,
        date: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "flow", content = "fields", rename_all = "snake_case")]
pub enum Flow {
    Booking(BookingStep),
    Cake(CakeStep),
    Menu { category: Option<String> },
    Review,
    ConfirmBooking { people: u32 },
}

impl Flow {
    pub fn as_str(&self) -> &'static str {
        match self {
            Flow::Booking(_) => "booking",
            Flow::Cake(_) => "cake",
            Flow::Menu { .. } => "menu",
            Flow::Review => "review",
            Flow::ConfirmBooking { .. } => "confirm_booking",
        }
    }

    pub fn step(&self) -> u8 {
        match self {
            Flow::Booking(BookingStep::People) => 1,
            Flow::Booking(BookingStep::Date { .. }) => 2,
            Flow::Booking(BookingStep::Time { .. }) => 3,
            Flow::Cake(CakeStep::Flavour) => 1,
            Flow::Cake(CakeStep::Message { .. }) => 2,
            Flow::Cake(CakeStep::Date { .. }) => 3,
            Flow::Cake(CakeStep::Time { .. }) => 4,
            Flow::Menu { category: None } => 1,
            Flow::Menu { category: Some(_) } => 2,
            Flow::Review | Flow::ConfirmBooking { .. } => 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub flow: Flow,
    pub updated_at: NaiveDateTime,
}

impl Session {
    pub fn new(flow: Flow, now: NaiveDateTime) -> Self {
        Self {
            flow,
            updated_at: now,
        }
    }

    pub fn is_expired(&self, now: NaiveDateTime, timeout: Duration) -> bool {
        now - self.updated_at > timeout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_flow_serializes_with_fields() {
        let flow = Flow::Booking(BookingStep::Time {
            people: 4,
            date: "today".to_string(),
        });
        let json = serde_json::to_value(&flow).unwrap();
        assert_eq!(json["flow"], "booking");
        assert_eq!(json["fields"]["time"]["people"], 4);

        let back: Flow = serde_json::from_value(json).unwrap();
        assert_eq!(back, flow);
    }

    #[test]
    fn test_expiry_boundary() {
        let session = Session::new(Flow::Review, dt("2025-06-16 10:00:00"));
        let timeout = Duration::seconds(300);
        assert!(!session.is_expired(dt("2025-06-16 10:05:00"), timeout));
        assert!(session.is_expired(dt("2025-06-16 10:05:01"), timeout));
    }

    #[test]
    fn test_step_numbers() {
        assert_eq!(Flow::Cake(CakeStep::Flavour).step(), 1);
        assert_eq!(
            Flow::Cake(CakeStep::Time {
                flavour: "Chocolate".to_string(),
                message: None,
                date: "Friday".to_string(),
            })
            .step(),
            4
        );
        assert_eq!(Flow::ConfirmBooking { people: 8 }.as_str(), "confirm_booking");
    }
}
