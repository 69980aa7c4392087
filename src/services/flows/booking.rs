use super::{Action, Transition};
use crate::models::{BookingStep, Flow};
use crate::services::intent::{extract_count, MAX_PARTY};
use crate::services::replies;

pub fn start(total_seats: u32) -> Transition {
    Transition::Continue {
        flow: Flow::Booking(BookingStep::People),
        reply: replies::booking_start(total_seats),
    }
}

/// Party size is the only validated field. Date and time are kept verbatim and the
/// seat check happens when the action is resolved.
pub fn advance(step: &BookingStep, message: &str) -> Transition {
    let text = message.trim();
    match step {
        BookingStep::People => match extract_count(text).filter(|n| (1..=MAX_PARTY).contains(n)) {
            Some(people) => Transition::Continue {
                flow: Flow::Booking(BookingStep::Date { people }),
                reply: replies::booking_ask_date(people),
            },
            None => Transition::Continue {
                flow: Flow::Booking(BookingStep::People),
                reply: replies::booking_invalid_people(MAX_PARTY),
            },
        },
        BookingStep::Date { people } => Transition::Continue {
            flow: Flow::Booking(BookingStep::Time {
                people: *people,
                date: text.to_string(),
            }),
            reply: replies::booking_ask_time(),
        },
        BookingStep::Time { people, date } => Transition::Resolve(Action::Booking {
            people: *people,
            date: date.clone(),
            time: text.to_string(),
        }),
    }
}
