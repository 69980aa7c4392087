use crate::models::Booking;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotAvailability {
    pub available: bool,
    pub seats_left: u32,
}

/// Slots match on trimmed, case-insensitive text only; "Today" and "2025-06-16" are
/// different slots.
pub fn slot_key(s: &str) -> String {
    s.trim().to_lowercase()
}

pub fn check_table_availability(
    bookings: &[Booking],
    date: &str,
    time: &str,
    people: u32,
    total_seats: u32,
) -> SlotAvailability {
    let date = slot_key(date);
    let time = slot_key(time);

    let booked: u32 = bookings
        .iter()
        .filter(|b| slot_key(&b.date) == date && slot_key(&b.time) == time)
        .map(|b| b.people)
        .sum();

    let seats_left = total_seats.saturating_sub(booked);
    SlotAvailability {
        available: seats_left >= people,
        seats_left,
    }
}
