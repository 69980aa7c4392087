use chrono::NaiveDateTime;

use crate::models::{new_record_id, Review};
use crate::services::intent::REVIEW_MARKER;

const RATING_MARKER: &str = "rating:";
const EMPTY_REVIEW: &str = "No comment";

/// Splits `review: <text> rating: <n>` into body and rating. Ratings outside 1..=5 or that
/// do not parse are dropped rather than clamped. Without a `review:` marker the whole
/// message is the body.
pub fn parse_review(message: &str) -> (String, Option<u8>) {
    // ASCII lowercasing keeps byte offsets identical, so indices map back onto `message`.
    let lower = message.to_ascii_lowercase();

    let Some(start) = lower.find(REVIEW_MARKER) else {
        return (non_empty(message.trim()), None);
    };

    let rest = &message[start + REVIEW_MARKER.len()..];
    let rest_lower = &lower[start + REVIEW_MARKER.len()..];

    match rest_lower.find(RATING_MARKER) {
        Some(r) => {
            let body = rest[..r].trim();
            let rating = rest[r + RATING_MARKER.len()..]
                .split_whitespace()
                .next()
                .and_then(|token| token.parse::<i64>().ok())
                .filter(|n| (1..=5).contains(n))
                .map(|n| n as u8);
            (non_empty(body), rating)
        }
        None => (non_empty(rest.trim()), None),
    }
}

pub fn build_review(customer: &str, message: &str, now: NaiveDateTime) -> Review {
    let (review, rating) = parse_review(message);
    Review {
        id: new_record_id(),
        customer: customer.to_string(),
        review,
        rating,
        created_at: now,
    }
}

fn non_empty(text: &str) -> String {
    if text.is_empty() {
        EMPTY_REVIEW.to_string()
    } else {
        text.to_string()
    }
}
