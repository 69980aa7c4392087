use chrono::{NaiveDate, NaiveDateTime};

use crate::models::{Booking, CakeOrder, Review, ReviewScope};
use crate::services::replies::rating_suffix;

fn count_on(timestamps: impl Iterator<Item = NaiveDateTime>, day: NaiveDate) -> usize {
    timestamps.filter(|ts| ts.date() == day).count()
}

pub fn generate_report(
    bookings: &[Booking],
    cakes: &[CakeOrder],
    reviews: &[Review],
    today: NaiveDate,
) -> String {
    let bookings_today = count_on(bookings.iter().map(|b| b.created_at), today);
    let cakes_today = count_on(cakes.iter().map(|c| c.created_at), today);
    let reviews_today = count_on(reviews.iter().map(|r| r.created_at), today);

    format!(
        "📊 Daily Report - {}\n\n\
         🪑 Bookings Today: {bookings_today}\n\
         🎂 Cake Orders Today: {cakes_today}\n\
         ⭐ Reviews Today: {reviews_today}\n\n\
         📈 Total Stats:\n\
         🪑 Total Bookings: {}\n\
         🎂 Total Cake Orders: {}\n\
         ⭐ Total Reviews: {}",
        today.format("%d %B %Y"),
        bookings.len(),
        cakes.len(),
        reviews.len(),
    )
}

pub fn format_reviews(reviews: &[Review], scope: ReviewScope, today: NaiveDate) -> String {
    if reviews.is_empty() {
        return "📭 No reviews yet.".to_string();
    }

    let selected: Vec<&Review> = match scope {
        ReviewScope::All => reviews.iter().collect(),
        ReviewScope::Today => reviews
            .iter()
            .filter(|r| r.created_at.date() == today)
            .collect(),
    };

    if selected.is_empty() {
        return "📭 No reviews today.".to_string();
    }

    let lines = selected
        .iter()
        .map(|r| {
            format!(
                "- \"{}\"{} – {}",
                r.review,
                rating_suffix(r.rating),
                mask_customer(&r.customer)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let title = match scope {
        ReviewScope::All => "📢 All Reviews:",
        ReviewScope::Today => "📢 Reviews Today:",
    };
    format!("{title}\n\n{lines}")
}

/// Keeps only the last four characters of a customer identifier.
pub fn mask_customer(customer: &str) -> String {
    if customer.is_empty() {
        return "Unknown".to_string();
    }
    let chars: Vec<char> = customer.chars().collect();
    chars[chars.len().saturating_sub(4)..].iter().collect()
}
