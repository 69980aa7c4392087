use crate::models::{Catalog, Intent, ReviewScope};

const GREETINGS: &[&str] = &["hi", "hello", "hey", "start", "menu"];
const VIEW_MENU: &[&str] = &["1", "view menu"];
const START_CAKE: &[&str] = &["2", "cake", "cakes", "cake order", "order cake"];
const START_BOOKING: &[&str] = &["3", "book", "reservation", "table", "book table"];
const HOURS: &[&str] = &["4", "hours", "timing", "time", "open", "opening hours"];
const LOCATION: &[&str] = &["5", "location", "address", "where"];
const REVIEW_PROMPT: &[&str] = &["6", "review", "feedback"];
const CANCEL: &[&str] = &["cancel", "reset", "stop", "exit"];

pub const REVIEW_MARKER: &str = "review:";

const SENTIMENT_WORDS: &[&str] = &[
    "great", "excellent", "amazing", "awesome", "delicious", "loved", "fantastic", "wonderful",
    "tasty", "yummy", "superb", "terrible", "awful", "horrible", "worst", "disappointed",
    "disappointing", "rude", "bland",
];

const PARTY_WORDS: &[&str] = &["people", "persons", "person", "pax", "guests", "guest"];
const TIME_MARKERS: &[&str] = &["am", "pm", "a.m", "p.m"];

pub const MAX_PARTY: u32 = 50;

pub fn normalize(message: &str) -> String {
    message.trim().to_lowercase()
}

/// Decides the top-level route for a message. Checks run in a fixed order and the first
/// match wins:
///
/// 1. owner report/reviews commands (owner only)
/// 2. greeting / root menu
/// 3. numbered or named commands
/// 4. a bare menu category name
/// 5. a free-standing party size (offers a booking)
/// 6. review marker or sentiment words
/// 7. cancellation keywords
/// 8. fallback
pub fn classify(normalized: &str, is_owner: bool, catalog: &Catalog) -> Intent {
    if is_owner {
        if let Some(intent) = owner_command(normalized) {
            return intent;
        }
    }

    if GREETINGS.contains(&normalized) {
        return Intent::MainMenu;
    }

    if let Some(intent) = named_command(normalized) {
        return intent;
    }

    if let Some(category) = bare_category(normalized, catalog) {
        return Intent::Category(category);
    }

    if let Some(people) = free_standing_count(normalized) {
        return Intent::OfferBooking { people };
    }

    if is_review_text(normalized) {
        return Intent::SaveReview;
    }

    if is_cancel(normalized) {
        return Intent::Cancel;
    }

    Intent::Fallback
}

pub fn owner_command(normalized: &str) -> Option<Intent> {
    if normalized.starts_with("report") {
        return Some(Intent::OwnerReport);
    }
    if normalized.starts_with("reviews") {
        let scope = if normalized.contains("today") {
            ReviewScope::Today
        } else {
            ReviewScope::All
        };
        return Some(Intent::OwnerReviews(scope));
    }
    None
}

fn named_command(normalized: &str) -> Option<Intent> {
    let table: [(&[&str], Intent); 6] = [
        (VIEW_MENU, Intent::ViewMenu),
        (START_CAKE, Intent::StartCake),
        (START_BOOKING, Intent::StartBooking),
        (HOURS, Intent::Hours),
        (LOCATION, Intent::Location),
        (REVIEW_PROMPT, Intent::ReviewPrompt),
    ];
    table
        .into_iter()
        .find(|(words, _)| words.contains(&normalized))
        .map(|(_, intent)| intent)
}

/// "coffee" or "coffee menu" selects a category; longer sentences do not.
fn bare_category(normalized: &str, catalog: &Catalog) -> Option<String> {
    let name = normalized.strip_suffix(" menu").unwrap_or(normalized).trim();
    catalog.category(name).map(|c| c.name.clone())
}

/// A message that is only a head count ("8", "8 people"). Anything carrying a time marker
/// is left alone so "7 pm" never turns into a party of seven.
pub fn free_standing_count(normalized: &str) -> Option<u32> {
    if normalized.contains(':') || has_time_marker(normalized) {
        return None;
    }

    let mut tokens = normalized.split_whitespace();
    let first = tokens.next()?;
    if !first.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if !tokens.all(|t| PARTY_WORDS.contains(&t)) {
        return None;
    }

    let people: u32 = first.parse().ok()?;
    (1..=MAX_PARTY).contains(&people).then_some(people)
}

fn has_time_marker(normalized: &str) -> bool {
    normalized.split_whitespace().any(|token| {
        let letters = token.trim_start_matches(|c: char| c.is_ascii_digit());
        TIME_MARKERS.contains(&letters)
    })
}

pub fn is_review_text(normalized: &str) -> bool {
    normalized.contains(REVIEW_MARKER)
        || normalized
            .split(|c: char| !c.is_alphanumeric())
            .any(|word| SENTIMENT_WORDS.contains(&word))
}

pub fn is_cancel(normalized: &str) -> bool {
    CANCEL.contains(&normalized)
}

/// First run of digits anywhere in the text, e.g. "we are 4 people" -> 4. A run signed
/// with a leading '-' is not a count.
pub fn extract_count(text: &str) -> Option<u32> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    if text[..start].ends_with('-') {
        return None;
    }
    let digits: String = text[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify_default(message: &str) -> Intent {
        classify(&normalize(message), false, &Catalog::default())
    }

    #[test]
    fn test_greetings_show_main_menu() {
        for msg in ["hi", "Hello", "  HEY ", "start", "menu"] {
            assert_eq!(classify_default(msg), Intent::MainMenu, "{msg}");
        }
    }

    #[test]
    fn test_numbered_and_named_commands() {
        assert_eq!(classify_default("1"), Intent::ViewMenu);
        assert_eq!(classify_default("view menu"), Intent::ViewMenu);
        assert_eq!(classify_default("2"), Intent::StartCake);
        assert_eq!(classify_default("order cake"), Intent::StartCake);
        assert_eq!(classify_default("3"), Intent::StartBooking);
        assert_eq!(classify_default("Book Table"), Intent::StartBooking);
        assert_eq!(classify_default("4"), Intent::Hours);
        assert_eq!(classify_default("5"), Intent::Location);
        assert_eq!(classify_default("6"), Intent::ReviewPrompt);
        assert_eq!(classify_default("feedback"), Intent::ReviewPrompt);
    }

    #[test]
    fn test_bare_category() {
        assert_eq!(classify_default("Coffee"), Intent::Category("coffee".to_string()));
        assert_eq!(
            classify_default("signature iced beverages menu"),
            Intent::Category("signature iced beverages".to_string())
        );
    }

    #[test]
    fn test_free_standing_integer_offers_booking() {
        assert_eq!(classify_default("8"), Intent::OfferBooking { people: 8 });
        assert_eq!(classify_default("12 people"), Intent::OfferBooking { people: 12 });
        assert_eq!(classify_default("7 pm"), Intent::Fallback);
        assert_eq!(classify_default("7pm"), Intent::Fallback);
        assert_eq!(classify_default("7:30"), Intent::Fallback);
        assert_eq!(classify_default("0"), Intent::Fallback);
        assert_eq!(classify_default("99"), Intent::Fallback);
    }

    #[test]
    fn test_review_detection() {
        assert_eq!(classify_default("review: Great coffee! rating: 5"), Intent::SaveReview);
        assert_eq!(classify_default("the pasta was delicious"), Intent::SaveReview);
        assert_eq!(classify_default("is the place dog friendly?"), Intent::Fallback);
    }

    #[test]
    fn test_commands_beat_review_words() {
        // "review" alone is the prompt, not a review to save.
        assert_eq!(classify_default("review"), Intent::ReviewPrompt);
    }

    #[test]
    fn test_cancel_keywords() {
        for msg in ["cancel", "reset", "STOP", "exit"] {
            assert_eq!(classify_default(msg), Intent::Cancel, "{msg}");
        }
    }

    #[test]
    fn test_owner_commands_only_for_owner() {
        let catalog = Catalog::default();
        assert_eq!(classify("report", true, &catalog), Intent::OwnerReport);
        assert_eq!(
            classify("reviews today", true, &catalog),
            Intent::OwnerReviews(ReviewScope::Today)
        );
        assert_eq!(
            classify("reviews", true, &catalog),
            Intent::OwnerReviews(ReviewScope::All)
        );
        assert_eq!(classify("report", false, &catalog), Intent::Fallback);
        assert_eq!(classify("hi", true, &catalog), Intent::MainMenu);
    }

    #[test]
    fn test_extract_count() {
        assert_eq!(extract_count("4"), Some(4));
        assert_eq!(extract_count("we are 12 people"), Some(12));
        assert_eq!(extract_count("table for four"), None);
        assert_eq!(extract_count("99999999999999999999"), None);
        assert_eq!(extract_count("-3"), None);
        assert_eq!(extract_count("party of -12"), None);
        assert_eq!(extract_count("4-5 people"), Some(4));
    }
}
