use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ReviewScope {
    All,
    Today,
}

/// Top-level routing decision for a message. Variants are listed in precedence order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    OwnerReport,
    OwnerReviews(ReviewScope),
    MainMenu,
    ViewMenu,
    StartCake,
    StartBooking,
    Hours,
    Location,
    ReviewPrompt,
    Category(String),
    OfferBooking { people: u32 },
    SaveReview,
    Cancel,
    Fallback,
}

impl Intent {
    pub fn is_owner_command(&self) -> bool {
        matches!(self, Intent::OwnerReport | Intent::OwnerReviews(_))
    }
}
