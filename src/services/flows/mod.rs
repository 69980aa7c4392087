pub mod booking;
pub mod cake;
pub mod menu;

use crate::models::{BookingStep, Catalog, Flow, Intent, ReviewScope};
use crate::services::replies;

const YES_WORDS: &[&str] = &["yes", "y", "yeah", "yep", "sure", "ok", "okay"];
const NO_WORDS: &[&str] = &["no", "n", "nope", "nah"];

/// Outcome of feeding one message to the engine. Step functions never touch storage;
/// anything that needs records or outbound calls comes back as an [`Action`].
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Keep (or open) a session in `flow` and send `reply`.
    Continue { flow: Flow, reply: String },
    /// Drop any session and send `reply`.
    Exit { reply: String },
    Resolve(Action),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Booking {
        people: u32,
        date: String,
        time: String,
    },
    CakeOrder {
        flavour: String,
        message: Option<String>,
        date: String,
        time: String,
    },
    Review {
        text: String,
    },
    MenuOrder {
        item: String,
        category: Option<String>,
    },
    Report,
    Reviews(ReviewScope),
    Fallback {
        message: String,
    },
}

impl Action {
    /// Whether resolving this action finishes the sender's current flow. Owner commands
    /// leave an in-progress flow untouched.
    pub fn ends_flow(&self) -> bool {
        match self {
            Action::Booking { .. }
            | Action::CakeOrder { .. }
            | Action::Review { .. }
            | Action::MenuOrder { .. } => true,
            Action::Report | Action::Reviews(_) | Action::Fallback { .. } => false,
        }
    }
}

pub struct FlowContext<'a> {
    pub catalog: &'a Catalog,
    pub total_seats: u32,
}

/// Feeds a message to the flow the sender is already in.
pub fn advance(flow: &Flow, message: &str, normalized: &str, ctx: &FlowContext) -> Transition {
    match flow {
        Flow::Booking(step) => booking::advance(step, message),
        Flow::Cake(step) => cake::advance(step, message, normalized, ctx.catalog),
        Flow::Menu { category } => menu::advance(category.as_deref(), normalized, ctx.catalog),
        Flow::Review => Transition::Resolve(Action::Review {
            text: message.trim().to_string(),
        }),
        Flow::ConfirmBooking { people } => confirm_booking(*people, normalized),
    }
}

/// Maps a classified intent to its first transition. `had_session` only changes the
/// wording of a cancellation.
pub fn route(intent: Intent, message: &str, ctx: &FlowContext, had_session: bool) -> Transition {
    let catalog = ctx.catalog;
    match intent {
        Intent::OwnerReport => Transition::Resolve(Action::Report),
        Intent::OwnerReviews(scope) => Transition::Resolve(Action::Reviews(scope)),
        Intent::MainMenu => Transition::Exit {
            reply: replies::main_menu(catalog),
        },
        Intent::ViewMenu => Transition::Continue {
            flow: Flow::Menu { category: None },
            reply: replies::category_list(catalog),
        },
        Intent::StartCake => cake::start(catalog),
        Intent::StartBooking => booking::start(ctx.total_seats),
        Intent::Hours => Transition::Exit {
            reply: replies::hours(catalog),
        },
        Intent::Location => Transition::Exit {
            reply: replies::location(catalog),
        },
        Intent::ReviewPrompt => Transition::Continue {
            flow: Flow::Review,
            reply: replies::review_prompt(),
        },
        Intent::Category(name) => menu::show_category(&name, catalog),
        Intent::OfferBooking { people } => Transition::Continue {
            flow: Flow::ConfirmBooking { people },
            reply: replies::offer_booking(people),
        },
        Intent::SaveReview => Transition::Resolve(Action::Review {
            text: message.trim().to_string(),
        }),
        Intent::Cancel => Transition::Exit {
            reply: if had_session {
                replies::cancelled(catalog)
            } else {
                replies::main_menu(catalog)
            },
        },
        Intent::Fallback => Transition::Resolve(Action::Fallback {
            message: message.trim().to_string(),
        }),
    }
}

fn confirm_booking(people: u32, normalized: &str) -> Transition {
    if YES_WORDS.contains(&normalized) {
        Transition::Continue {
            flow: Flow::Booking(BookingStep::Date { people }),
            reply: replies::booking_ask_date(people),
        }
    } else if NO_WORDS.contains(&normalized) {
        Transition::Exit {
            reply: replies::offer_declined(),
        }
    } else {
        Transition::Continue {
            flow: Flow::ConfirmBooking { people },
            reply: replies::offer_booking_reprompt(people),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(catalog: &Catalog) -> FlowContext<'_> {
        FlowContext {
            catalog,
            total_seats: 24,
        }
    }

    #[test]
    fn test_confirm_booking_yes_moves_to_date_step() {
        let catalog = Catalog::default();
        let flow = Flow::ConfirmBooking { people: 8 };
        match advance(&flow, "Yes", "yes", &ctx(&catalog)) {
            Transition::Continue { flow, reply } => {
                assert_eq!(flow, Flow::Booking(BookingStep::Date { people: 8 }));
                assert!(reply.contains("8 people"));
            }
            other => panic!("unexpected transition: {other:?}"),
        }
    }

    #[test]
    fn test_confirm_booking_no_exits() {
        let catalog = Catalog::default();
        let flow = Flow::ConfirmBooking { people: 8 };
        assert!(matches!(
            advance(&flow, "nah", "nah", &ctx(&catalog)),
            Transition::Exit { .. }
        ));
    }

    #[test]
    fn test_confirm_booking_other_reprompts() {
        let catalog = Catalog::default();
        let flow = Flow::ConfirmBooking { people: 3 };
        match advance(&flow, "maybe later", "maybe later", &ctx(&catalog)) {
            Transition::Continue { flow: next, reply } => {
                assert_eq!(next, flow);
                assert!(reply.contains("'yes'"));
            }
            other => panic!("unexpected transition: {other:?}"),
        }
    }

    #[test]
    fn test_review_flow_captures_next_message() {
        let catalog = Catalog::default();
        assert_eq!(
            advance(&Flow::Review, " loved the mocha ", "loved the mocha", &ctx(&catalog)),
            Transition::Resolve(Action::Review {
                text: "loved the mocha".to_string()
            })
        );
    }

    #[test]
    fn test_route_cancel_wording_depends_on_session() {
        let catalog = Catalog::default();
        let with = route(Intent::Cancel, "cancel", &ctx(&catalog), true);
        let without = route(Intent::Cancel, "cancel", &ctx(&catalog), false);
        match (with, without) {
            (Transition::Exit { reply: a }, Transition::Exit { reply: b }) => {
                assert!(a.starts_with("❌ Current process cancelled."));
                assert!(a.ends_with(&b));
                assert!(b.starts_with("👋 Welcome"));
            }
            other => panic!("unexpected transitions: {other:?}"),
        }
    }

    #[test]
    fn test_route_opens_flows() {
        let catalog = Catalog::default();
        let c = ctx(&catalog);
        assert!(matches!(
            route(Intent::StartBooking, "3", &c, false),
            Transition::Continue { flow: Flow::Booking(BookingStep::People), .. }
        ));
        assert!(matches!(
            route(Intent::ViewMenu, "1", &c, false),
            Transition::Continue { flow: Flow::Menu { category: None }, .. }
        ));
        assert!(matches!(
            route(Intent::ReviewPrompt, "6", &c, false),
            Transition::Continue { flow: Flow::Review, .. }
        ));
        assert!(matches!(
            route(Intent::Hours, "4", &c, false),
            Transition::Exit { .. }
        ));
    }

    #[test]
    fn test_owner_actions_keep_flow() {
        assert!(!Action::Report.ends_flow());
        assert!(!Action::Reviews(ReviewScope::Today).ends_flow());
        assert!(Action::Review {
            text: "x".to_string()
        }
        .ends_flow());
    }
}
