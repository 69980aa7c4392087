use super::{Action, Transition};
use crate::models::{CakeStep, Catalog, Flow};
use crate::services::replies::{self, title_case};

const SKIP_MESSAGE: &[&str] = &["no", "none", "nope", "na"];

pub fn start(catalog: &Catalog) -> Transition {
    Transition::Continue {
        flow: Flow::Cake(CakeStep::Flavour),
        reply: replies::cake_start(catalog),
    }
}

pub fn advance(step: &CakeStep, message: &str, normalized: &str, catalog: &Catalog) -> Transition {
    let text = message.trim();
    match step {
        CakeStep::Flavour => {
            let flavour = catalog
                .match_flavour(text)
                .map(str::to_string)
                .unwrap_or_else(|| title_case(text));
            Transition::Continue {
                reply: replies::cake_ask_message(&flavour),
                flow: Flow::Cake(CakeStep::Message { flavour }),
            }
        }
        CakeStep::Message { flavour } => {
            let message = (!SKIP_MESSAGE.contains(&normalized)).then(|| text.to_string());
            Transition::Continue {
                flow: Flow::Cake(CakeStep::Date {
                    flavour: flavour.clone(),
                    message,
                }),
                reply: replies::cake_ask_date(),
            }
        }
        CakeStep::Date { flavour, message } => Transition::Continue {
            flow: Flow::Cake(CakeStep::Time {
                flavour: flavour.clone(),
                message: message.clone(),
                date: text.to_string(),
            }),
            reply: replies::cake_ask_time(),
        },
        CakeStep::Time {
            flavour,
            message,
            date,
        } => Transition::Resolve(Action::CakeOrder {
            flavour: flavour.clone(),
            message: message.clone(),
            date: date.clone(),
            time: text.to_string(),
        }),
    }
}
