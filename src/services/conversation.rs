use std::sync::Arc;

use chrono::{Local, NaiveDateTime, Utc};

use crate::db::{append_record, load_records, Collection};
use crate::models::{
    new_record_id, Booking, CakeOrder, InteractionLog, Intent, MenuOrder, Review, Session,
};
use crate::services::ai::fallback::fallback_reply;
use crate::services::availability::check_table_availability;
use crate::services::flows::{self, Action, FlowContext, Transition};
use crate::services::intent::{classify, normalize};
use crate::services::notifier::{notify_owner, Delivery};
use crate::services::replies;
use crate::services::report::{format_reviews, generate_report};
use crate::services::review::build_review;
use crate::state::AppState;

/// Handles one inbound message end to end and returns the reply to send back.
///
/// Order matters: stale sessions are swept before the lookup, owner commands and cancel
/// words are honoured even inside a flow, and every other message goes to the active flow
/// when there is one.
pub async fn process_message(
    state: &Arc<AppState>,
    sender: &str,
    message: &str,
) -> anyhow::Result<String> {
    let now = Utc::now().naive_utc();

    match state.sessions.sweep(now) {
        Ok(0) => {}
        Ok(removed) => tracing::debug!(removed, "swept expired sessions"),
        Err(e) => tracing::error!(error = %e, "session sweep failed"),
    }

    let normalized = normalize(message);
    let is_owner = !state.config.owner_number.is_empty() && sender == state.config.owner_number;
    let intent = classify(&normalized, is_owner, &state.catalog);
    let session = state.sessions.get(sender)?;

    tracing::info!(
        sender = %sender,
        intent = ?intent,
        flow = session.as_ref().map(|s| s.flow.as_str()).unwrap_or("none"),
        step = session.as_ref().map(|s| s.flow.step()).unwrap_or(0),
        "processing message"
    );

    let ctx = FlowContext {
        catalog: &state.catalog,
        total_seats: state.config.total_seats(),
    };

    let transition = match &session {
        Some(_) if intent.is_owner_command() || intent == Intent::Cancel => {
            flows::route(intent, message, &ctx, true)
        }
        Some(s) => flows::advance(&s.flow, message, &normalized, &ctx),
        None => flows::route(intent, message, &ctx, false),
    };

    let reply = apply(state, sender, transition, now).await?;

    let log = InteractionLog {
        sender: sender.to_string(),
        message: message.to_string(),
        reply: reply.clone(),
        timestamp: Local::now().naive_local(),
    };
    append_record(state.records.as_ref(), Collection::Conversations, &log);

    Ok(reply)
}

async fn apply(
    state: &AppState,
    sender: &str,
    transition: Transition,
    now: NaiveDateTime,
) -> anyhow::Result<String> {
    match transition {
        Transition::Continue { flow, reply } => {
            state.sessions.set(sender, &Session::new(flow, now))?;
            Ok(reply)
        }
        Transition::Exit { reply } => {
            state.sessions.clear(sender)?;
            Ok(reply)
        }
        Transition::Resolve(action) => {
            if action.ends_flow() {
                state.sessions.clear(sender)?;
            }
            Ok(resolve(state, sender, action).await)
        }
    }
}

/// Performs the storage and notification side of a completed step. Storage and send
/// failures are logged by the helpers; the customer still gets a reply.
async fn resolve(state: &AppState, sender: &str, action: Action) -> String {
    let records = state.records.as_ref();
    let created_at = Local::now().naive_local();

    match action {
        Action::Booking { people, date, time } => {
            let bookings: Vec<Booking> = load_records(records, Collection::Bookings);
            let slot = check_table_availability(
                &bookings,
                &date,
                &time,
                people,
                state.config.total_seats(),
            );
            if !slot.available {
                tracing::info!(
                    sender = %sender,
                    people,
                    date = %date,
                    time = %time,
                    seats_left = slot.seats_left,
                    "booking rejected, not enough seats"
                );
                return replies::booking_no_seats(people, &date, &time, slot.seats_left);
            }

            let booking = Booking::new(sender, people, &date, &time, created_at);
            if append_record(records, Collection::Bookings, &booking) {
                tracing::info!(booking_id = %booking.id, people, "booking saved");
            }
            alert_owner(state, "booking", &replies::owner_booking(&booking)).await;
            replies::booking_confirmed(&booking)
        }
        Action::CakeOrder {
            flavour,
            message,
            date,
            time,
        } => {
            let order = CakeOrder {
                id: new_record_id(),
                customer: sender.to_string(),
                flavour,
                message,
                date,
                time,
                created_at,
            };
            if append_record(records, Collection::CakeOrders, &order) {
                tracing::info!(order_id = %order.id, flavour = %order.flavour, "cake order saved");
            }
            alert_owner(state, "cake_order", &replies::owner_cake_order(&order)).await;
            replies::cake_confirmed(&order)
        }
        Action::Review { text } => {
            let review = build_review(sender, &text, created_at);
            append_record(records, Collection::Reviews, &review);
            alert_owner(state, "review", &replies::owner_review(&review)).await;
            replies::review_thanks(&review)
        }
        Action::MenuOrder { item, category } => {
            if state.config.persist_menu_orders {
                let order = MenuOrder {
                    id: new_record_id(),
                    customer: sender.to_string(),
                    item: item.clone(),
                    category,
                    created_at,
                };
                append_record(records, Collection::MenuOrders, &order);
                alert_owner(
                    state,
                    "menu_order",
                    &replies::owner_menu_order(sender, &order.item, order.category.as_deref()),
                )
                .await;
            }
            replies::order_acknowledged(&item)
        }
        Action::Report => {
            let bookings: Vec<Booking> = load_records(records, Collection::Bookings);
            let cakes: Vec<CakeOrder> = load_records(records, Collection::CakeOrders);
            let reviews: Vec<Review> = load_records(records, Collection::Reviews);
            generate_report(&bookings, &cakes, &reviews, Local::now().date_naive())
        }
        Action::Reviews(scope) => {
            let reviews: Vec<Review> = load_records(records, Collection::Reviews);
            format_reviews(&reviews, scope, Local::now().date_naive())
        }
        Action::Fallback { message } => {
            fallback_reply(state.llm.as_deref(), &state.catalog, &message).await
        }
    }
}

/// The record is already saved by the time the owner is told, so a missed alert only
/// gets logged.
async fn alert_owner(state: &AppState, kind: &str, message: &str) {
    match notify_owner(state, message).await {
        Delivery::Sent => tracing::debug!(kind, "owner notified"),
        delivery => tracing::debug!(kind, ?delivery, "owner notification not delivered"),
    }
}
