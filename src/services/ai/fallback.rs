use crate::models::Catalog;
use crate::services::ai::{LlmProvider, Message};
use crate::services::replies::{AI_FAILED, AI_UNAVAILABLE};

fn system_prompt(catalog: &Catalog) -> String {
    let categories = catalog
        .categories
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "You are a friendly WhatsApp assistant for {name}, a cafe and restaurant.\n\
         Opening hours: {hours}. Address: {address}.\n\
         Menu categories: {categories}.\n\
         Answer briefly (two or three short sentences), in plain text without markdown.\n\
         If the customer wants to book a table, order a cake or see the menu, tell them to type 'menu'.",
        name = catalog.restaurant.name,
        hours = catalog.restaurant.hours,
        address = catalog.restaurant.address.join(" "),
    )
}

/// Free-text answer for messages nothing else understood. Never fails: an absent
/// provider and a failing provider each map to a fixed reply.
pub async fn fallback_reply(llm: Option<&dyn LlmProvider>, catalog: &Catalog, message: &str) -> String {
    let Some(llm) = llm else {
        return AI_UNAVAILABLE.to_string();
    };

    match llm.chat(&system_prompt(catalog), &[Message::user(message)]).await {
        Ok(raw) => match clean_completion(&raw) {
            Some(text) => text,
            None => {
                tracing::warn!("AI fallback returned an empty completion");
                AI_FAILED.to_string()
            }
        },
        Err(e) => {
            tracing::error!(error = %e, "AI fallback failed");
            AI_FAILED.to_string()
        }
    }
}

/// Strips surrounding code fences; blank output is treated as no answer.
fn clean_completion(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let cleaned = trimmed
        .strip_prefix("```text")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let cleaned = cleaned.strip_suffix("```").unwrap_or(cleaned).trim();

    (!cleaned.is_empty()).then(|| cleaned.to_string())
}
