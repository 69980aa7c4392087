use crate::models::{Booking, CakeOrder, Catalog, MenuCategory, Review};

pub const INTERNAL_ERROR: &str =
    "😔 Sorry, something went wrong on our side. Please type 'menu' to start again.";
pub const AI_UNAVAILABLE: &str = "🤖 AI assistant unavailable. Try menu options.";
pub const AI_FAILED: &str = "🤖 Sorry, I didn't quite understand. Please try 'menu'.";
pub const REVIEW_INVITE: &str =
    "Would you like to leave a review? Type: review: <your feedback> rating: <1-5>";

// ── Navigation ──

pub fn main_menu(catalog: &Catalog) -> String {
    format!(
        "👋 Welcome to {}!\n\n\
         How can I help you today?\n\n\
         1️⃣ View Menu 📋\n\
         2️⃣ Order Cake 🎂\n\
         3️⃣ Book Table 🪑\n\
         4️⃣ Opening Hours 🕘\n\
         5️⃣ Location 📍\n\
         6️⃣ Leave Review ⭐\n\n\
         👉 Reply with the number or option name",
        catalog.restaurant.name
    )
}

pub fn cancelled(catalog: &Catalog) -> String {
    format!("❌ Current process cancelled.\n\n{}", main_menu(catalog))
}

pub fn hours(catalog: &Catalog) -> String {
    format!(
        "🕘 We're open every day!\n\n⏰ {}\n\nSee you soon! ☕",
        catalog.restaurant.hours
    )
}

pub fn location(catalog: &Catalog) -> String {
    let r = &catalog.restaurant;
    format!(
        "📍 {}\n\n{}\n\n🗺️ Google Maps: {}",
        r.name,
        r.address.join("\n"),
        r.maps_url
    )
}

// ── Menu browsing ──

pub fn category_list(catalog: &Catalog) -> String {
    let categories = catalog
        .categories
        .iter()
        .map(|c| format!("• {}", title_case(&c.name)))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "📋 Our Menu Categories:\n\n{categories}\n\n\
         👉 Reply with a category name to see items and prices."
    )
}

pub fn category_detail(catalog: &Catalog, category: &MenuCategory) -> String {
    let items = category
        .items
        .iter()
        .map(|item| item_line(catalog, category, item))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "📋 {} Menu:\n\n{items}\n\n\
         👉 Type an item name for its price, 'order <item>' to order, or 'back' for the main menu.",
        title_case(&category.name)
    )
}

pub fn item_price(catalog: &Catalog, category: &MenuCategory, item: &str) -> String {
    format!(
        "{}\n\n👉 Type 'order {}' to order it, or 'back' for the main menu.",
        item_line(catalog, category, item),
        item.to_lowercase()
    )
}

fn item_line(catalog: &Catalog, category: &MenuCategory, item: &str) -> String {
    let price = catalog.format_price(item);
    if category.icon.is_empty() {
        format!("{item} - {price}")
    } else {
        format!("{} {item} - {price}", category.icon)
    }
}

pub fn menu_not_understood() -> String {
    "🤔 I couldn't find that on our menu. Reply with a category or item name, or 'back' for the main menu."
        .to_string()
}

pub fn order_acknowledged(item: &str) -> String {
    format!(
        "✅ Got it! We've noted your order for {item}.\n\nOur staff will have it ready for you. Type 'menu' for more options."
    )
}

pub fn owner_menu_order(customer: &str, item: &str, category: Option<&str>) -> String {
    format!(
        "📢 New Menu Order!\n\nCustomer: {customer}\nItem: {item}\nCategory: {}",
        category.map(title_case).unwrap_or_else(|| "-".to_string())
    )
}

// ── Booking ──

pub fn booking_start(total_seats: u32) -> String {
    format!(
        "🪑 I'll help you book a table! How many people will be joining?\n\n(We have {total_seats} seats available)"
    )
}

pub fn booking_invalid_people(max_party: u32) -> String {
    format!("⚠️ Please enter a valid number of people between 1 and {max_party} (e.g., 4)")
}

pub fn booking_ask_date(people: u32) -> String {
    format!(
        "📅 Booking for {people} people. What date would you prefer? (e.g., Today, Tomorrow, 25th Sep)"
    )
}

pub fn booking_ask_time() -> String {
    "⏰ Perfect! What time would you like to book the table?".to_string()
}

pub fn booking_no_seats(people: u32, date: &str, time: &str, seats_left: u32) -> String {
    format!(
        "⚠️ Sorry, we don't have enough seats for {people} at {time} on {date}.\n\
         Available seats: {seats_left}\n\n\
         Type 'book' to try a different time or date."
    )
}

pub fn booking_confirmed(booking: &Booking) -> String {
    format!(
        "✅ Table booking confirmed!\n\n\
         👥 People: {}\n\
         📅 Date: {}\n\
         ⏰ Time: {}\n\n\
         {REVIEW_INVITE}",
        booking.people, booking.date, booking.time
    )
}

pub fn owner_booking(booking: &Booking) -> String {
    format!(
        "📢 New Table Booking!\n\nCustomer: {}\nPeople: {}\nDate: {}\nTime: {}",
        booking.customer, booking.people, booking.date, booking.time
    )
}

pub fn offer_booking(people: u32) -> String {
    format!("🪑 Would you like to book a table for {people} people? Reply 'yes' to continue or 'no' to cancel.")
}

pub fn offer_booking_reprompt(people: u32) -> String {
    format!("🤔 Please reply 'yes' to book a table for {people} people, or 'no' to cancel.")
}

pub fn offer_declined() -> String {
    "👍 No problem! Type 'menu' to see all options.".to_string()
}

// ── Cake orders ──

pub fn cake_start(catalog: &Catalog) -> String {
    let examples = if catalog.cake_flavours.is_empty() {
        "Chocolate, Vanilla, Red Velvet".to_string()
    } else {
        catalog
            .cake_flavours
            .iter()
            .take(4)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!("🎂 I'd love to help you order a cake! What flavour would you like?\n\n(e.g., {examples}, etc.)")
}

pub fn cake_ask_message(flavour: &str) -> String {
    format!("🎂 {flavour} it is! Would you like a message written on the cake? (Reply 'no' to skip)")
}

pub fn cake_ask_date() -> String {
    "📅 Perfect! What pickup date would you prefer? (e.g., 25th Sep, Tomorrow)".to_string()
}

pub fn cake_ask_time() -> String {
    "⏰ Great! What time should we keep it ready for pickup?".to_string()
}

pub fn cake_confirmed(order: &CakeOrder) -> String {
    format!(
        "✅ Cake order confirmed!\n\n\
         🎂 Flavour: {}\n\
         {}\
         📅 Date: {}\n\
         ⏰ Time: {}\n\n\
         {REVIEW_INVITE}",
        order.flavour,
        cake_message_line(order),
        order.date,
        order.time
    )
}

pub fn owner_cake_order(order: &CakeOrder) -> String {
    format!(
        "📢 New Cake Order!\n\nCustomer: {}\nFlavour: {}\nMessage: {}\nDate: {}\nTime: {}",
        order.customer,
        order.flavour,
        order.message.as_deref().unwrap_or("-"),
        order.date,
        order.time
    )
}

fn cake_message_line(order: &CakeOrder) -> String {
    match &order.message {
        Some(m) => format!("✍️ Message: {m}\n"),
        None => String::new(),
    }
}

// ── Reviews ──

pub fn review_prompt() -> String {
    "⭐ We'd love to hear your feedback!\n\n\
     Please use this format:\n\
     review: <your feedback> rating: <1-5>\n\n\
     Example:\n\
     review: Great food and service! rating: 5\n\n\
     Or simply type your feedback now."
        .to_string()
}

pub fn rating_suffix(rating: Option<u8>) -> String {
    rating.map(|r| format!(" {r}⭐")).unwrap_or_default()
}

pub fn review_thanks(review: &Review) -> String {
    format!(
        "✅ Thank you for your review!{}\n\nYour feedback helps us improve! 💙",
        rating_suffix(review.rating)
    )
}

pub fn owner_review(review: &Review) -> String {
    format!(
        "📢 New Review!\n\n{}{}\n\nFrom: {}",
        preview(&review.review, 100),
        rating_suffix(review.rating),
        review.customer
    )
}

pub fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut c = word.chars();
            match c.next() {
                None => String::new(),
                Some(f) => f.to_uppercase().to_string() + &c.as_str().to_lowercase(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
