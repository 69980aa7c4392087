pub mod booking;
pub mod cake_order;
pub mod catalog;
pub mod intent;
pub mod interaction;
pub mod menu_order;
pub mod review;
pub mod session;

pub use booking::Booking;
pub use cake_order::CakeOrder;
pub use catalog::{Catalog, MenuCategory, Restaurant};
pub use intent::{Intent, ReviewScope};
pub use interaction::InteractionLog;
pub use menu_order::MenuOrder;
pub use review::Review;
pub use session::{BookingStep, CakeStep, Flow, Session};

pub fn new_record_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
