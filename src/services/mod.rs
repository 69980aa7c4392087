pub mod ai;
pub mod availability;
pub mod conversation;
pub mod flows;
pub mod intent;
pub mod messaging;
pub mod notifier;
pub mod replies;
pub mod report;
pub mod review;
pub mod sessions;
