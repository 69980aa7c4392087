pub mod twilio;

use async_trait::async_trait;

#[async_trait]
pub trait MessagingProvider: Send + Sync {
    async fn send_message(&self, to: &str, body: &str) -> anyhow::Result<()>;

    /// False when credentials are missing; callers skip the send instead of failing it.
    fn is_configured(&self) -> bool {
        true
    }
}
