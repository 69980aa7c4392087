use crate::state::AppState;

/// What happened to an outbound message. Sends never fail the turn that triggered them.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    Skipped,
    Failed,
}

impl Delivery {
    pub fn is_sent(self) -> bool {
        self == Delivery::Sent
    }
}

pub async fn send_reply(state: &AppState, to: &str, body: &str) -> Delivery {
    if !state.messaging.is_configured() {
        tracing::warn!(to = %to, "messaging credentials not configured, skipping send");
        return Delivery::Skipped;
    }

    match state.messaging.send_message(to, body).await {
        Ok(()) => Delivery::Sent,
        Err(e) => {
            tracing::error!(error = %e, to = %to, "failed to send message");
            Delivery::Failed
        }
    }
}

pub async fn notify_owner(state: &AppState, message: &str) -> Delivery {
    if state.config.owner_number.is_empty() {
        tracing::warn!("owner number not configured, skipping notification");
        return Delivery::Skipped;
    }
    send_reply(state, &state.config.owner_number, message).await
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::config::AppConfig;
    use crate::db::JsonFileStore;
    use crate::models::Catalog;
    use crate::services::messaging::MessagingProvider;
    use crate::services::sessions::MemorySessionStore;

    struct CountingMessaging {
        attempts: Arc<AtomicUsize>,
        fail: bool,
        configured: bool,
    }

    #[async_trait]
    impl MessagingProvider for CountingMessaging {
        async fn send_message(&self, _to: &str, _body: &str) -> anyhow::Result<()> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                anyhow::bail!("twilio returned 503");
            }
            Ok(())
        }

        fn is_configured(&self) -> bool {
            self.configured
        }
    }

    fn state(
        dir: &tempfile::TempDir,
        owner: &str,
        fail: bool,
        configured: bool,
    ) -> (AppState, Arc<AtomicUsize>) {
        let attempts = Arc::new(AtomicUsize::new(0));
        let state = AppState {
            config: AppConfig {
                owner_number: owner.to_string(),
                ..AppConfig::default()
            },
            catalog: Catalog::default(),
            records: Box::new(JsonFileStore::new(dir.path()).unwrap()),
            sessions: Box::new(MemorySessionStore::new(300)),
            llm: None,
            messaging: Box::new(CountingMessaging {
                attempts: Arc::clone(&attempts),
                fail,
                configured,
            }),
        };
        (state, attempts)
    }

    #[tokio::test]
    async fn test_send_reply_reports_delivery() {
        let dir = tempfile::tempdir().unwrap();
        let (ok, _) = state(&dir, "+1555", false, true);
        assert_eq!(send_reply(&ok, "+1666", "hi").await, Delivery::Sent);

        let (broken, attempts) = state(&dir, "+1555", true, true);
        assert_eq!(send_reply(&broken, "+1666", "hi").await, Delivery::Failed);
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unconfigured_messaging_skips_send() {
        let dir = tempfile::tempdir().unwrap();
        let (state, attempts) = state(&dir, "+1555", false, false);
        assert_eq!(send_reply(&state, "+1666", "hi").await, Delivery::Skipped);
        assert_eq!(attempts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_notify_owner_without_number_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let (state, attempts) = state(&dir, "", false, true);
        let delivery = notify_owner(&state, "📢 New Table Booking!").await;
        assert_eq!(delivery, Delivery::Skipped);
        assert!(!delivery.is_sent());
        assert_eq!(attempts.load(Ordering::SeqCst), 0);
    }
}
