use crate::config::AppConfig;
use crate::db::RecordStore;
use crate::models::Catalog;
use crate::services::ai::LlmProvider;
use crate::services::messaging::MessagingProvider;
use crate::services::sessions::SessionStore;

pub struct AppState {
    pub config: AppConfig,
    pub catalog: Catalog,
    pub records: Box<dyn RecordStore>,
    pub sessions: Box<dyn SessionStore>,
    /// `None` when no AI provider is configured; the fallback then answers with a fixed text.
    pub llm: Option<Box<dyn LlmProvider>>,
    pub messaging: Box<dyn MessagingProvider>,
}
