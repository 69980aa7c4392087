use std::sync::{Arc, Mutex};

use tracing_subscriber::EnvFilter;

use tablebot::build_router;
use tablebot::config::{AppConfig, StorageBackend};
use tablebot::db::{self, JsonFileStore, RecordStore, SqliteRecordStore, SqliteSessionStore};
use tablebot::models::Catalog;
use tablebot::services::ai::ollama::OllamaProvider;
use tablebot::services::ai::openai::OpenAiCompatibleProvider;
use tablebot::services::ai::LlmProvider;
use tablebot::services::messaging::twilio::TwilioWhatsAppProvider;
use tablebot::services::sessions::{MemorySessionStore, SessionStore};
use tablebot::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env()?;
    let catalog = Catalog::load(config.catalog_path.as_deref())?;
    tracing::info!(
        restaurant = %catalog.restaurant.name,
        categories = catalog.categories.len(),
        "catalog loaded"
    );

    let (records, sessions): (Box<dyn RecordStore>, Box<dyn SessionStore>) =
        match config.storage_backend {
            StorageBackend::Json => {
                tracing::info!(dir = %config.data_dir, "using JSON file storage");
                (
                    Box::new(JsonFileStore::new(&config.data_dir)?),
                    Box::new(MemorySessionStore::new(config.session_timeout_secs)),
                )
            }
            StorageBackend::Sqlite => {
                tracing::info!(path = %config.database_url, "using SQLite storage");
                let conn = Arc::new(Mutex::new(db::init_db(&config.database_url)?));
                (
                    Box::new(SqliteRecordStore::new(Arc::clone(&conn))),
                    Box::new(SqliteSessionStore::new(conn, config.session_timeout_secs)),
                )
            }
        };

    let llm = build_llm(&config)?;

    let messaging = TwilioWhatsAppProvider::new(
        config.twilio_account_sid.clone(),
        config.twilio_auth_token.clone(),
        config.twilio_whatsapp_number.clone(),
    )?;
    if config.owner_number.is_empty() {
        tracing::warn!("OWNER_NUMBER not set, owner notifications and reports are disabled");
    }

    let state = Arc::new(AppState {
        config: config.clone(),
        catalog,
        records,
        sessions,
        llm,
        messaging: Box::new(messaging),
    });

    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_llm(config: &AppConfig) -> anyhow::Result<Option<Box<dyn LlmProvider>>> {
    let llm: Option<Box<dyn LlmProvider>> = match config.llm_provider.trim().to_lowercase().as_str() {
        "openai" if !config.openai_api_key.is_empty() => {
            tracing::info!("using OpenAI LLM provider (model: {})", config.openai_model);
            Some(Box::new(OpenAiCompatibleProvider::openai(
                config.openai_api_key.clone(),
                config.openai_model.clone(),
            )?))
        }
        "groq" if !config.groq_api_key.is_empty() => {
            tracing::info!("using Groq LLM provider (model: {})", config.groq_model);
            Some(Box::new(OpenAiCompatibleProvider::groq(
                config.groq_api_key.clone(),
                config.groq_model.clone(),
            )?))
        }
        "ollama" => {
            tracing::info!("using Ollama LLM provider (url: {})", config.ollama_url);
            Some(Box::new(OllamaProvider::new(
                config.ollama_url.clone(),
                config.ollama_model.clone(),
            )?))
        }
        other => {
            tracing::warn!(provider = %other, "AI fallback disabled (no provider or missing API key)");
            None
        }
    };
    Ok(llm)
}
