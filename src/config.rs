use std::env;
use std::str::FromStr;

use crate::errors::AppError;

/// WhatsApp senders arrive as `whatsapp:+91...`; everything downstream keys on the bare number.
pub const CHANNEL_PREFIX: &str = "whatsapp:";

#[derive(Clone, Debug, PartialEq)]
pub enum StorageBackend {
    Json,
    Sqlite,
}

impl StorageBackend {
    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s.trim().to_lowercase().as_str() {
            "" | "json" => Ok(StorageBackend::Json),
            "sqlite" => Ok(StorageBackend::Sqlite),
            other => Err(AppError::Config(format!("unknown STORAGE_BACKEND: {other}"))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub data_dir: String,
    pub storage_backend: StorageBackend,
    pub database_url: String,
    pub owner_number: String,
    pub twilio_account_sid: String,
    pub twilio_auth_token: String,
    pub twilio_whatsapp_number: String,
    pub llm_provider: String,
    pub openai_api_key: String,
    pub openai_model: String,
    pub groq_api_key: String,
    pub groq_model: String,
    pub ollama_url: String,
    pub ollama_model: String,
    pub tables: u32,
    pub seats_per_table: u32,
    pub session_timeout_secs: i64,
    pub catalog_path: Option<String>,
    pub persist_menu_orders: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let tables = parse_var("TABLES", 6)?;
        let seats_per_table = parse_var("SEATS_PER_TABLE", 4)?;
        seat_capacity(tables, seats_per_table)?;

        Ok(Self {
            port: parse_var("PORT", 5000)?,
            data_dir: env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()),
            storage_backend: StorageBackend::parse(
                &env::var("STORAGE_BACKEND").unwrap_or_default(),
            )?,
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "tablebot.db".to_string()),
            owner_number: strip_channel_prefix(&env::var("OWNER_NUMBER").unwrap_or_default()),
            twilio_account_sid: env::var("TWILIO_ACCOUNT_SID").unwrap_or_default(),
            twilio_auth_token: env::var("TWILIO_AUTH_TOKEN").unwrap_or_default(),
            twilio_whatsapp_number: env::var("TWILIO_WHATSAPP_NUMBER").unwrap_or_default(),
            llm_provider: env::var("LLM_PROVIDER").unwrap_or_else(|_| "openai".to_string()),
            openai_api_key: env::var("OPENAI_API_KEY").unwrap_or_default(),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            groq_api_key: env::var("GROQ_API_KEY").unwrap_or_default(),
            groq_model: env::var("GROQ_MODEL")
                .unwrap_or_else(|_| "llama-3.1-8b-instant".to_string()),
            ollama_url: env::var("OLLAMA_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            ollama_model: env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3.2".to_string()),
            tables,
            seats_per_table,
            session_timeout_secs: parse_var("SESSION_TIMEOUT_SECS", 300)?,
            catalog_path: env::var("CATALOG_PATH").ok().filter(|p| !p.trim().is_empty()),
            persist_menu_orders: parse_var("PERSIST_MENU_ORDERS", false)?,
        })
    }

    /// `from_env` rejects overflowing capacities; hand-built configs saturate.
    pub fn total_seats(&self) -> u32 {
        self.tables.saturating_mul(self.seats_per_table)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 5000,
            data_dir: "data".to_string(),
            storage_backend: StorageBackend::Json,
            database_url: "tablebot.db".to_string(),
            owner_number: String::new(),
            twilio_account_sid: String::new(),
            twilio_auth_token: String::new(),
            twilio_whatsapp_number: String::new(),
            llm_provider: "none".to_string(),
            openai_api_key: String::new(),
            openai_model: "gpt-4o-mini".to_string(),
            groq_api_key: String::new(),
            groq_model: "llama-3.1-8b-instant".to_string(),
            ollama_url: "http://localhost:11434".to_string(),
            ollama_model: "llama3.2".to_string(),
            tables: 6,
            seats_per_table: 4,
            session_timeout_secs: 300,
            catalog_path: None,
            persist_menu_orders: false,
        }
    }
}

pub fn strip_channel_prefix(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix(CHANNEL_PREFIX)
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

/// Total seats for the given layout, or a config error when the product does not fit a u32.
pub fn seat_capacity(tables: u32, seats_per_table: u32) -> Result<u32, AppError> {
    tables.checked_mul(seats_per_table).ok_or_else(|| {
        AppError::Config(format!(
            "TABLES ({tables}) x SEATS_PER_TABLE ({seats_per_table}) overflows the seat count"
        ))
    })
}

fn parse_var<T: FromStr>(key: &str, default: T) -> Result<T, AppError> {
    match env::var(key) {
        Ok(v) if !v.trim().is_empty() => v
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("invalid value for {key}: {v}"))),
        _ => Ok(default),
    }
}
