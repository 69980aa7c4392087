use anyhow::Context;
use async_trait::async_trait;
use serde_json::json;

use super::{LlmProvider, Message, AI_TIMEOUT};

const OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
const GROQ_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Any endpoint speaking the OpenAI chat-completions protocol (OpenAI itself, Groq).
pub struct OpenAiCompatibleProvider {
    name: &'static str,
    url: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    client: reqwest::Client,
}

impl OpenAiCompatibleProvider {
    pub fn new(name: &'static str, url: String, api_key: String, model: String) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(AI_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self {
            name,
            url,
            api_key,
            model,
            max_tokens: 200,
            client,
        })
    }

    pub fn openai(api_key: String, model: String) -> anyhow::Result<Self> {
        Self::new("OpenAI", OPENAI_URL.to_string(), api_key, model)
    }

    pub fn groq(api_key: String, model: String) -> anyhow::Result<Self> {
        Self::new("Groq", GROQ_URL.to_string(), api_key, model)
    }
}

#[async_trait]
impl LlmProvider for OpenAiCompatibleProvider {
    async fn chat(&self, system_prompt: &str, messages: &[Message]) -> anyhow::Result<String> {
        let mut chat_messages = vec![json!({
            "role": "system",
            "content": system_prompt,
        })];

        for msg in messages {
            chat_messages.push(json!({
                "role": msg.role,
                "content": msg.content,
            }));
        }

        let body = json!({
            "model": self.model,
            "messages": chat_messages,
            "max_tokens": self.max_tokens,
            "temperature": 0.7,
        });

        let resp = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .with_context(|| format!("failed to call {} API", self.name))?;

        let status = resp.status();
        let data: serde_json::Value = resp
            .json()
            .await
            .with_context(|| format!("failed to parse {} response", self.name))?;

        if !status.is_success() {
            anyhow::bail!("{} API error ({}): {}", self.name, status, data);
        }

        data["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("missing content in {} response", self.name))
    }
}
