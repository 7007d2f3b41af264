use crate::config::LlmConfig;
use crate::prelude::*;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::providers::openai;
use uigen_core::codegen::ChatTurn;

/// A chat-capable LLM agent.
///
/// Every call is a fresh session: no history is carried between calls.
#[async_trait::async_trait]
pub trait ChatAgent: Send + Sync {
    /// Send `message` to an agent configured with `preamble` and return the
    /// resulting transcript, oldest turn first.
    async fn chat(&self, preamble: &str, message: &str) -> Result<Vec<ChatTurn>>;
}

/// [`ChatAgent`] backed by an OpenAI-compatible chat completions API.
pub struct OpenAiAgent {
    client: openai::CompletionsClient,
    config: LlmConfig,
}

impl OpenAiAgent {
    pub fn new(config: &LlmConfig) -> Result<Self> {
        Ok(Self {
            client: create_client(config)?,
            config: config.clone(),
        })
    }
}

fn create_client(config: &LlmConfig) -> Result<openai::CompletionsClient> {
    let api_key = config.api_key.as_deref().unwrap_or_default();

    openai::Client::builder()
        .api_key(api_key)
        .base_url(&config.base_url)
        .build()
        .map(|client| client.completions_api())
        .map_err(|e| eyre!("Failed to create OpenAI client: {}", e))
}

#[async_trait::async_trait]
impl ChatAgent for OpenAiAgent {
    async fn chat(&self, preamble: &str, message: &str) -> Result<Vec<ChatTurn>> {
        let agent = self
            .client
            .agent(&self.config.model)
            .preamble(preamble)
            .temperature(self.config.temperature)
            .additional_params(serde_json::json!({ "seed": self.config.seed }))
            .build();

        log::debug!(
            "Prompting {} ({} chars of instruction)",
            self.config.model,
            message.len()
        );

        let reply = agent
            .prompt(message.to_string())
            .await
            .map_err(|e| eyre!("Model generation failed: {}", e))?;

        Ok(vec![ChatTurn::user(message), ChatTurn::assistant(Some(reply))])
    }
}
