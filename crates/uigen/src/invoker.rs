use crate::agent::ChatAgent;
use crate::prelude::*;
use std::sync::Arc;
use uigen_core::codegen::{
    designer_message, developer_message, last_reply, AgentResponse, GenerationRequest, Pipeline,
    DESIGNER_PREAMBLE, DEVELOPER_PREAMBLE,
};

/// Turns a generation request into the final agent reply.
pub struct Invoker {
    agent: Arc<dyn ChatAgent>,
    pipeline: Pipeline,
}

impl Invoker {
    pub fn new(agent: Arc<dyn ChatAgent>, pipeline: Pipeline) -> Self {
        Self { agent, pipeline }
    }

    /// Run the configured agent chain.
    ///
    /// Returns an empty response when the developer produced nothing usable.
    /// Errors from the agent are passed through untouched.
    pub async fn invoke(&self, request: &GenerationRequest) -> Result<AgentResponse> {
        let draft = self.develop(request).await?;

        match (self.pipeline, draft.content) {
            (Pipeline::Designer, Some(draft)) => self.design(draft).await,
            (_, content) => Ok(AgentResponse { content }),
        }
    }

    async fn develop(&self, request: &GenerationRequest) -> Result<AgentResponse> {
        let transcript = self
            .agent
            .chat(DEVELOPER_PREAMBLE, &developer_message(request))
            .await?;

        let response = last_reply(&transcript);
        if response.content.is_none() {
            log::warn!(
                "Developer agent returned no usable reply ({} turns)",
                transcript.len()
            );
        }

        Ok(response)
    }

    /// Ask the designer to polish `draft`, falling back to the draft itself
    /// when the designer's transcript has no usable reply.
    async fn design(&self, draft: String) -> Result<AgentResponse> {
        let transcript = self
            .agent
            .chat(DESIGNER_PREAMBLE, &designer_message(&draft))
            .await?;

        match last_reply(&transcript).content {
            Some(enhanced) => Ok(AgentResponse::new(enhanced)),
            None => {
                log::warn!("Designer agent returned no usable reply, keeping developer output");
                Ok(AgentResponse::new(draft))
            }
        }
    }
}
