//! Assistant service.

use async_trait::async_trait;
use keepstudy::assistant::{CannedResponder, ChatMessage, Conversation, Responder};
use mockall::automock;
use tokio::sync::Mutex;

use crate::domain::assistant::{AssistantServiceError, DelayedResponder};

/// Assistant chat backed by the canned responder, with simulated latency.
#[derive(Debug)]
pub struct CannedAssistantService {
    responder: DelayedResponder<CannedResponder>,
    conversation: Mutex<Conversation>,
}

impl CannedAssistantService {
    /// Create a service answering through `responder`.
    #[must_use]
    pub fn new(responder: DelayedResponder<CannedResponder>) -> Self {
        Self {
            responder,
            conversation: Mutex::new(Conversation::new()),
        }
    }
}

#[async_trait]
impl AssistantService for CannedAssistantService {
    async fn ask(&self, prompt: String) -> Result<String, AssistantServiceError> {
        if !self.conversation.lock().await.ask(&prompt) {
            return Err(AssistantServiceError::EmptyPrompt);
        }

        let reply = self.responder.reply(&prompt).await?;

        self.conversation.lock().await.receive(reply.clone());

        Ok(reply)
    }

    async fn transcript(&self) -> Vec<ChatMessage> {
        self.conversation.lock().await.messages().to_vec()
    }
}

#[automock]
#[async_trait]
pub trait AssistantService: Send + Sync {
    /// Ask the assistant and wait for its reply.
    async fn ask(&self, prompt: String) -> Result<String, AssistantServiceError>;

    /// Messages exchanged so far.
    async fn transcript(&self) -> Vec<ChatMessage>;
}
