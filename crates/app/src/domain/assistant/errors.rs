//! Assistant Service Errors

use keepstudy::assistant::AssistantError;
use thiserror::Error;

/// Errors raised by the assistant service.
#[derive(Debug, Error)]
pub enum AssistantServiceError {
    /// The prompt was empty.
    #[error("prompt is empty")]
    EmptyPrompt,

    /// The responder failed.
    #[error(transparent)]
    Responder(#[from] AssistantError),
}
