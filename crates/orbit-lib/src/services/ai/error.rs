// AI feature error types
// Feature: AI Coach Chat (003-ai-coach)

use thiserror::Error;

use crate::models::ai::ImageSize;

/// AI feature error
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AIError {
    /// Prompt or chat input is empty
    #[error("Prompt cannot be empty")]
    EmptyPrompt,

    /// Free plan chat quota used up for this session
    #[error("Free plan limit reached ({0} messages per session), upgrade to Pro for unlimited chat")]
    MessageQuotaExceeded(usize),

    /// Requested resolution is above the free plan ceiling
    #[error("{0} image generation requires a Pro subscription")]
    ResolutionLocked(ImageSize),

    /// Error reported by the hosted model
    #[error("AI model error: {0}")]
    ModelError(String),
}

/// Result type for AI operations
pub type AIResult<T> = Result<T, AIError>;

/// AI error codes for the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AIErrorCode {
    EmptyPrompt,
    MessageQuota,
    ResolutionLocked,
    ModelError,
}

impl AIErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AIErrorCode::EmptyPrompt => "AI_EMPTY_PROMPT",
            AIErrorCode::MessageQuota => "AI_MESSAGE_QUOTA",
            AIErrorCode::ResolutionLocked => "AI_RESOLUTION_LOCKED",
            AIErrorCode::ModelError => "AI_MODEL_ERROR",
        }
    }
}

impl AIError {
    pub fn code(&self) -> AIErrorCode {
        match self {
            AIError::EmptyPrompt => AIErrorCode::EmptyPrompt,
            AIError::MessageQuotaExceeded(_) => AIErrorCode::MessageQuota,
            AIError::ResolutionLocked(_) => AIErrorCode::ResolutionLocked,
            AIError::ModelError(_) => AIErrorCode::ModelError,
        }
    }
}

impl From<AIError> for String {
    fn from(err: AIError) -> Self {
        err.to_string()
    }
}
