// AI collaborator boundary
// Feature: AI Coach Chat (003-ai-coach)
//
// The hosted Gemini models sit behind these traits; the HTTP client that
// implements them belongs to the surrounding application. The core only
// shapes requests, enforces tier quotas and stores the returned records.

pub mod coach;
pub mod error;
pub mod vision;

use async_trait::async_trait;

pub use coach::CoachSession;
pub use error::{AIError, AIErrorCode, AIResult};
pub use vision::VisionBoard;

use crate::models::ai::{ChatMessage, CoachReply, GeneratedImage, ImageSize};

/// A chat model the coach can converse through
#[async_trait]
pub trait CoachModel: Send + Sync {
    /// Produce a reply to the conversation so far
    async fn reply(&self, messages: &[ChatMessage]) -> AIResult<CoachReply>;
}

/// An image model the vision board generates through
#[async_trait]
pub trait ImageModel: Send + Sync {
    /// Generate an image for the prompt at the requested resolution
    async fn generate(&self, prompt: &str, size: ImageSize) -> AIResult<GeneratedImage>;
}

/// Boxed coach model type
pub type BoxedCoachModel = Box<dyn CoachModel>;

/// Boxed image model type
pub type BoxedImageModel = Box<dyn ImageModel>;
