// AI feature data models
// Chat and vision board records produced by the hosted Gemini models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Model for quick, low-cost responses (habit suggestions)
pub const MODEL_FAST_RESPONSE: &str = "gemini-2.5-flash-lite-latest";
/// Model for complex coaching conversations (Pro tier)
pub const MODEL_COMPLEX_TASK: &str = "gemini-3-pro-preview";
/// Model for vision board image generation
pub const MODEL_IMAGE_GEN: &str = "gemini-3-pro-image-preview";
/// Model for vision board image edits
pub const MODEL_IMAGE_EDIT: &str = "gemini-2.5-flash-image";

/// Coach model for the given tier
/// Free accounts chat with the fast model; Pro unlocks deep coaching.
pub fn coach_model(is_premium: bool) -> &'static str {
    if is_premium {
        MODEL_COMPLEX_TASK
    } else {
        MODEL_FAST_RESPONSE
    }
}

/// Who authored a chat message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

impl std::fmt::Display for ChatRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatRole::User => write!(f, "user"),
            ChatRole::Model => write!(f, "model"),
        }
    }
}

/// A single coach chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Unique identifier (UUID v4)
    pub id: String,
    pub role: ChatRole,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ChatRole::User, text)
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self::new(ChatRole::Model, text)
    }

    fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Output resolution tier for generated images
/// Ordered so a tier ceiling can be expressed as a comparison.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum ImageSize {
    #[serde(rename = "1K")]
    OneK,
    #[serde(rename = "2K")]
    TwoK,
    #[serde(rename = "4K")]
    FourK,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageSize::OneK => write!(f, "1K"),
            ImageSize::TwoK => write!(f, "2K"),
            ImageSize::FourK => write!(f, "4K"),
        }
    }
}

/// A generated image pinned to the vision board
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisionBoardItem {
    /// Unique identifier (UUID v4)
    pub id: String,
    /// Reference to the generated image
    pub image_url: String,
    /// Prompt the image was generated from
    pub prompt: String,
    pub created_at: DateTime<Utc>,
}

impl VisionBoardItem {
    pub fn new(image_url: String, prompt: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            image_url,
            prompt,
            created_at: Utc::now(),
        }
    }
}

/// Reply returned by a coach model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachReply {
    /// Generated reply text
    pub text: String,
    /// Model that produced the reply
    pub model: String,
}

/// Image reference returned by an image model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    /// Reference to the generated image
    pub image_url: String,
    /// Model that produced the image
    pub model: String,
}
