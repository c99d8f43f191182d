// Vision board service
// Feature: Vision Board (004-vision-board)

use crate::models::ai::{ImageSize, VisionBoardItem};
use crate::models::settings::FREE_IMAGE_SIZE_CEILING;

use super::error::{AIError, AIResult};
use super::BoxedImageModel;

/// Generated-image collection with a free-tier resolution ceiling
///
/// Free accounts generate at 1K; 2K and 4K output is a Pro feature.
pub struct VisionBoard {
    model: BoxedImageModel,
    items: Vec<VisionBoardItem>,
    is_premium: bool,
}

impl VisionBoard {
    pub fn new(model: BoxedImageModel, is_premium: bool) -> Self {
        Self {
            model,
            items: Vec::new(),
            is_premium,
        }
    }

    /// Generate an image for the prompt and pin it to the board
    pub async fn generate(&mut self, prompt: &str, size: ImageSize) -> AIResult<VisionBoardItem> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(AIError::EmptyPrompt);
        }
        if !self.is_premium && size > FREE_IMAGE_SIZE_CEILING {
            log::info!("[vision] {} generation requires Pro, rejecting", size);
            return Err(AIError::ResolutionLocked(size));
        }

        let image = self.model.generate(prompt, size).await?;
        log::debug!("[vision] Generated {} image via {}", size, image.model);

        let item = VisionBoardItem::new(image.image_url, prompt.to_string());
        self.items.push(item.clone());
        Ok(item)
    }

    /// Remove an item from the board; true when something was removed
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[VisionBoardItem] {
        &self.items
    }

    pub fn is_premium(&self) -> bool {
        self.is_premium
    }

    pub fn set_premium(&mut self, is_premium: bool) {
        self.is_premium = is_premium;
    }
}
