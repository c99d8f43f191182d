// Orbit shared library
// Models, services, and utilities shared across the Orbit habit tracker

pub mod models;
pub mod services;

// Re-export models for use in the app shell
pub use models::*;

pub use services::ai::{
    AIError, AIErrorCode, AIResult, BoxedCoachModel, BoxedImageModel, CoachModel, CoachSession,
    ImageModel, VisionBoard,
};
pub use services::habits::{
    derive_analytics, HabitError, HabitErrorCode, HabitResult, HabitTracker, StreakPolicy,
};
