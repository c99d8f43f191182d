// Services module
// Business logic for habit tracking and the AI features

pub mod ai;
pub mod habits;
