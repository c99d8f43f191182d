// AI coach chat session
// Feature: AI Coach Chat (003-ai-coach)

use crate::models::ai::ChatMessage;
use crate::models::habit::Habit;
use crate::models::settings::FREE_COACH_MESSAGES_PER_SESSION;

use super::error::{AIError, AIResult};
use super::BoxedCoachModel;

/// Opening message seeded into every new session
const GREETING: &str =
    "Hi! I'm Orbit, your personal productivity coach. How can I help you build better habits today?";

/// Prompt for the habit suggestion shortcut
const SUGGESTION_PROMPT: &str =
    "Suggest 3 simple, actionable habits. Return only a list separated by commas.";

/// A coach conversation with quota gating and habit context
///
/// Free accounts may send FREE_COACH_MESSAGES_PER_SESSION user messages
/// per session; Pro accounts chat without limit.
pub struct CoachSession {
    model: BoxedCoachModel,
    history: Vec<ChatMessage>,
    is_premium: bool,
    user_messages: usize,
}

impl CoachSession {
    pub fn new(model: BoxedCoachModel, is_premium: bool) -> Self {
        Self {
            model,
            history: vec![ChatMessage::model(GREETING)],
            is_premium,
            user_messages: 0,
        }
    }

    /// Send a user message and append the model's reply to the history
    ///
    /// The live habit collection rides along as a leading context turn;
    /// Gemini has no system role, so the context is framed as a user turn
    /// the same way system prompts are folded in elsewhere.
    pub async fn send(&mut self, habits: &[Habit], text: &str) -> AIResult<ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AIError::EmptyPrompt);
        }
        if !self.is_premium && self.user_messages >= FREE_COACH_MESSAGES_PER_SESSION {
            log::info!(
                "[coach] Free plan quota used up ({} messages), rejecting send",
                FREE_COACH_MESSAGES_PER_SESSION
            );
            return Err(AIError::MessageQuotaExceeded(FREE_COACH_MESSAGES_PER_SESSION));
        }

        let user_message = ChatMessage::user(text);
        let mut request = Vec::with_capacity(self.history.len() + 2);
        request.push(ChatMessage::user(context_prompt(habits)));
        request.extend(self.history.iter().cloned());
        request.push(user_message.clone());

        // Nothing is recorded until the model answers, so a failed call
        // costs no quota and leaves the history untouched.
        let reply = self.model.reply(&request).await?;
        log::debug!("[coach] Reply from {}", reply.model);

        self.user_messages += 1;
        self.history.push(user_message);
        let message = ChatMessage::model(reply.text);
        self.history.push(message.clone());
        Ok(message)
    }

    /// One-shot habit suggestions, outside the conversation and its quota
    pub async fn suggest_habits(&self) -> AIResult<Vec<String>> {
        let reply = self.model.reply(&[ChatMessage::user(SUGGESTION_PROMPT)]).await?;
        Ok(reply
            .text
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect())
    }

    /// User messages left on the free plan; None when premium
    pub fn remaining_free_messages(&self) -> Option<usize> {
        if self.is_premium {
            None
        } else {
            Some(FREE_COACH_MESSAGES_PER_SESSION.saturating_sub(self.user_messages))
        }
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn is_premium(&self) -> bool {
        self.is_premium
    }

    pub fn set_premium(&mut self, is_premium: bool) {
        self.is_premium = is_premium;
    }
}

/// Render the habit collection into the coach's context turn
fn context_prompt(habits: &[Habit]) -> String {
    let mut prompt = String::from(
        "You are Orbit, a supportive productivity coach. Keep replies encouraging, specific and practical.\n\n",
    );
    if habits.is_empty() {
        prompt.push_str("The user is not tracking any habits yet.");
        return prompt;
    }

    prompt.push_str("The user's current habits:\n");
    for habit in habits {
        prompt.push_str(&format!(
            "- \"{}\" ({}): streak {}",
            habit.title, habit.frequency, habit.streak
        ));
        if let Some(goal) = habit.streak_goal {
            prompt.push_str(&format!(", goal {}", goal));
        }
        prompt.push('\n');
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ai::{ChatRole, CoachReply, MODEL_FAST_RESPONSE};
    use crate::models::habit::HabitFrequency;
    use crate::services::ai::CoachModel;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Replies with a fixed text
    struct ScriptedCoach {
        text: String,
    }

    impl ScriptedCoach {
        fn new(text: &str) -> Self {
            Self {
                text: text.to_string(),
            }
        }
    }

    #[async_trait]
    impl CoachModel for ScriptedCoach {
        async fn reply(&self, _messages: &[ChatMessage]) -> AIResult<CoachReply> {
            Ok(CoachReply {
                text: self.text.clone(),
                model: MODEL_FAST_RESPONSE.to_string(),
            })
        }
    }

    /// Records every request so tests can inspect what the model saw
    struct RecordingCoach {
        requests: Arc<Mutex<Vec<Vec<ChatMessage>>>>,
    }

    #[async_trait]
    impl CoachModel for RecordingCoach {
        async fn reply(&self, messages: &[ChatMessage]) -> AIResult<CoachReply> {
            self.requests.lock().unwrap().push(messages.to_vec());
            Ok(CoachReply {
                text: "ok".to_string(),
                model: MODEL_FAST_RESPONSE.to_string(),
            })
        }
    }

    struct FailingCoach;

    #[async_trait]
    impl CoachModel for FailingCoach {
        async fn reply(&self, _messages: &[ChatMessage]) -> AIResult<CoachReply> {
            Err(AIError::ModelError("rate limited".to_string()))
        }
    }

    fn habit(title: &str, streak: u32) -> Habit {
        let mut habit = Habit::new(title.to_string(), HabitFrequency::Daily, None, Some(30));
        habit.streak = streak;
        habit
    }

    #[test]
    fn test_session_opens_with_greeting() {
        let session = CoachSession::new(Box::new(ScriptedCoach::new("hi")), false);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history()[0].role, ChatRole::Model);
        assert!(session.history()[0].text.contains("Orbit"));
    }

    #[tokio::test]
    async fn test_send_appends_both_sides() {
        let mut session = CoachSession::new(Box::new(ScriptedCoach::new("Keep it up!")), false);
        let reply = session.send(&[], "How am I doing?").await.unwrap();
        assert_eq!(reply.role, ChatRole::Model);
        assert_eq!(reply.text, "Keep it up!");
        // greeting + user + model
        assert_eq!(session.history().len(), 3);
    }

    #[tokio::test]
    async fn test_free_quota_is_three_messages() {
        let mut session = CoachSession::new(Box::new(ScriptedCoach::new("ok")), false);
        for _ in 0..FREE_COACH_MESSAGES_PER_SESSION {
            session.send(&[], "hello").await.unwrap();
        }
        let err = session.send(&[], "one more").await.unwrap_err();
        assert_eq!(
            err,
            AIError::MessageQuotaExceeded(FREE_COACH_MESSAGES_PER_SESSION)
        );
        assert_eq!(session.remaining_free_messages(), Some(0));
    }

    #[tokio::test]
    async fn test_premium_chat_is_unlimited() {
        let mut session = CoachSession::new(Box::new(ScriptedCoach::new("ok")), true);
        for _ in 0..(FREE_COACH_MESSAGES_PER_SESSION + 2) {
            session.send(&[], "hello").await.unwrap();
        }
        assert_eq!(session.remaining_free_messages(), None);
    }

    #[tokio::test]
    async fn test_upgrade_mid_session_lifts_quota() {
        let mut session = CoachSession::new(Box::new(ScriptedCoach::new("ok")), false);
        for _ in 0..FREE_COACH_MESSAGES_PER_SESSION {
            session.send(&[], "hello").await.unwrap();
        }
        assert!(session.send(&[], "blocked").await.is_err());
        session.set_premium(true);
        assert!(session.send(&[], "unblocked").await.is_ok());
    }

    #[tokio::test]
    async fn test_blank_input_is_rejected() {
        let mut session = CoachSession::new(Box::new(ScriptedCoach::new("ok")), false);
        assert_eq!(session.send(&[], "   ").await.unwrap_err(), AIError::EmptyPrompt);
        assert_eq!(session.history().len(), 1);
    }

    #[tokio::test]
    async fn test_context_turn_carries_habit_state() {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let model = Box::new(RecordingCoach {
            requests: Arc::clone(&requests),
        });
        let mut session = CoachSession::new(model, false);
        session
            .send(&[habit("Read 10 pages", 4)], "Any advice?")
            .await
            .unwrap();

        let recorded = requests.lock().unwrap();
        let request = &recorded[0];
        // Context turn first, then the greeting, the user message last
        assert_eq!(request[0].role, ChatRole::User);
        assert!(request[0].text.contains("Read 10 pages"));
        assert_eq!(request[1].role, ChatRole::Model);
        assert_eq!(request.last().unwrap().text, "Any advice?");
    }

    #[tokio::test]
    async fn test_failed_call_costs_no_quota() {
        let mut session = CoachSession::new(Box::new(FailingCoach), false);
        let err = session.send(&[], "hello").await.unwrap_err();
        assert_eq!(err, AIError::ModelError("rate limited".to_string()));
        assert_eq!(session.history().len(), 1);
        assert_eq!(
            session.remaining_free_messages(),
            Some(FREE_COACH_MESSAGES_PER_SESSION)
        );
    }

    #[tokio::test]
    async fn test_suggest_habits_parses_comma_list() {
        let model = ScriptedCoach::new("Drink water, Stretch for 5 minutes , Journal");
        let session = CoachSession::new(Box::new(model), false);
        let suggestions = session.suggest_habits().await.unwrap();
        assert_eq!(
            suggestions,
            vec!["Drink water", "Stretch for 5 minutes", "Journal"]
        );
    }

    #[test]
    fn test_context_prompt_lists_habits() {
        let prompt = context_prompt(&[habit("Read 10 pages", 4)]);
        assert!(prompt.contains("Read 10 pages"));
        assert!(prompt.contains("streak 4"));
        assert!(prompt.contains("goal 30"));
        assert!(prompt.contains("DAILY"));
    }

    #[test]
    fn test_context_prompt_without_habits() {
        let prompt = context_prompt(&[]);
        assert!(prompt.contains("not tracking any habits"));
    }
}
