//! Chat session turn engine
//!
//! A session owns one conversation and one responder and drives the
//! turn-taking timeline: the user message is appended immediately, the reply
//! is computed synchronously, and the assistant message is appended only
//! after a fixed simulated thinking delay. The delay is a cooperative
//! `tokio::time::sleep`, not a wait on any resource; dropping the session
//! drops any in-flight delay together with the conversation it would have
//! appended into.

use std::time::Duration;

use tracing::debug;

use crate::conversation::{Conversation, Message};
use crate::responder::Responder;

/// One chat session: a conversation paired with a responder
///
/// Exclusive mutable access to the session gives the turn-ordering
/// guarantee: the assistant reply for utterance N is appended after user
/// message N and before any user message N+1 is processed. Only one send can
/// be pending per conversation.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use foliochat::responder::KeywordResponder;
/// use foliochat::session::ChatSession;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mut session = ChatSession::new(Box::new(KeywordResponder::new()), Duration::ZERO);
/// let reply = session.send("How can I contact you?").await;
/// assert!(reply.unwrap().contains("suliman.sultan@email.com"));
/// assert_eq!(session.conversation().len(), 3); // greeting, user, assistant
/// # }
/// ```
pub struct ChatSession {
    responder: Box<dyn Responder>,
    conversation: Conversation,
    reply_delay: Duration,
}

impl ChatSession {
    /// Creates a session seeded with the responder's greeting
    ///
    /// # Arguments
    ///
    /// * `responder` - The canned-reply engine for this session
    /// * `reply_delay` - Simulated thinking delay before each reply is appended
    pub fn new(responder: Box<dyn Responder>, reply_delay: Duration) -> Self {
        let conversation = Conversation::with_greeting(responder.greeting());
        Self {
            responder,
            conversation,
            reply_delay,
        }
    }

    /// Sends one user utterance and emits the assistant reply
    ///
    /// A blank (empty or whitespace-only) utterance is a no-op send: nothing
    /// is appended and `None` is returned. Otherwise the user message is
    /// appended immediately, the reply is computed synchronously, and after
    /// the simulated delay exactly one assistant message is appended.
    ///
    /// # Arguments
    ///
    /// * `utterance` - Free-text user input
    ///
    /// # Returns
    ///
    /// The reply text, or `None` for a blank utterance
    pub async fn send(&mut self, utterance: &str) -> Option<String> {
        if utterance.trim().is_empty() {
            debug!("Ignoring blank utterance");
            return None;
        }

        self.conversation.push_user(utterance);

        // The reply is resolved immediately; the delay is presentation only.
        let reply = self.responder.respond(utterance);
        debug!(responder = self.responder.name(), "Resolved reply");

        tokio::time::sleep(self.reply_delay).await;

        self.conversation.push_assistant(reply.clone());
        Some(reply)
    }

    /// Returns the conversation transcript
    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// Returns the responder kind driving this session
    pub fn responder_name(&self) -> &'static str {
        self.responder.name()
    }

    /// Returns the configured reply delay
    pub fn reply_delay(&self) -> Duration {
        self.reply_delay
    }

    /// Discards the transcript and restarts from the greeting
    ///
    /// The replacement conversation gets fresh ids; the old transcript is
    /// dropped entirely, not truncated.
    pub fn reset(&mut self) {
        self.conversation = Conversation::with_greeting(self.responder.greeting());
    }

    /// Returns the most recent message, if any
    pub fn last_message(&self) -> Option<&Message> {
        self.conversation.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conversation::Sender;
    use crate::responder::KeywordResponder;

    fn session() -> ChatSession {
        ChatSession::new(Box::new(KeywordResponder::new()), Duration::ZERO)
    }

    #[tokio::test]
    async fn test_new_session_seeds_greeting() {
        let session = session();
        assert_eq!(session.conversation().len(), 1);
        let seed = &session.conversation().messages()[0];
        assert_eq!(seed.sender, Sender::Assistant);
        assert_eq!(seed.id, 1);
    }

    #[tokio::test]
    async fn test_send_appends_user_then_assistant() {
        let mut session = session();
        let reply = session.send("tell me about your experience").await;

        assert!(reply.is_some());
        let messages = session.conversation().messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].sender, Sender::User);
        assert_eq!(messages[1].text, "tell me about your experience");
        assert_eq!(messages[2].sender, Sender::Assistant);
        assert_eq!(messages[2].text, reply.unwrap());
    }

    #[tokio::test]
    async fn test_blank_send_is_noop() {
        let mut session = session();
        assert!(session.send("").await.is_none());
        assert!(session.send("   \t  ").await.is_none());
        assert_eq!(session.conversation().len(), 1);
    }

    #[tokio::test]
    async fn test_sends_interleave_in_order() {
        let mut session = session();
        session.send("first question about skills").await;
        session.send("second question about projects").await;

        let senders: Vec<Sender> = session
            .conversation()
            .messages()
            .iter()
            .map(|m| m.sender)
            .collect();
        assert_eq!(
            senders,
            vec![
                Sender::Assistant,
                Sender::User,
                Sender::Assistant,
                Sender::User,
                Sender::Assistant,
            ]
        );

        let ids: Vec<u64> = session
            .conversation()
            .messages()
            .iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_waits_for_delay() {
        let mut session =
            ChatSession::new(Box::new(KeywordResponder::new()), Duration::from_secs(1));

        let start = tokio::time::Instant::now();
        let reply = session.send("How can I contact you?").await;

        assert_eq!(start.elapsed(), Duration::from_secs(1));
        assert!(reply.unwrap().contains("suliman.sultan@email.com"));
    }

    #[tokio::test]
    async fn test_reset_restarts_from_greeting() {
        let mut session = session();
        session.send("hello skills").await;
        assert_eq!(session.conversation().len(), 3);

        session.reset();
        assert_eq!(session.conversation().len(), 1);
        assert_eq!(session.conversation().messages()[0].id, 1);
    }

    #[tokio::test]
    async fn test_last_message_is_reply_after_send() {
        let mut session = session();
        session.send("portfolio please").await;
        let last = session.last_message().expect("conversation is not empty");
        assert_eq!(last.sender, Sender::Assistant);
    }

    #[tokio::test]
    async fn test_responder_name_and_delay_accessors() {
        let session = session();
        assert_eq!(session.responder_name(), "keyword");
        assert_eq!(session.reply_delay(), Duration::ZERO);
    }
}
