//! Conversation management
//!
//! This module implements the append-only message sequence that backs a chat
//! session. A conversation starts with one seed assistant greeting and grows
//! only through appends; messages are never edited or removed, and ids
//! strictly increase with append order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who produced a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// A message typed by the user
    User,
    /// A reply produced by the responder
    Assistant,
}

impl std::fmt::Display for Sender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// One turn in a conversation
///
/// The `id` is unique within its conversation and used only for stable
/// display ordering; the timestamp is set when the message is appended.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Monotonically increasing identifier within the conversation
    pub id: u64,
    /// Free-form text content
    pub text: String,
    /// Who produced the message
    pub sender: Sender,
    /// Creation time of the message
    pub timestamp: DateTime<Utc>,
}

/// Append-only ordered sequence of messages for one chat session
///
/// Conversations are memory-only and reset with the process; there is no
/// persistence across sessions.
///
/// # Examples
///
/// ```
/// use foliochat::conversation::{Conversation, Sender};
///
/// let mut conversation = Conversation::with_greeting("Hi there!");
/// conversation.push_user("Hello");
/// assert_eq!(conversation.len(), 2);
/// assert_eq!(conversation.messages()[0].sender, Sender::Assistant);
/// assert_eq!(conversation.messages()[1].id, 2);
/// ```
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<Message>,
    next_id: u64,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    /// Creates an empty conversation
    ///
    /// Ids start at 1 for the first appended message.
    pub fn new() -> Self {
        Self {
            messages: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a conversation seeded with one assistant greeting
    ///
    /// # Arguments
    ///
    /// * `greeting` - The seed assistant message text
    ///
    /// # Examples
    ///
    /// ```
    /// use foliochat::conversation::Conversation;
    ///
    /// let conversation = Conversation::with_greeting("Welcome!");
    /// assert_eq!(conversation.len(), 1);
    /// assert_eq!(conversation.messages()[0].id, 1);
    /// ```
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        let mut conversation = Self::new();
        conversation.push_assistant(greeting);
        conversation
    }

    /// Appends a user message and returns a reference to it
    pub fn push_user(&mut self, text: impl Into<String>) -> &Message {
        self.push(Sender::User, text)
    }

    /// Appends an assistant message and returns a reference to it
    pub fn push_assistant(&mut self, text: impl Into<String>) -> &Message {
        self.push(Sender::Assistant, text)
    }

    fn push(&mut self, sender: Sender, text: impl Into<String>) -> &Message {
        let message = Message {
            id: self.next_id,
            text: text.into(),
            sender,
            timestamp: Utc::now(),
        };
        self.next_id += 1;
        self.messages.push(message);
        // Just pushed, so the vec is non-empty.
        self.messages.last().unwrap()
    }

    /// Returns all messages in append order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Returns the most recently appended message, if any
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Returns the number of messages in the conversation
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns true if the conversation has no messages
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
