//! Keyword-matching responder
//!
//! This module implements the ordered first-match-wins keyword resolver.
//! The rule table is a process-wide immutable constant: each rule carries a
//! set of lowercase trigger substrings and one fixed reply. Rules are
//! checked top to bottom against the case-folded utterance and the first
//! rule with any matching trigger wins; there is no scoring, longest-match,
//! or rule combination. Utterances that match nothing get a fixed default
//! reply.

use super::Responder;

/// One entry in the resolver's ordered rule table
///
/// Triggers must be lowercase; matching case-folds the utterance, never the
/// triggers.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Lowercase keyword substrings that fire this rule
    pub triggers: &'static [&'static str],
    /// Fixed reply returned when the rule fires
    pub reply: &'static str,
}

/// Ordered rule table, checked top to bottom. Topic priority is
/// experience/work, then skills/technology, then projects/portfolio, then
/// contact/hire; an utterance matching two categories resolves to whichever
/// is listed first.
const RULES: &[Rule] = &[
    Rule {
        triggers: &["experience", "work"],
        reply: "Suliman has over 5 years of professional development experience, \
                specializing in full-stack web development with modern technologies \
                like React, Next.js, and Three.js.",
    },
    Rule {
        triggers: &["skills", "technology"],
        reply: "His core skills include React, TypeScript, Next.js, Three.js, \
                Node.js, and Python. He's particularly passionate about creating \
                immersive 3D web experiences.",
    },
    Rule {
        triggers: &["project", "portfolio"],
        reply: "Suliman has worked on various projects including e-commerce \
                platforms with 3D visualization, AI chat applications, and \
                interactive dashboards. Check out the Projects tab for more details!",
    },
    Rule {
        triggers: &["contact", "hire"],
        reply: "You can reach Suliman at suliman.sultan@email.com or through the \
                contact form. He's always open to discussing new opportunities and \
                exciting projects!",
    },
];

/// Reply returned when no rule matches, inviting a more specific question
const DEFAULT_REPLY: &str = "That's a great question! Suliman is a versatile \
    developer who loves tackling challenging projects. Is there something \
    specific about his background or skills you'd like to know more about?";

const GREETING: &str = "Hi! I'm Suliman's AI assistant. How can I help you \
    learn more about his work and experience?";

/// Resolves one utterance against the rule table
///
/// Case-folds the input to lowercase (a locale-insensitive heuristic fold;
/// this is a keyword matcher, not linguistic analysis) and returns the reply
/// of the first rule whose trigger set matches, or the default reply.
///
/// Pure function of its input and the static rule table.
///
/// # Examples
///
/// ```
/// use foliochat::responder::keyword::resolve;
///
/// let reply = resolve("How can I CONTACT you?");
/// assert!(reply.contains("suliman.sultan@email.com"));
///
/// // No match, including the empty string, falls back to the default.
/// assert!(resolve("").contains("great question"));
/// ```
pub fn resolve(utterance: &str) -> &'static str {
    let normalized = utterance.to_lowercase();

    for rule in RULES {
        if rule.triggers.iter().any(|t| normalized.contains(t)) {
            return rule.reply;
        }
    }

    DEFAULT_REPLY
}

/// Keyword-matching responder over the static rule table
///
/// This is the engine behind the main chat widget: deterministic, ordered,
/// first match wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordResponder;

impl KeywordResponder {
    /// Creates a new keyword responder
    pub fn new() -> Self {
        Self
    }

    /// Returns the rule table in priority order
    ///
    /// # Examples
    ///
    /// ```
    /// use foliochat::responder::KeywordResponder;
    ///
    /// let rules = KeywordResponder::rules();
    /// assert_eq!(rules.len(), 4);
    /// assert!(rules[0].triggers.contains(&"experience"));
    /// ```
    pub fn rules() -> &'static [Rule] {
        RULES
    }

    /// Returns the fallback reply used when no rule matches
    pub fn default_reply() -> &'static str {
        DEFAULT_REPLY
    }
}

impl Responder for KeywordResponder {
    fn respond(&self, utterance: &str) -> String {
        resolve(utterance).to_string()
    }

    fn greeting(&self) -> &'static str {
        GREETING
    }

    fn name(&self) -> &'static str {
        "keyword"
    }
}
