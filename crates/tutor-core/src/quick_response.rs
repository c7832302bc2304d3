//! Local answers for trivial messages
//!
//! Greetings, thanks, farewells and help requests are answered without calling
//! the model service. Matching is done on a normalized form of the message:
//! lower-cased, stripped of everything but ASCII letters, digits and spaces,
//! then trimmed.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static NON_WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9 ]").expect("valid normalization regex"));

const GREETINGS: &[&str] = &["hi", "hii", "hiii", "hey", "hello", "hola", "yo", "sup", "helo"];
const THANKS: &[&str] = &["thanks", "thank you", "thank u", "thnx", "thx", "ty"];
const FAREWELLS: &[&str] = &["bye", "goodbye", "see you", "see ya", "cya"];
const HELP: &[&str] = &["help", "what can you do"];

/// Category of a locally answered message, in matching priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickCategory {
    Greeting,
    Thanks,
    Farewell,
    Help,
}

impl QuickCategory {
    /// All categories in the order they are checked
    pub fn all() -> &'static [QuickCategory] {
        &[
            QuickCategory::Greeting,
            QuickCategory::Thanks,
            QuickCategory::Farewell,
            QuickCategory::Help,
        ]
    }

    /// Phrases that trigger this category
    pub fn phrases(&self) -> &'static [&'static str] {
        match self {
            Self::Greeting => GREETINGS,
            Self::Thanks => THANKS,
            Self::Farewell => FAREWELLS,
            Self::Help => HELP,
        }
    }

    /// Canned reply for this category
    pub fn reply(&self) -> &'static str {
        match self {
            Self::Greeting => {
                "Hello! I'm your AI Learning Assistant. Ask me anything about AI, ML, Deep Learning, \
                 NLP, or Generative AI. I'll search the web and explain it clearly!"
            }
            Self::Thanks => {
                "You're welcome! Keep learning! Feel free to ask more questions anytime."
            }
            Self::Farewell => "Goodbye! Happy learning! Come back whenever you need help.",
            Self::Help => {
                "I can help you with:\n\
                 - Explaining AI, ML, DL, NLP concepts\n\
                 - Answering questions with web search\n\
                 - Suggesting what to learn next\n\
                 - Breaking down complex topics\n\
                 - Providing examples and use cases\n\n\
                 Just type your question!"
            }
        }
    }
}

impl fmt::Display for QuickCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Greeting => write!(f, "greeting"),
            Self::Thanks => write!(f, "thanks"),
            Self::Farewell => write!(f, "farewell"),
            Self::Help => write!(f, "help"),
        }
    }
}

/// A locally resolved reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickResponse {
    pub category: QuickCategory,
    pub reply: &'static str,
}

/// Classifies trivial inputs and answers them locally
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickResponseMatcher;

impl QuickResponseMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Find a canned reply for the message, if it is a trivial one
    pub fn find(&self, message: &str) -> Option<QuickResponse> {
        let normalized = normalize(message);
        if normalized.is_empty() {
            return None;
        }

        QuickCategory::all()
            .iter()
            .find(|category| {
                category
                    .phrases()
                    .iter()
                    .any(|phrase| matches_phrase(&normalized, phrase))
            })
            .map(|category| QuickResponse {
                category: *category,
                reply: category.reply(),
            })
    }
}

/// Lower-case, drop everything except `a-z`, `0-9` and spaces, trim.
pub fn normalize(message: &str) -> String {
    let lower = message.to_lowercase();
    NON_WORD_RE.replace_all(&lower, "").trim().to_string()
}

fn matches_phrase(normalized: &str, phrase: &str) -> bool {
    normalized == phrase
        || normalized
            .strip_prefix(phrase)
            .is_some_and(|rest| rest.starts_with(' '))
}
