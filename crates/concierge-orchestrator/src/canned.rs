//! Replies that never reach a tool: small talk, empty input, out-of-scope
//! questions, and the fixed apology sentences.

use concierge_core::text::{contains_any, has_word, normalize};

pub const EMPTY_INPUT_REPLY: &str = "Please enter a question.";
pub const GREETING_REPLY: &str =
    "Hello! I'm TKRCET College Assistant. How can I help you today? 😊";
pub const THANKS_REPLY: &str =
    "You're welcome! Feel free to ask me anything else about TKRCET. 😊";
pub const FAREWELL_REPLY: &str = "Goodbye! All the best with your studies at TKRCET. 👋";
pub const OUT_OF_SCOPE_REPLY: &str = "I'm a TKRCET College Assistant. I can help with college-related questions, but that seems like a math or science problem. Try asking about admissions, courses, facilities, placements, or campus life!";
pub const NOT_FOUND_REPLY: &str = "I couldn't find specific information. Please try rephrasing your question or visit https://tkrcet.ac.in for more details.";
pub const NO_NOTICES_REPLY: &str =
    "No recent notices found. Please check the college website at https://tkrcet.ac.in/notifications";
pub const TOOL_FAILURE_REPLY: &str = "I couldn't retrieve that information right now. Please try again in a moment or visit https://tkrcet.ac.in for more details.";
pub const LOGIN_FAILED_REPLY: &str = "I couldn't log in to the Student Portal with those credentials. Please check your roll number and password, then ask for your results again.";

const GREETINGS: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "how are you",
    "how r u",
    "how are u",
    "whats up",
    "what's up",
    "good morning",
    "good afternoon",
    "good evening",
];

const THANKS: &[&str] = &["thanks", "thank you", "thank you so much", "thanks a lot", "thx", "ty"];

const FAREWELLS: &[&str] = &["bye", "goodbye", "good bye", "see you", "see ya"];

/// Math and science homework markers.
const NON_COLLEGE: &[&str] = &[
    "formula",
    "equation",
    "calculate",
    "solve",
    "math problem",
    "physics problem",
    "chemistry problem",
    "^2",
    "=",
    "x+y",
    "integral",
    "derivative",
    "theorem",
    "proof",
];

/// Canned reply for a message that is nothing but small talk. Matching is
/// exact after lower-casing and dropping trailing punctuation, so "hi, who is
/// the principal?" still goes to a tool.
pub fn small_talk_reply(query: &str) -> Option<&'static str> {
    let q = normalize(query);
    let q = q.trim_end_matches(['!', '?', '.', ',', ' ']);
    if GREETINGS.contains(&q) {
        Some(GREETING_REPLY)
    } else if THANKS.contains(&q) {
        Some(THANKS_REPLY)
    } else if FAREWELLS.contains(&q) {
        Some(FAREWELL_REPLY)
    } else {
        None
    }
}

/// Obvious math/science problems, unless they mention the college.
pub fn is_out_of_scope(query: &str) -> bool {
    let q = normalize(query);
    if !contains_any(&q, NON_COLLEGE) {
        return false;
    }
    !(has_word(&q, "college") || has_word(&q, "tkrcet"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greetings_match_exactly() {
        assert_eq!(small_talk_reply("Hello!"), Some(GREETING_REPLY));
        assert_eq!(small_talk_reply("  what's up? "), Some(GREETING_REPLY));
        assert_eq!(small_talk_reply("hi, who is the principal?"), None);
        assert_eq!(small_talk_reply("history"), None);
    }

    #[test]
    fn thanks_and_farewells() {
        assert_eq!(small_talk_reply("Thank you."), Some(THANKS_REPLY));
        assert_eq!(small_talk_reply("bye"), Some(FAREWELL_REPLY));
    }

    #[test]
    fn homework_is_out_of_scope() {
        assert!(is_out_of_scope("solve x^2 + 2x = 0"));
        assert!(is_out_of_scope("what is the derivative of sin x"));
        assert!(!is_out_of_scope("what is the formula for college fees calculation"));
        assert!(!is_out_of_scope("who is the principal?"));
    }

    #[test]
    fn words_are_prefix_anchored() {
        // "proof" inside "waterproof" does not start a word.
        assert!(!is_out_of_scope("waterproof hostel roofs"));
    }
}
