use serde::{Deserialize, Serialize};

use super::types::AgentResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One turn of a chat session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: Option<String>,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: Some(content.into()),
        }
    }

    pub fn assistant(content: Option<String>) -> Self {
        Self {
            role: Role::Assistant,
            content,
        }
    }
}

/// Read the final reply out of a chat transcript.
///
/// A usable reply needs at least two turns (the instruction and an answer)
/// and a final turn carrying non-blank text. Anything else yields an empty
/// [`AgentResponse`] rather than an error.
pub fn last_reply(transcript: &[ChatTurn]) -> AgentResponse {
    if transcript.len() < 2 {
        return AgentResponse::empty();
    }

    match transcript.last().and_then(|turn| turn.content.as_deref()) {
        Some(text) if !text.trim().is_empty() => AgentResponse::new(text),
        _ => AgentResponse::empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_reply_two_turns() {
        let transcript = vec![
            ChatTurn::user("build a form"),
            ChatTurn::assistant(Some("{\"a\":\"b\"}".to_string())),
        ];

        assert_eq!(
            last_reply(&transcript).content.as_deref(),
            Some("{\"a\":\"b\"}")
        );
    }

    #[test]
    fn test_last_reply_empty_transcript() {
        assert_eq!(last_reply(&[]), AgentResponse::empty());
    }

    #[test]
    fn test_last_reply_single_turn() {
        let transcript = vec![ChatTurn::user("build a form")];
        assert_eq!(last_reply(&transcript), AgentResponse::empty());
    }

    #[test]
    fn test_last_reply_final_turn_without_text() {
        let transcript = vec![ChatTurn::user("build a form"), ChatTurn::assistant(None)];
        assert_eq!(last_reply(&transcript), AgentResponse::empty());
    }

    #[test]
    fn test_last_reply_final_turn_blank() {
        let transcript = vec![
            ChatTurn::user("build a form"),
            ChatTurn::assistant(Some("  \n".to_string())),
        ];
        assert_eq!(last_reply(&transcript), AgentResponse::empty());
    }

    #[test]
    fn test_last_reply_uses_last_of_many_turns() {
        let transcript = vec![
            ChatTurn::user("one"),
            ChatTurn::assistant(Some("first".to_string())),
            ChatTurn::user("two"),
            ChatTurn::assistant(Some("second".to_string())),
        ];
        assert_eq!(last_reply(&transcript).content.as_deref(), Some("second"));
    }
}
