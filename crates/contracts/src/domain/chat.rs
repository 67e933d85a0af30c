//! Chat transcript model.

use serde::{Deserialize, Serialize};

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageDirection {
    Sent,
    Received,
}

impl MessageDirection {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "sent" => Ok(MessageDirection::Sent),
            "received" => Ok(MessageDirection::Received),
            _ => Err(format!("Unknown message direction: {}", s)),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MessageDirection::Sent => "sent",
            MessageDirection::Received => "received",
        }
    }
}

/// One transcript entry.
///
/// The transcript is append-only: entries are never edited or removed, and
/// `id` is a per-session sequence number that strictly increases in insertion
/// order. `quick_replies` means the assistant is soliciting one of exactly
/// those strings back; `image_picker` renders an upload trigger on the bubble.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: u32,
    pub text: String,
    pub direction: MessageDirection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quick_replies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub image_picker: bool,
}

impl ChatMessage {
    pub fn sent(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            direction: MessageDirection::Sent,
            quick_replies: None,
            image_picker: false,
        }
    }

    pub fn received(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            direction: MessageDirection::Received,
            quick_replies: None,
            image_picker: false,
        }
    }

    pub fn with_quick_replies(mut self, replies: &[&str]) -> Self {
        self.quick_replies = Some(replies.iter().map(|r| r.to_string()).collect());
        self
    }

    pub fn with_image_picker(mut self) -> Self {
        self.image_picker = true;
        self
    }

    pub fn is_sent(&self) -> bool {
        self.direction == MessageDirection::Sent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let msg = ChatMessage::sent(4, "hello");
        assert_eq!(msg.id, 4);
        assert_eq!(msg.direction, MessageDirection::Sent);
        assert!(msg.quick_replies.is_none());
        assert!(!msg.image_picker);

        let msg = ChatMessage::received(5, "pick one").with_quick_replies(&["Yes", "No"]);
        assert_eq!(
            msg.quick_replies,
            Some(vec!["Yes".to_string(), "No".to_string()])
        );

        let msg = ChatMessage::received(7, "upload please").with_image_picker();
        assert!(msg.image_picker);
    }

    #[test]
    fn test_wire_form_is_camel_case() {
        let msg = ChatMessage::received(5, "pick one").with_quick_replies(&["Yes"]);
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["direction"], "received");
        assert_eq!(json["quickReplies"][0], "Yes");
        assert!(json.get("imagePicker").is_none());

        let back: ChatMessage = serde_json::from_value(json).unwrap();
        assert_eq!(back, msg);
    }

    #[test]
    fn test_direction_round_trip() {
        for s in ["sent", "received"] {
            assert_eq!(MessageDirection::from_str(s).unwrap().as_str(), s);
        }
        assert!(MessageDirection::from_str("edited").is_err());
    }
}
