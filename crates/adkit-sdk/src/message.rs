use serde::{Deserialize, Serialize};

/// Action value embedded content sends to request dismissal.
pub const CLOSE_ACTION: &str = "close";

/// Inbound message from embedded ad content.
///
/// Embedded views carry a message channel on which the hosted content posts
/// JSON values like `{"action":"close"}`. A close action must feed the same
/// dismissal path as the user-facing close control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlMessage {
    pub action: String,
}

impl ControlMessage {
    /// Parses a raw JSON message, returning `None` for anything malformed.
    pub fn parse(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Whether this message requests dismissal of the presented view.
    pub fn is_close(&self) -> bool {
        self.action == CLOSE_ACTION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_close_message() {
        let message = ControlMessage::parse(r#"{"action":"close"}"#).unwrap();
        assert!(message.is_close());
    }

    #[test]
    fn other_actions_are_not_close() {
        let message = ControlMessage::parse(r#"{"action":"resize"}"#).unwrap();
        assert!(!message.is_close());
    }

    #[test]
    fn malformed_payloads_yield_none() {
        assert_eq!(ControlMessage::parse("not json"), None);
        assert_eq!(ControlMessage::parse(r#"{"verb":"close"}"#), None);
    }
}
