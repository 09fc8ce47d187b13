use serde::Deserialize;

use super::TurnRole;

/// One prior turn of a conversation, as supplied by the client.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatTurn {
    pub role: TurnRole,
    pub content: String,
}

impl ChatTurn {
    pub fn new(role: TurnRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}
