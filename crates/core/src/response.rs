//! Response envelopes shared by the server and the client.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// Body of every successful write: `{ "success": true, "id"?: n, "message": "..." }`.
///
/// `id` is only present on creates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteAck {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DbId>,
    pub message: String,
}

impl WriteAck {
    pub fn created(id: DbId, message: &str) -> Self {
        Self {
            success: true,
            id: Some(id),
            message: message.to_string(),
        }
    }

    pub fn done(message: &str) -> Self {
        Self {
            success: true,
            id: None,
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_is_omitted_when_absent() {
        let json = serde_json::to_value(WriteAck::done("ok")).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "message": "ok"}));

        let json = serde_json::to_value(WriteAck::created(5, "made")).unwrap();
        assert_eq!(json["id"], 5);
    }
}
