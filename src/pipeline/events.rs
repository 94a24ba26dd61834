use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::DocumentType;

/// Document lifecycle notifications for the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DocumentEvent {
    Ingested {
        id: Uuid,
        name: String,
        doc_type: DocumentType,
    },
    Analyzed {
        id: Uuid,
        doc_type: DocumentType,
    },
    Rejected {
        id: Uuid,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_serializes_with_tag() {
        let id = Uuid::new_v4();
        let event = DocumentEvent::Analyzed {
            id,
            doc_type: DocumentType::Market,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"event\":\"analyzed\""));
        assert!(json.contains("\"doc_type\":\"market\""));
        assert!(json.contains(&format!("\"id\":\"{id}\"")));
    }
}
