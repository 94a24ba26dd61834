use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{DocumentStatus, DocumentType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: Uuid,
    pub name: String,
    pub doc_type: DocumentType,
    /// Display form of `size_bytes`, e.g. "2.4 MB".
    pub size: String,
    pub size_bytes: u64,
    pub upload_date: NaiveDate,
    pub status: DocumentStatus,
    pub failure_reason: Option<String>,
}

impl Document {
    pub fn icon_key(&self) -> &'static str {
        self.doc_type.icon_key()
    }

    pub fn color_key(&self) -> &'static str {
        self.doc_type.color_key()
    }
}
