use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::document::Document;
use super::enums::DocumentType;
use super::ModelError;

/// Type dropdown of the document list: everything, or one type.
/// Serialized as its dropdown value (`"all"` or a type name).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum TypeFilter {
    #[default]
    All,
    Only(DocumentType),
}

impl TypeFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(t) => t.as_str(),
        }
    }

    pub fn matches(&self, doc_type: DocumentType) -> bool {
        match self {
            Self::All => true,
            Self::Only(t) => *t == doc_type,
        }
    }
}

impl From<DocumentType> for TypeFilter {
    fn from(t: DocumentType) -> Self {
        Self::Only(t)
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<TypeFilter> for String {
    fn from(filter: TypeFilter) -> Self {
        filter.as_str().to_string()
    }
}

impl TryFrom<String> for TypeFilter {
    type Error = ModelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl FromStr for TypeFilter {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            other => DocumentType::from_str(other).map(Self::Only),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFilter {
    pub type_filter: TypeFilter,
    pub search_term: String,
}

impl DocumentFilter {
    pub fn new(type_filter: impl Into<TypeFilter>, search_term: impl Into<String>) -> Self {
        Self {
            type_filter: type_filter.into(),
            search_term: search_term.into(),
        }
    }

    /// Type must match and the name must contain the term, ignoring case.
    pub fn matches(&self, doc: &Document) -> bool {
        if !self.type_filter.matches(doc.doc_type) {
            return false;
        }
        if self.search_term.is_empty() {
            return true;
        }
        doc.name
            .to_lowercase()
            .contains(&self.search_term.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentStatus;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn doc(name: &str, doc_type: DocumentType) -> Document {
        Document {
            id: Uuid::new_v4(),
            name: name.into(),
            doc_type,
            size: "1.0 KB".into(),
            size_bytes: 1024,
            upload_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            status: DocumentStatus::Analyzed,
            failure_reason: None,
        }
    }

    #[test]
    fn type_filter_parses_all_and_types() {
        assert_eq!(TypeFilter::from_str("all").unwrap(), TypeFilter::All);
        assert_eq!(
            TypeFilter::from_str("legal").unwrap(),
            TypeFilter::Only(DocumentType::Legal)
        );
        assert!(TypeFilter::from_str("everything").is_err());
    }

    #[test]
    fn type_filter_serializes_as_dropdown_value() {
        let only = TypeFilter::Only(DocumentType::Legal);
        assert_eq!(serde_json::to_string(&only).unwrap(), "\"legal\"");
        assert_eq!(serde_json::to_string(&TypeFilter::All).unwrap(), "\"all\"");

        for filter in [TypeFilter::All, only] {
            let json = serde_json::to_string(&filter).unwrap();
            let back: TypeFilter = serde_json::from_str(&json).unwrap();
            assert_eq!(back, filter);
            assert_eq!(TypeFilter::from_str(filter.as_str()).unwrap(), filter);
        }

        assert!(serde_json::from_str::<TypeFilter>("\"everything\"").is_err());
        assert!(serde_json::from_str::<TypeFilter>(r#"{"only":"legal"}"#).is_err());
    }

    #[test]
    fn document_filter_json_uses_plain_type_value() {
        let filter = DocumentFilter::new(DocumentType::Market, "study");
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json["type_filter"], "market");
        assert_eq!(json["search_term"], "study");
    }

    #[test]
    fn empty_term_matches_any_name() {
        let filter = DocumentFilter::default();
        assert!(filter.matches(&doc("anything.bin", DocumentType::General)));
    }

    #[test]
    fn search_is_case_insensitive() {
        let filter = DocumentFilter::new(TypeFilter::All, "CUSTOMER");
        assert!(filter.matches(&doc("Customer_Research_Study.csv", DocumentType::Market)));
        assert!(!filter.matches(&doc("Q3_Financial_Report.pdf", DocumentType::Financial)));
    }

    #[test]
    fn type_and_term_must_both_match() {
        let filter = DocumentFilter::new(DocumentType::Financial, "report");
        assert!(filter.matches(&doc("Q3_Financial_Report.pdf", DocumentType::Financial)));
        assert!(!filter.matches(&doc("Legal_Report.pdf", DocumentType::Legal)));
        assert!(!filter.matches(&doc("Q3_Financial_Summary.pdf", DocumentType::Financial)));
    }
}
