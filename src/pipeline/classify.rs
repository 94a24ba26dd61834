use crate::models::DocumentType;

/// Ordered keyword groups. First group with a matching keyword wins.
const KEYWORD_GROUPS: &[(DocumentType, &[&str])] = &[
    (DocumentType::Financial, &["financial", "p&l", "revenue"]),
    (DocumentType::Strategic, &["strategy", "roadmap", "plan"]),
    (DocumentType::Market, &["customer", "market", "research"]),
    (DocumentType::Legal, &["legal", "contract", "terms"]),
];

/// Outcome of filename classification, with the keyword that decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub doc_type: DocumentType,
    pub matched_keyword: Option<&'static str>,
}

impl Classification {
    /// No keyword matched and the type defaulted to `general`.
    pub fn is_fallback(&self) -> bool {
        self.matched_keyword.is_none()
    }
}

/// Classify a document from its filename. Never fails.
pub fn classify(filename: &str) -> DocumentType {
    classify_with_match(filename).doc_type
}

pub fn classify_with_match(filename: &str) -> Classification {
    let lower = filename.to_lowercase();

    for (doc_type, keywords) in KEYWORD_GROUPS {
        if let Some(keyword) = keywords.iter().find(|k| lower.contains(*k)) {
            return Classification {
                doc_type: *doc_type,
                matched_keyword: Some(*keyword),
            };
        }
    }

    tracing::debug!(file = %filename, "No classification keyword matched, defaulting to general");
    Classification {
        doc_type: DocumentType::General,
        matched_keyword: None,
    }
}
