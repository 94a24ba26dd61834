//! Dashboard view: the data behind the document-intelligence panel.
//!
//! One fetch builds everything the panel renders: the filtered document
//! list with status badges, the two-entry insight summary, and the
//! analysis detail for the first document in the filtered list.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{AnalysisRecord, Document, DocumentFilter, Insight};
use crate::registry::{DocumentRegistry, RegistryStats};

/// Number of insights shown in the summary strip.
const INSIGHT_SUMMARY_LEN: usize = 2;

/// A document row in the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentCard {
    pub document: Document,
    pub badge: String,
    pub icon_key: String,
    pub color_key: String,
}

impl From<Document> for DocumentCard {
    fn from(document: Document) -> Self {
        Self {
            badge: document.status.badge().to_string(),
            icon_key: document.icon_key().to_string(),
            color_key: document.color_key().to_string(),
            document,
        }
    }
}

/// Analysis detail for the selected document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisPanel {
    pub document_id: Uuid,
    pub document_name: String,
    pub analysis: AnalysisRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardView {
    pub documents: Vec<DocumentCard>,
    pub insight_summary: Vec<Insight>,
    /// `None` when the list is empty or its first document has no analysis yet.
    pub selected: Option<AnalysisPanel>,
    pub stats: RegistryStats,
}

impl DashboardView {
    pub fn build(registry: &DocumentRegistry, insights: &[Insight], filter: &DocumentFilter) -> Self {
        let documents = registry.filter(filter);

        let selected = documents.first().and_then(|doc| {
            registry.analysis(&doc.id).map(|analysis| AnalysisPanel {
                document_id: doc.id,
                document_name: doc.name.clone(),
                analysis: analysis.clone(),
            })
        });

        Self {
            documents: documents.into_iter().map(DocumentCard::from).collect(),
            insight_summary: insights.iter().take(INSIGHT_SUMMARY_LEN).cloned().collect(),
            selected,
            stats: registry.stats(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DocumentType, TypeFilter};
    use crate::seed::{sample_documents, sample_insights};

    fn seeded_registry() -> DocumentRegistry {
        let mut registry = DocumentRegistry::new();
        for (doc, analysis) in sample_documents() {
            match analysis {
                Some(a) => registry.insert_analyzed(doc, a).unwrap(),
                None => registry.insert(doc).unwrap(),
            }
        }
        registry
    }

    #[test]
    fn default_view_selects_first_document() {
        let registry = seeded_registry();
        let insights = sample_insights().unwrap();
        let view = DashboardView::build(&registry, &insights, &DocumentFilter::default());

        assert_eq!(view.documents.len(), 3);
        assert_eq!(view.insight_summary.len(), 2);
        let selected = view.selected.unwrap();
        assert_eq!(selected.document_name, "Q3_Financial_Report.pdf");
        assert_eq!(view.stats.analyzed, 2);
        assert_eq!(view.stats.analyzing, 1);
    }

    #[test]
    fn cards_carry_badges_and_hints() {
        let registry = seeded_registry();
        let view = DashboardView::build(&registry, &[], &DocumentFilter::default());

        assert_eq!(view.documents[0].badge, "check");
        assert_eq!(view.documents[0].icon_key, "dollar-sign");
        assert_eq!(view.documents[2].badge, "spinner");
        assert_eq!(view.documents[2].color_key, "blue");
        assert!(view.insight_summary.is_empty());
    }

    #[test]
    fn no_selection_when_first_document_is_pending() {
        let registry = seeded_registry();
        let view = DashboardView::build(
            &registry,
            &[],
            &DocumentFilter::new(DocumentType::Strategic, ""),
        );
        assert_eq!(view.documents.len(), 1);
        assert!(view.selected.is_none());
    }

    #[test]
    fn no_selection_when_filter_matches_nothing() {
        let registry = seeded_registry();
        let view = DashboardView::build(
            &registry,
            &[],
            &DocumentFilter::new(TypeFilter::All, "no-such-file"),
        );
        assert!(view.documents.is_empty());
        assert!(view.selected.is_none());
        assert_eq!(view.stats.total, 3);
    }

    #[test]
    fn view_serializes_for_rendering() {
        let registry = seeded_registry();
        let view = DashboardView::build(&registry, &[], &DocumentFilter::default());
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["documents"][1]["document"]["doc_type"], "market");
        assert_eq!(json["stats"]["total"], 3);
    }
}
