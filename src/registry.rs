//! In-memory document registry for one session.
//!
//! Holds the ordered document list and the analysis map keyed by document
//! id. Insertion order is display order. The only status transitions are
//! `analyzing → analyzed` (exactly once) and, for rejected uploads,
//! insertion directly as `failed`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{AnalysisRecord, Document, DocumentFilter, DocumentStatus};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Document already registered: {0}")]
    DuplicateDocument(Uuid),

    #[error("Document not found: {0}")]
    DocumentNotFound(Uuid),

    #[error("Invalid status transition for {id}: {from} -> {to}")]
    InvalidTransition {
        id: Uuid,
        from: DocumentStatus,
        to: DocumentStatus,
    },
}

/// Document counts per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    pub total: usize,
    pub analyzing: usize,
    pub analyzed: usize,
    pub failed: usize,
}

#[derive(Debug, Default)]
pub struct DocumentRegistry {
    documents: Vec<Document>,
    analyses: HashMap<Uuid, AnalysisRecord>,
}

impl DocumentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a document. Ids must be unique for the lifetime of the registry.
    pub fn insert(&mut self, document: Document) -> Result<(), RegistryError> {
        if self.contains(&document.id) {
            return Err(RegistryError::DuplicateDocument(document.id));
        }
        self.documents.push(document);
        Ok(())
    }

    /// Insert an already-analyzed document together with its analysis.
    /// Used for sample fixtures.
    pub fn insert_analyzed(
        &mut self,
        document: Document,
        analysis: AnalysisRecord,
    ) -> Result<(), RegistryError> {
        if document.status != DocumentStatus::Analyzed {
            return Err(RegistryError::InvalidTransition {
                id: document.id,
                from: document.status,
                to: DocumentStatus::Analyzed,
            });
        }
        let id = document.id;
        self.insert(document)?;
        self.analyses.insert(id, analysis);
        Ok(())
    }

    /// Move a document from `analyzing` to `analyzed` and attach its analysis.
    pub fn complete_analysis(
        &mut self,
        id: &Uuid,
        analysis: AnalysisRecord,
    ) -> Result<&Document, RegistryError> {
        let doc = self
            .documents
            .iter_mut()
            .find(|d| d.id == *id)
            .ok_or(RegistryError::DocumentNotFound(*id))?;

        if doc.status.is_terminal() {
            return Err(RegistryError::InvalidTransition {
                id: *id,
                from: doc.status,
                to: DocumentStatus::Analyzed,
            });
        }

        doc.status = DocumentStatus::Analyzed;
        self.analyses.insert(*id, analysis);
        Ok(doc)
    }

    pub fn contains(&self, id: &Uuid) -> bool {
        self.documents.iter().any(|d| d.id == *id)
    }

    pub fn get(&self, id: &Uuid) -> Option<&Document> {
        self.documents.iter().find(|d| d.id == *id)
    }

    pub fn analysis(&self, id: &Uuid) -> Option<&AnalysisRecord> {
        self.analyses.get(id)
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Documents matching the filter, in insertion order.
    pub fn filter(&self, filter: &DocumentFilter) -> Vec<Document> {
        self.documents
            .iter()
            .filter(|d| filter.matches(d))
            .cloned()
            .collect()
    }

    pub fn stats(&self) -> RegistryStats {
        self.documents
            .iter()
            .fold(RegistryStats::default(), |mut stats, doc| {
                stats.total += 1;
                match doc.status {
                    DocumentStatus::Analyzing => stats.analyzing += 1,
                    DocumentStatus::Analyzed => stats.analyzed += 1,
                    DocumentStatus::Failed => stats.failed += 1,
                }
                stats
            })
    }
}
