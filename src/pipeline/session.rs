//! Session-scoped ingestion pipeline.
//!
//! `IntelligenceSession` owns the document registry, the analysis map, the
//! seeded insights and the pending analysis timers for one dashboard
//! session. Ingested documents start `analyzing`; a deferred task moves each
//! one to `analyzed` after `ANALYSIS_DELAY` and attaches the template
//! analysis for its type.
//!
//! Timer tasks hold a weak reference to the session state. Dropping the
//! session drops the state, which cancels every pending timer.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard, Weak};

use chrono::Utc;
use tokio::runtime::Handle;
use tokio::sync::broadcast;
use uuid::Uuid;

use super::analysis::generate;
use super::classify::classify_with_match;
use super::error::{IngestionError, PipelineError};
use super::events::DocumentEvent;
use super::timer::{DeferredTask, TimerSet};
use super::upload::UploadedFile;
use super::validation::validate_upload;
use crate::config::{ANALYSIS_DELAY, EVENT_CHANNEL_CAPACITY};
use crate::dashboard::DashboardView;
use crate::models::{
    AnalysisRecord, Document, DocumentFilter, DocumentStatus, DocumentType, Insight, TypeFilter,
};
use crate::registry::{DocumentRegistry, RegistryStats};
use crate::seed;

/// Per-file result of validated ingestion.
#[derive(Debug, Clone, PartialEq)]
pub enum IngestOutcome {
    Accepted { id: Uuid },
    Rejected { id: Uuid, error: IngestionError },
}

impl IngestOutcome {
    pub fn id(&self) -> Uuid {
        match self {
            Self::Accepted { id } | Self::Rejected { id, .. } => *id,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

#[derive(Default)]
struct SessionState {
    registry: DocumentRegistry,
    timers: TimerSet,
    insights: Vec<Insight>,
    closed: bool,
}

pub struct IntelligenceSession {
    state: Arc<RwLock<SessionState>>,
    events: broadcast::Sender<DocumentEvent>,
}

impl IntelligenceSession {
    /// Empty session: no documents, no insights.
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            state: Arc::new(RwLock::new(SessionState::default())),
            events,
        }
    }

    /// Session pre-loaded with the sample documents, analyses and insights.
    pub fn with_sample_data() -> Result<Self, PipelineError> {
        let session = Self::new();
        {
            let mut state = session.write_state()?;
            for (document, analysis) in seed::sample_documents() {
                match analysis {
                    Some(analysis) => state.registry.insert_analyzed(document, analysis)?,
                    None => state.registry.insert(document)?,
                }
            }
            state.insights = seed::sample_insights()?;
            tracing::debug!(documents = state.registry.len(), "Loaded sample data");
        }
        Ok(session)
    }

    // ── Lock access ─────────────────────────────────────────

    fn read_state(&self) -> Result<RwLockReadGuard<'_, SessionState>, PipelineError> {
        self.state.read().map_err(|_| PipelineError::LockPoisoned)
    }

    fn write_state(&self) -> Result<RwLockWriteGuard<'_, SessionState>, PipelineError> {
        self.state.write().map_err(|_| PipelineError::LockPoisoned)
    }

    // ── Ingestion ───────────────────────────────────────────

    /// Register uploaded files and schedule their analysis.
    ///
    /// Every file is accepted; unknown names classify as `general`.
    /// Must be called inside a tokio runtime.
    pub fn ingest<I>(&self, files: I) -> Result<Vec<Uuid>, PipelineError>
    where
        I: IntoIterator<Item = UploadedFile>,
    {
        let runtime = Handle::try_current().map_err(|_| PipelineError::NoRuntime)?;
        let mut state = self.write_state()?;
        if state.closed {
            return Err(PipelineError::SessionClosed);
        }

        let mut ids = Vec::new();
        for file in files {
            ids.push(self.accept(&mut state, &runtime, &file)?);
        }
        Ok(ids)
    }

    /// Like [`ingest`](Self::ingest), but each file is validated first.
    /// Rejected files are registered as `failed` and get no analysis.
    pub fn ingest_validated<I>(&self, files: I) -> Result<Vec<IngestOutcome>, PipelineError>
    where
        I: IntoIterator<Item = UploadedFile>,
    {
        let runtime = Handle::try_current().map_err(|_| PipelineError::NoRuntime)?;
        let mut state = self.write_state()?;
        if state.closed {
            return Err(PipelineError::SessionClosed);
        }

        let mut outcomes = Vec::new();
        for file in files {
            let outcome = match validate_upload(&file) {
                Ok(()) => IngestOutcome::Accepted {
                    id: self.accept(&mut state, &runtime, &file)?,
                },
                Err(e) => {
                    let error = IngestionError::from(e);
                    let id = self.reject(&mut state, &file, &error)?;
                    IngestOutcome::Rejected { id, error }
                }
            };
            outcomes.push(outcome);
        }
        Ok(outcomes)
    }

    fn accept(
        &self,
        state: &mut SessionState,
        runtime: &Handle,
        file: &UploadedFile,
    ) -> Result<Uuid, PipelineError> {
        let classification = classify_with_match(&file.name);
        let document = new_document(file, classification.doc_type, DocumentStatus::Analyzing, None);
        let id = document.id;
        let doc_type = document.doc_type;
        state.registry.insert(document)?;

        let task = self.schedule_analysis(runtime, id, doc_type);
        state.timers.insert(id, task);

        tracing::info!(
            doc_id = %id,
            file = %file.name,
            doc_type = %doc_type,
            keyword = ?classification.matched_keyword,
            "Document ingested, analysis scheduled"
        );
        let _ = self.events.send(DocumentEvent::Ingested {
            id,
            name: file.name.clone(),
            doc_type,
        });
        Ok(id)
    }

    fn reject(
        &self,
        state: &mut SessionState,
        file: &UploadedFile,
        error: &IngestionError,
    ) -> Result<Uuid, PipelineError> {
        let reason = error.to_string();
        let document = new_document(
            file,
            classify_with_match(&file.name).doc_type,
            DocumentStatus::Failed,
            Some(reason.clone()),
        );
        let id = document.id;
        state.registry.insert(document)?;

        tracing::warn!(doc_id = %id, file = %file.name, error = %reason, "Upload rejected");
        let _ = self.events.send(DocumentEvent::Rejected { id, reason });
        Ok(id)
    }

    fn schedule_analysis(&self, runtime: &Handle, id: Uuid, doc_type: DocumentType) -> DeferredTask {
        let state = Arc::downgrade(&self.state);
        let events = self.events.clone();
        DeferredTask::spawn_on(runtime, ANALYSIS_DELAY, move || {
            complete_analysis(&state, &events, id, doc_type);
        })
    }

    // ── Teardown ────────────────────────────────────────────

    /// Cancel every pending analysis and refuse further ingestion.
    /// Documents still `analyzing` stay that way.
    pub fn shutdown(&self) -> Result<usize, PipelineError> {
        let mut state = self.write_state()?;
        state.closed = true;
        let cancelled = state.timers.cancel_all();
        tracing::info!(cancelled, "Intelligence session shut down");
        Ok(cancelled)
    }

    pub fn is_closed(&self) -> Result<bool, PipelineError> {
        Ok(self.read_state()?.closed)
    }

    // ── Reads ───────────────────────────────────────────────

    pub fn subscribe(&self) -> broadcast::Receiver<DocumentEvent> {
        self.events.subscribe()
    }

    pub fn documents(&self) -> Result<Vec<Document>, PipelineError> {
        Ok(self.read_state()?.registry.documents().to_vec())
    }

    pub fn document(&self, id: &Uuid) -> Result<Option<Document>, PipelineError> {
        Ok(self.read_state()?.registry.get(id).cloned())
    }

    pub fn analysis(&self, id: &Uuid) -> Result<Option<AnalysisRecord>, PipelineError> {
        Ok(self.read_state()?.registry.analysis(id).cloned())
    }

    /// Documents of the given type (or all) whose name contains `search_term`.
    pub fn filter(
        &self,
        type_filter: impl Into<TypeFilter>,
        search_term: &str,
    ) -> Result<Vec<Document>, PipelineError> {
        self.filter_by(&DocumentFilter::new(type_filter, search_term))
    }

    pub fn filter_by(&self, filter: &DocumentFilter) -> Result<Vec<Document>, PipelineError> {
        Ok(self.read_state()?.registry.filter(filter))
    }

    pub fn insights(&self) -> Result<Vec<Insight>, PipelineError> {
        Ok(self.read_state()?.insights.clone())
    }

    pub fn stats(&self) -> Result<RegistryStats, PipelineError> {
        Ok(self.read_state()?.registry.stats())
    }

    pub fn overview(&self, filter: &DocumentFilter) -> Result<DashboardView, PipelineError> {
        let state = self.read_state()?;
        Ok(DashboardView::build(&state.registry, &state.insights, filter))
    }

    pub fn pending_count(&self) -> Result<usize, PipelineError> {
        Ok(self.read_state()?.timers.len())
    }

    pub fn is_pending(&self, id: &Uuid) -> Result<bool, PipelineError> {
        Ok(self.read_state()?.timers.contains(id))
    }
}

impl Default for IntelligenceSession {
    fn default() -> Self {
        Self::new()
    }
}

fn new_document(
    file: &UploadedFile,
    doc_type: DocumentType,
    status: DocumentStatus,
    failure_reason: Option<String>,
) -> Document {
    Document {
        id: Uuid::new_v4(),
        name: file.name.clone(),
        doc_type,
        size: file.display_size(),
        size_bytes: file.size_bytes,
        upload_date: Utc::now().date_naive(),
        status,
        failure_reason,
    }
}

/// Timer callback: mark the document analyzed and attach its analysis.
fn complete_analysis(
    state: &Weak<RwLock<SessionState>>,
    events: &broadcast::Sender<DocumentEvent>,
    id: Uuid,
    doc_type: DocumentType,
) {
    let Some(shared) = state.upgrade() else {
        tracing::debug!(doc_id = %id, "Session gone before analysis completed");
        return;
    };
    let Ok(mut state) = shared.write() else {
        tracing::error!(doc_id = %id, "Session lock poisoned, analysis dropped");
        return;
    };

    state.timers.release(&id);
    if state.closed {
        return;
    }

    match state.registry.complete_analysis(&id, generate(doc_type)) {
        Ok(doc) => {
            tracing::info!(doc_id = %id, file = %doc.name, "Document analysis complete");
            let _ = events.send(DocumentEvent::Analyzed { id, doc_type });
        }
        Err(e) => {
            tracing::warn!(doc_id = %id, error = %e, "Analysis completion skipped");
        }
    }
}
