//! Document ingestion pipeline
//!
//! ```text
//! UploadedFile → classify → Registry (analyzing) → timer → generate → Registry (analyzed)
//! ```
//!
//! Classification and analysis are pure lookups over static tables. The
//! session owns all mutable state; the only suspension point is the
//! fixed analysis delay.

pub mod analysis;
pub mod classify;
pub mod error;
pub mod events;
pub mod session;
pub mod timer;
pub mod upload;
pub mod validation;

pub use analysis::{generate, template_for, TemplateKind};
pub use classify::{classify, classify_with_match, Classification};
pub use error::{IngestionError, PipelineError, ValidationError};
pub use events::DocumentEvent;
pub use session::{IngestOutcome, IntelligenceSession};
pub use timer::{DeferredTask, TimerSet};
pub use upload::{format_size, UploadedFile};
pub use validation::validate_upload;
