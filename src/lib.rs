pub mod config;
pub mod dashboard;
pub mod models;
pub mod pipeline;
pub mod registry;
pub mod seed;

pub use dashboard::DashboardView;
pub use models::{Document, DocumentFilter, DocumentStatus, DocumentType, TypeFilter};
pub use pipeline::{IntelligenceSession, PipelineError, UploadedFile};

use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber. `RUST_LOG` overrides the default filter.
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
    }
}
