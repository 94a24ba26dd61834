use std::time::Duration;

/// Application-level constants
pub const APP_NAME: &str = "DocIntel";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Simulated processing time between ingestion and analysis. Fixed.
pub const ANALYSIS_DELAY: Duration = Duration::from_millis(3000);

/// Largest upload accepted by validated ingestion (100MB).
pub const MAX_UPLOAD_BYTES: u64 = 100 * 1024 * 1024;

/// Extensions offered by the file picker. Advisory: plain ingestion
/// accepts anything, only validated ingestion enforces the list.
pub const ACCEPTED_EXTENSIONS: &[&str] = &[".pdf", ".doc", ".docx", ".csv", ".json", ".txt", ".xlsx"];

/// Capacity of the per-session document event channel.
pub const EVENT_CHANNEL_CAPACITY: usize = 64;

/// `accept` attribute for the upload input, e.g. ".pdf,.doc,...".
pub fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS.join(",")
}

/// Log filter used when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "docintel=debug"
    } else {
        "docintel=info"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analysis_delay_is_three_seconds() {
        assert_eq!(ANALYSIS_DELAY.as_millis(), 3000);
    }

    #[test]
    fn accept_attribute_joins_extensions() {
        let accept = accept_attribute();
        assert!(accept.starts_with(".pdf,.doc,.docx"));
        assert!(accept.ends_with(".xlsx"));
        assert_eq!(accept.split(',').count(), ACCEPTED_EXTENSIONS.len());
    }

    #[test]
    fn extensions_are_lowercase_with_dot() {
        for ext in ACCEPTED_EXTENSIONS {
            assert!(ext.starts_with('.'));
            assert_eq!(*ext, ext.to_lowercase());
        }
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }

    #[test]
    fn log_filter_targets_crate() {
        assert!(default_log_filter().starts_with("docintel="));
    }
}
