pub mod analysis;
pub mod document;
pub mod enums;
pub mod filters;
pub mod insight;

pub use analysis::*;
pub use document::*;
pub use enums::*;
pub use filters::*;
pub use insight::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },

    #[error("Confidence {0} is outside 0..=100")]
    ConfidenceOutOfRange(u8),
}
