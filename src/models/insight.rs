use serde::{Deserialize, Serialize};

use super::enums::InsightPriority;
use super::ModelError;

/// Business insight card. Not derived from documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "InsightRecord")]
pub struct Insight {
    pub id: String,
    pub insight_type: String,
    pub priority: InsightPriority,
    pub title: String,
    pub description: String,
    pub impact: String,
    /// Percentage, 0..=100.
    confidence: u8,
}

impl Insight {
    pub fn new(
        id: impl Into<String>,
        insight_type: impl Into<String>,
        priority: InsightPriority,
        title: impl Into<String>,
        description: impl Into<String>,
        impact: impl Into<String>,
        confidence: u8,
    ) -> Result<Self, ModelError> {
        if confidence > 100 {
            return Err(ModelError::ConfidenceOutOfRange(confidence));
        }
        Ok(Self {
            id: id.into(),
            insight_type: insight_type.into(),
            priority,
            title: title.into(),
            description: description.into(),
            impact: impact.into(),
            confidence,
        })
    }

    pub fn confidence(&self) -> u8 {
        self.confidence
    }
}

/// Wire shape of an [`Insight`]; deserialization goes through [`Insight::new`].
#[derive(Deserialize)]
struct InsightRecord {
    id: String,
    insight_type: String,
    priority: InsightPriority,
    title: String,
    description: String,
    impact: String,
    confidence: u8,
}

impl TryFrom<InsightRecord> for Insight {
    type Error = ModelError;

    fn try_from(r: InsightRecord) -> Result<Self, Self::Error> {
        Insight::new(
            r.id,
            r.insight_type,
            r.priority,
            r.title,
            r.description,
            r.impact,
            r.confidence,
        )
    }
}
