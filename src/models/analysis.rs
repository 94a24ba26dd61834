use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::enums::Trend;

/// One metric tile in the analysis panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricReading {
    pub value: String,
    pub change: String,
    pub trend: Trend,
}

/// Analysis attached to a document once its processing completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRecord {
    pub summary: String,
    pub key_metrics: BTreeMap<String, MetricReading>,
    pub risks: Vec<String>,
    pub opportunities: Vec<String>,
    pub recommendations: Vec<String>,
}
