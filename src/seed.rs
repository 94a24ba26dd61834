//! Sample fixtures shown when the dashboard opens with demo data.
//!
//! `Strategic_Plan_2025.docx` is seeded as `analyzing` with no analysis and
//! no timer, so it never completes. Kept as-is: it is part of the demo data.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::{
    AnalysisRecord, Document, DocumentStatus, DocumentType, Insight, InsightPriority, ModelError,
};
use crate::pipeline::analysis::generate;
use crate::pipeline::upload::format_size;

/// Namespace for deterministic sample document ids.
const SEED_NAMESPACE: Uuid = Uuid::from_u128(0x5d0c_1a7e_4c1b_4f0e_9b7d_2f6a_8e31_c004);

struct SeedDocument {
    name: &'static str,
    doc_type: DocumentType,
    size_bytes: u64,
    upload_date: (i32, u32, u32),
    status: DocumentStatus,
}

const SEED_DOCUMENTS: &[SeedDocument] = &[
    SeedDocument {
        name: "Q3_Financial_Report.pdf",
        doc_type: DocumentType::Financial,
        size_bytes: 2_516_582,
        upload_date: (2024, 1, 15),
        status: DocumentStatus::Analyzed,
    },
    SeedDocument {
        name: "Customer_Research_Study.csv",
        doc_type: DocumentType::Market,
        size_bytes: 1_887_437,
        upload_date: (2024, 1, 14),
        status: DocumentStatus::Analyzed,
    },
    SeedDocument {
        name: "Strategic_Plan_2025.docx",
        doc_type: DocumentType::Strategic,
        size_bytes: 3_355_443,
        upload_date: (2024, 1, 13),
        status: DocumentStatus::Analyzing,
    },
];

/// Deterministic id for a sample document.
pub fn seed_document_id(name: &str) -> Uuid {
    Uuid::new_v5(&SEED_NAMESPACE, name.as_bytes())
}

/// Sample documents with their analyses. Only analyzed documents carry one.
pub fn sample_documents() -> Vec<(Document, Option<AnalysisRecord>)> {
    SEED_DOCUMENTS
        .iter()
        .map(|seed| {
            let (y, m, d) = seed.upload_date;
            let document = Document {
                id: seed_document_id(seed.name),
                name: seed.name.to_string(),
                doc_type: seed.doc_type,
                size: format_size(seed.size_bytes),
                size_bytes: seed.size_bytes,
                upload_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
                status: seed.status,
                failure_reason: None,
            };
            let analysis =
                (seed.status == DocumentStatus::Analyzed).then(|| generate(seed.doc_type));
            (document, analysis)
        })
        .collect()
}

pub fn sample_insights() -> Result<Vec<Insight>, ModelError> {
    Ok(vec![
        Insight::new(
            "insight-1",
            "opportunity",
            InsightPriority::High,
            "Revenue concentration risk",
            "Three clients account for 45% of quarterly revenue.",
            "Diversifying could stabilize revenue by 20%",
            87,
        )?,
        Insight::new(
            "insight-2",
            "trend",
            InsightPriority::Medium,
            "Integration demand rising",
            "60% of surveyed customers asked for third-party integrations.",
            "Potential 15% increase in retention",
            78,
        )?,
        Insight::new(
            "insight-3",
            "risk",
            InsightPriority::Low,
            "Roadmap staffing gap",
            "Two planned initiatives share the same engineering team.",
            "Possible one-quarter delay on secondary initiative",
            64,
        )?,
    ])
}
