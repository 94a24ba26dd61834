//! Template-backed analysis generator.
//!
//! Three fixed templates (financial, strategic, market). Every other
//! document type reuses the financial template. Output is deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{AnalysisRecord, DocumentType, MetricReading, Trend};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    Financial,
    Strategic,
    Market,
}

struct MetricTemplate {
    name: &'static str,
    value: &'static str,
    change: &'static str,
    trend: Trend,
}

struct AnalysisTemplate {
    summary: &'static str,
    metrics: &'static [MetricTemplate],
    risks: &'static [&'static str],
    opportunities: &'static [&'static str],
    recommendations: &'static [&'static str],
}

static FINANCIAL: AnalysisTemplate = AnalysisTemplate {
    summary: "Strong quarterly performance with revenue growth ahead of plan. \
              Margins improved on lower operating costs, while cash conversion \
              slowed slightly due to longer receivable cycles.",
    metrics: &[
        MetricTemplate { name: "revenue", value: "$2.4M", change: "+15%", trend: Trend::Up },
        MetricTemplate { name: "profit_margin", value: "23%", change: "+3%", trend: Trend::Up },
        MetricTemplate { name: "operating_costs", value: "$1.8M", change: "-5%", trend: Trend::Down },
        MetricTemplate { name: "cash_flow", value: "$450K", change: "0%", trend: Trend::Stable },
    ],
    risks: &[
        "Customer concentration: top 3 clients represent 45% of revenue",
        "Accounts receivable aging increased by 12 days",
        "Currency exposure on international contracts",
    ],
    opportunities: &[
        "Expand into adjacent markets with existing product line",
        "Renegotiate supplier contracts to reduce cost of goods",
        "Introduce annual billing to improve cash position",
    ],
    recommendations: &[
        "Diversify the client base to reduce concentration risk",
        "Tighten collection terms for accounts older than 60 days",
        "Reinvest margin gains into sales capacity",
    ],
};

static STRATEGIC: AnalysisTemplate = AnalysisTemplate {
    summary: "Roadmap aligns with stated growth objectives. Three initiatives \
              carry most of the expected value; delivery timelines depend on \
              hiring plans that are not yet funded.",
    metrics: &[
        MetricTemplate { name: "initiatives", value: "8", change: "+2", trend: Trend::Up },
        MetricTemplate { name: "on_track", value: "75%", change: "+10%", trend: Trend::Up },
        MetricTemplate { name: "budget_allocated", value: "$1.2M", change: "0%", trend: Trend::Stable },
        MetricTemplate { name: "time_to_market", value: "6 months", change: "-1 month", trend: Trend::Down },
    ],
    risks: &[
        "Resource constraints on two parallel initiatives",
        "Dependency on a single technology vendor",
        "Competitive launches expected in the same window",
    ],
    opportunities: &[
        "First-mover advantage in the mid-market segment",
        "Partnership channel can shorten go-to-market",
        "Platform features reusable across product lines",
    ],
    recommendations: &[
        "Sequence initiatives by expected value and staffing",
        "Secure a secondary vendor for critical components",
        "Set quarterly checkpoints with measurable milestones",
    ],
};

static MARKET: AnalysisTemplate = AnalysisTemplate {
    summary: "Customer research shows high satisfaction in the core segment \
              and clear demand for integrations. Price sensitivity is rising \
              among smaller accounts.",
    metrics: &[
        MetricTemplate { name: "satisfaction", value: "4.3/5", change: "+0.2", trend: Trend::Up },
        MetricTemplate { name: "nps", value: "42", change: "+5", trend: Trend::Up },
        MetricTemplate { name: "churn_rate", value: "3.1%", change: "-0.4%", trend: Trend::Down },
        MetricTemplate { name: "market_share", value: "12%", change: "0%", trend: Trend::Stable },
    ],
    risks: &[
        "Price sensitivity increasing in the small-business segment",
        "Two competitors closing the feature gap",
        "Survey sample skewed toward long-tenure customers",
    ],
    opportunities: &[
        "Integration marketplace requested by 60% of respondents",
        "Underserved demand in the healthcare vertical",
        "Upsell potential for analytics add-ons",
    ],
    recommendations: &[
        "Prioritize the top three requested integrations",
        "Test a lower-priced entry tier",
        "Run a follow-up study with recently churned customers",
    ],
};

/// Template used for a document type. Types without their own template
/// use the financial one.
pub fn template_for(doc_type: DocumentType) -> TemplateKind {
    match doc_type {
        DocumentType::Strategic => TemplateKind::Strategic,
        DocumentType::Market => TemplateKind::Market,
        DocumentType::Financial | DocumentType::Legal | DocumentType::General => {
            TemplateKind::Financial
        }
    }
}

/// Build the analysis record for a document type.
pub fn generate(doc_type: DocumentType) -> AnalysisRecord {
    let template = match template_for(doc_type) {
        TemplateKind::Financial => &FINANCIAL,
        TemplateKind::Strategic => &STRATEGIC,
        TemplateKind::Market => &MARKET,
    };
    build(template)
}

fn build(template: &AnalysisTemplate) -> AnalysisRecord {
    let key_metrics: BTreeMap<String, MetricReading> = template
        .metrics
        .iter()
        .map(|m| {
            (
                m.name.to_string(),
                MetricReading {
                    value: m.value.to_string(),
                    change: m.change.to_string(),
                    trend: m.trend,
                },
            )
        })
        .collect();

    AnalysisRecord {
        summary: template.summary.to_string(),
        key_metrics,
        risks: to_strings(template.risks),
        opportunities: to_strings(template.opportunities),
        recommendations: to_strings(template.recommendations),
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_is_deterministic() {
        for t in DocumentType::ALL {
            assert_eq!(generate(t), generate(t));
        }
    }

    #[test]
    fn unmapped_types_use_financial_template() {
        assert_eq!(generate(DocumentType::Legal), generate(DocumentType::Financial));
        assert_eq!(generate(DocumentType::General), generate(DocumentType::Financial));
        assert_eq!(template_for(DocumentType::Legal), TemplateKind::Financial);
    }

    #[test]
    fn templates_are_distinct() {
        let financial = generate(DocumentType::Financial);
        let strategic = generate(DocumentType::Strategic);
        let market = generate(DocumentType::Market);
        assert_ne!(financial, strategic);
        assert_ne!(strategic, market);
        assert_ne!(financial, market);
    }

    #[test]
    fn every_template_is_fully_populated() {
        for t in [DocumentType::Financial, DocumentType::Strategic, DocumentType::Market] {
            let analysis = generate(t);
            assert!(!analysis.summary.is_empty());
            assert_eq!(analysis.key_metrics.len(), 4);
            assert_eq!(analysis.risks.len(), 3);
            assert_eq!(analysis.opportunities.len(), 3);
            assert_eq!(analysis.recommendations.len(), 3);
        }
    }

    #[test]
    fn financial_revenue_metric() {
        let analysis = generate(DocumentType::Financial);
        let revenue = &analysis.key_metrics["revenue"];
        assert_eq!(revenue.value, "$2.4M");
        assert_eq!(revenue.change, "+15%");
        assert_eq!(revenue.trend, Trend::Up);
    }

    #[test]
    fn analysis_serializes_trend_names() {
        let json = serde_json::to_string(&generate(DocumentType::Market)).unwrap();
        assert!(json.contains("\"trend\":\"down\""));
        assert!(json.contains("\"churn_rate\""));
    }
}
