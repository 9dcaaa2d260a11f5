//! Deterministic rendering of an analysis result.
//!
//! `build_report` is a pure function from the inbound result to a
//! presentation model; `format_report` turns that model into terminal
//! text. Neither performs I/O, and missing optional fields never fail.

use std::cmp::Ordering;

use crate::render::classify::{classify_advice, classify_risk, AdviceKind, RiskCategory};
use crate::schema::AnalysisResult;

pub const TOP_PROBABILITIES: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RiskCounts {
    pub high: usize,
    pub moderate: usize,
    pub low: usize,
}

#[derive(Debug, Clone)]
pub struct ConditionCard {
    pub condition: String,
    pub risk_level: String,
    pub category: RiskCategory,
    /// Whole-percent confidence.
    pub confidence_pct: u32,
    pub matched_count: u64,
    pub total_count: u64,
    pub biomarkers: Vec<(String, f64)>,
}

#[derive(Debug, Clone)]
pub struct FlagCard {
    /// Flag name with underscores spaced for display.
    pub title: String,
    pub level: String,
    pub category: RiskCategory,
}

#[derive(Debug, Clone)]
pub struct Report {
    pub prediction: String,
    pub risk_indicator: String,
    pub overall: RiskCategory,
    /// None means no conditions were detected: render the no-risk
    /// banner instead of a breakdown.
    pub risk_counts: Option<RiskCounts>,
    pub conditions: Vec<ConditionCard>,
    pub flags: Vec<FlagCard>,
    pub top_probabilities: Vec<(String, f64)>,
    pub advice: Vec<(AdviceKind, String)>,
}

pub fn build_report(result: &AnalysisResult) -> Report {
    let risk_indicator = result
        .risk_indicator
        .clone()
        .unwrap_or_else(|| "N/A".to_string());
    let prediction = result
        .prediction
        .clone()
        .unwrap_or_else(|| "N/A".to_string());

    // Partition counts use exact, case-sensitive level strings.
    let risk_counts = if result.detected_conditions.is_empty() {
        None
    } else {
        let mut counts = RiskCounts::default();
        for c in &result.detected_conditions {
            match c.risk_level.as_str() {
                "High" => counts.high += 1,
                "Moderate" => counts.moderate += 1,
                "Low" => counts.low += 1,
                _ => {}
            }
        }
        Some(counts)
    };

    let conditions = result
        .detected_conditions
        .iter()
        .map(|c| ConditionCard {
            condition: c.condition.clone(),
            category: classify_risk(&c.risk_level),
            risk_level: c.risk_level.clone(),
            confidence_pct: (c.confidence * 100.0).round() as u32,
            matched_count: c.matched_count,
            total_count: c.total_count,
            biomarkers: c.biomarkers.clone(),
        })
        .collect();

    let flags = result
        .flags
        .iter()
        .map(|(name, level)| FlagCard {
            title: name.replace('_', " "),
            category: classify_risk(level),
            level: level.clone(),
        })
        .collect();

    // Stable sort: ties keep the order the backend sent.
    let mut top_probabilities = result.probabilities.clone();
    top_probabilities.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    top_probabilities.truncate(TOP_PROBABILITIES);

    let advice = result
        .advice
        .iter()
        .map(|line| (classify_advice(line), line.clone()))
        .collect();

    Report {
        prediction,
        overall: classify_risk(&risk_indicator),
        risk_indicator,
        risk_counts,
        conditions,
        flags,
        top_probabilities,
        advice,
    }
}

pub fn format_report(report: &Report) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Overall risk: {} [{}]\n",
        report.risk_indicator,
        report.overall.label()
    ));

    match &report.risk_counts {
        Some(counts) => {
            let mut parts = Vec::new();
            if counts.high > 0 {
                parts.push(format!("HIGH RISK ({})", counts.high));
            }
            if counts.moderate > 0 {
                parts.push(format!("MODERATE RISK ({})", counts.moderate));
            }
            if counts.low > 0 {
                parts.push(format!("LOW RISK ({})", counts.low));
            }
            out.push_str(&format!("Risk breakdown: {}\n", parts.join(" | ")));
        }
        None => out.push_str("NO RISK DETECTED: you are good to go!\n"),
    }

    out.push_str(&format!("Primary prediction: {}\n", report.prediction));

    if !report.conditions.is_empty() {
        out.push_str(&format!(
            "Detected conditions ({}):\n",
            report.conditions.len()
        ));
        for c in &report.conditions {
            out.push_str(&format!(
                "  {} [{}] confidence {}% ({}/{} biomarkers match)\n",
                c.condition, c.risk_level, c.confidence_pct, c.matched_count, c.total_count
            ));
            if !c.biomarkers.is_empty() {
                let values: Vec<String> = c
                    .biomarkers
                    .iter()
                    .map(|(name, value)| format!("{name}: {value:.2}"))
                    .collect();
                out.push_str(&format!("    {}\n", values.join(", ")));
            }
        }
    }

    if !report.flags.is_empty() {
        out.push_str("Flags:\n");
        for f in &report.flags {
            out.push_str(&format!(
                "  {}: {} [{}]\n",
                f.title,
                f.level,
                f.category.label()
            ));
        }
    } else if report.conditions.is_empty() {
        out.push_str("No specific flags detected.\n");
    }

    if !report.top_probabilities.is_empty() {
        out.push_str("Prediction probabilities:\n");
        for (label, prob) in &report.top_probabilities {
            out.push_str(&format!("  {label}: {:.1}%\n", prob * 100.0));
        }
    }

    if report.advice.is_empty() {
        out.push_str("Advice: none. Continue maintaining a healthy lifestyle.\n");
    } else {
        out.push_str("Advice:\n");
        for (kind, line) in &report.advice {
            let prefix = match kind {
                AdviceKind::Condition => "",
                AdviceKind::SectionHeader => "",
                AdviceKind::Bullet => "  ",
                AdviceKind::General => "  ",
            };
            out.push_str(&format!("{prefix}{}\n", line.trim_start_matches('\n')));
        }
    }

    out
}
