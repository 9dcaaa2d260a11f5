//! String classification rules for risk indicators and advice lines.
//!
//! Both are ordered substring/prefix dispatches. The precedence is a
//! first-class rule table: reordering it changes observable
//! classification (an indicator containing both "high" and "mod" must
//! come out High).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskCategory {
    NoRisk,
    Low,
    Moderate,
    High,
    Critical,
}

impl RiskCategory {
    pub fn label(&self) -> &'static str {
        match self {
            RiskCategory::NoRisk => "no-risk",
            RiskCategory::Low => "low",
            RiskCategory::Moderate => "moderate",
            RiskCategory::High => "high",
            RiskCategory::Critical => "critical",
        }
    }
}

/// Substring rules checked in order; first hit wins.
const RISK_RULES: [(&[&str], RiskCategory); 5] = [
    (&["critical"], RiskCategory::Critical),
    (&["high"], RiskCategory::High),
    (&["mod", "med"], RiskCategory::Moderate),
    (&["low"], RiskCategory::Low),
    (&["no risk", "good"], RiskCategory::NoRisk),
];

/// Classify a risk level string, case-insensitively. Unknown or empty
/// strings default to Low.
pub fn classify_risk(level: &str) -> RiskCategory {
    let lowered = level.to_lowercase();
    for (needles, category) in RISK_RULES {
        if needles.iter().any(|n| lowered.contains(n)) {
            return category;
        }
    }
    RiskCategory::Low
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdviceKind {
    Condition,
    Bullet,
    SectionHeader,
    General,
}

/// Prefix dispatch for advice lines; a leading newline before the
/// condition or section marker is tolerated.
pub fn classify_advice(line: &str) -> AdviceKind {
    let stripped = line.strip_prefix('\n').unwrap_or(line);
    if stripped.starts_with('\u{1F50D}') {
        AdviceKind::Condition
    } else if line.starts_with('\u{2022}') {
        AdviceKind::Bullet
    } else if stripped.starts_with('\u{1F4CB}') {
        AdviceKind::SectionHeader
    } else {
        AdviceKind::General
    }
}
