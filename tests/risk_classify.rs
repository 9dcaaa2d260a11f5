use femtrack::render::{classify_advice, classify_risk, AdviceKind, RiskCategory};

#[test]
fn critical_dominates_any_cooccurrence() {
    for s in [
        "critical",
        "CRITICAL",
        "Critical high risk",
        "low but critical",
        "moderately CRITICAL",
    ] {
        assert_eq!(classify_risk(s), RiskCategory::Critical, "{s}");
    }
}

#[test]
fn high_beats_moderate() {
    assert_eq!(
        classify_risk("Moderate High inflammation"),
        RiskCategory::High
    );
    assert_eq!(classify_risk("high-low"), RiskCategory::High);
}

#[test]
fn moderate_aliases() {
    assert_eq!(classify_risk("Moderate"), RiskCategory::Moderate);
    assert_eq!(classify_risk("medium"), RiskCategory::Moderate);
    assert_eq!(classify_risk("MODERATE risk"), RiskCategory::Moderate);
}

#[test]
fn no_risk_and_good() {
    assert_eq!(classify_risk("No Risk"), RiskCategory::NoRisk);
    assert_eq!(classify_risk("all good"), RiskCategory::NoRisk);
}

#[test]
fn unknown_defaults_to_low() {
    assert_eq!(classify_risk(""), RiskCategory::Low);
    assert_eq!(classify_risk("N/A"), RiskCategory::Low);
    assert_eq!(classify_risk("elevated"), RiskCategory::Low);
}

#[test]
fn classification_is_idempotent() {
    for s in ["critical", "Moderate High", "good", "unknown", "LOW"] {
        assert_eq!(classify_risk(s), classify_risk(s));
    }
}

#[test]
fn advice_prefix_dispatch_order() {
    assert_eq!(classify_advice("🔍 PCOS detected"), AdviceKind::Condition);
    assert_eq!(classify_advice("\n🔍 PCOS detected"), AdviceKind::Condition);
    assert_eq!(classify_advice("• drink water"), AdviceKind::Bullet);
    assert_eq!(classify_advice("📋 Lifestyle"), AdviceKind::SectionHeader);
    assert_eq!(classify_advice("\n📋 Lifestyle"), AdviceKind::SectionHeader);
    assert_eq!(classify_advice("see a doctor"), AdviceKind::General);
    assert_eq!(classify_advice(""), AdviceKind::General);
}
