mod classify;
mod report;

pub use classify::{classify_advice, classify_risk, AdviceKind, RiskCategory};
pub use report::{
    build_report, format_report, ConditionCard, FlagCard, Report, RiskCounts, TOP_PROBABILITIES,
};
