pub mod enums;
pub mod error;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{IndicatorKind, Market, ScoreMetric, StrengthLevel};
pub use error::CoreError;
pub use structs::{
    AiAnalysis, AnalysisSummary, ComponentScores, DashboardSummary, IndicatorBreakdown,
    IndustryInputs, IndustryRecord, KeyIndicators, MacroInputs, MacroRecord, MarketComparison,
    MarketConfig, MarketScores, PositionSizing, PositionSizingChart, ScoreWeights,
    SentimentAnalysis, SentimentInputs, SentimentPoint, SentimentRecord, TechnicalIndicators,
    TimingIndicators, TrendPoint, WeightedScore,
};
