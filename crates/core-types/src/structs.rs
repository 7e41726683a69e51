use crate::enums::{Market, StrengthLevel};
use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

// Server-assigned fields (`id`, `created_at`, `calculated_at`) are optional and
// skipped on serialize, so the same struct serves as both the submission
// payload and the stored record the backend returns.

/// One macro-indicator observation for a market on a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub date: NaiveDate,
    pub market: Market,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pmi: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpi: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ppi: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m2: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_macro: Option<BTreeMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

/// Technical sub-indicators carried inside a sentiment record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TechnicalIndicators {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rsi: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macd: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bollinger_bands: Option<Decimal>,
}

/// One market-sentiment observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub date: NaiveDate,
    pub market: Market,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volatility: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub investor_sentiment: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical_indicators: Option<TechnicalIndicators>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

/// One industry-fundamental observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndustryRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub date: NaiveDate,
    pub market: Market,
    pub industry: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_cash_flow: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry_sentiment: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

/// The component weights the backend applies when composing the overall score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub macro_fundamental: Decimal,
    pub industry_fundamental: Decimal,
    pub market_sentiment: Decimal,
}

/// A computed set of timing indicators for a market on a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingIndicators {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub market: Market,
    pub date: NaiveDate,
    pub overall_score: Decimal,
    pub macro_score: Decimal,
    pub industry_score: Decimal,
    pub sentiment_score: Decimal,
    pub weights: ScoreWeights,
    pub strength_level: StrengthLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculated_at: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

/// AI-generated narrative analysis of a timing result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiAnalysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub market: Market,
    pub date: NaiveDate,
    pub ai_analysis: String,
    pub summary: String,
    pub recommendation: String,
    pub risk_level: String,
    pub time_horizon: String,
    #[serde(default)]
    pub is_fallback: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculated_at: Option<NaiveDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

/// Position-sizing suggestion for a given timing score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSizing {
    pub market: Market,
    pub date: NaiveDate,
    pub timing_score: Decimal,
    pub strength_level: StrengthLevel,
    pub position_percentage: Decimal,
    pub position_amount: Decimal,
    pub available_capital: Decimal,
    pub risk_per_trade_percentage: Decimal,
    pub risk_amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calculated_at: Option<NaiveDateTime>,
}

/// Per-market score row inside a cross-market comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketScores {
    pub overall_score: Decimal,
    pub macro_score: Decimal,
    pub industry_score: Decimal,
    pub sentiment_score: Decimal,
    pub strength_level: StrengthLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

/// Cross-market comparison: latest scores per market, best market first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketComparison {
    pub markets: BTreeMap<Market, MarketScores>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub best_market: Option<Market>,
    pub comparison_date: NaiveDate,
}

/// The three component scores of an analysis summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    #[serde(rename = "macro")]
    pub macro_score: Decimal,
    pub industry: Decimal,
    pub sentiment: Decimal,
}

/// Headline indicators echoed back alongside a summary.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct KeyIndicators {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pmi: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpi: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volatility: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub investor_sentiment: Option<Decimal>,
}

/// Condensed analysis state for one market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub market: Market,
    pub analysis_date: NaiveDate,
    pub overall_score: Decimal,
    pub strength_level: StrengthLevel,
    pub component_scores: ComponentScores,
    #[serde(default)]
    pub key_indicators: KeyIndicators,
    pub recommendation: String,
}

/// One point of a timing-score trend series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub score: Decimal,
    pub strength_level: StrengthLevel,
}

/// A component score with the weight it contributes at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedScore {
    pub score: Decimal,
    pub weight: Decimal,
}

/// Breakdown of the overall score into weighted components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorBreakdown {
    #[serde(rename = "macro")]
    pub macro_component: WeightedScore,
    pub industry: WeightedScore,
    pub sentiment: WeightedScore,
}

/// Position suggestions across the score range, keyed by score step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSizingChart {
    pub current_score: Decimal,
    pub position_data: BTreeMap<String, PositionSizing>,
}

/// One point of the sentiment-analysis series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentPoint {
    pub date: NaiveDate,
    pub volatility: Decimal,
    pub investor_sentiment: Decimal,
    pub technical_score: Decimal,
}

/// Sentiment series plus its period averages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentAnalysis {
    pub sentiment_data: Vec<SentimentPoint>,
    pub average_volatility: Decimal,
    pub average_sentiment: Decimal,
}

/// Static per-market configuration the backend reports with the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketConfig {
    pub enabled: bool,
    pub indices: Vec<String>,
    pub update_frequency: String,
}

/// The dashboard aggregate: summary, position suggestion and market config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub analysis: AnalysisSummary,
    pub position: PositionSizing,
    pub market_config: MarketConfig,
}

// Request-side indicator subsets accepted by the timing-indicator compute
// endpoint. Same field names as the records, minus server-assigned state.

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MacroInputs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pmi: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpi: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ppi: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m2: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IndustryInputs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_cash_flow: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry_sentiment: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentInputs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volatility: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub investor_sentiment: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub technical_indicators: Option<TechnicalIndicators>,
}
