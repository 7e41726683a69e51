use chrono::NaiveDate;
use core_types::{
    IndicatorKind, IndustryInputs, MacroInputs, Market, ScoreMetric, SentimentInputs,
    TimingIndicators,
};
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt::Display;

// Query payloads. `None` fields are omitted from the query string; the
// backend applies its own defaults. List-valued parameters serialize
// comma-joined, matching the backend's `split(',')` parsing.

fn comma_joined<S, T>(values: &Option<Vec<T>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Display,
{
    match values {
        Some(items) => {
            let joined = items
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(",");
            serializer.serialize_str(&joined)
        }
        None => serializer.serialize_none(),
    }
}

/// Filter for record-listing endpoints (macro, sentiment, timing indicators).
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecordQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<Market>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// Filter for the industry record listing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IndustryQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<Market>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}

/// Filter for the timing-score trend series.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TrendQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<Market>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator_type: Option<IndicatorKind>,
}

/// Market + optional date selector used by summary-style endpoints.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SummaryQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<Market>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

/// Selector for the cross-market comparison.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComparisonQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "comma_joined")]
    pub markets: Option<Vec<Market>>,
}

/// Selector for the market-comparison chart.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ComparisonChartQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "comma_joined")]
    pub markets: Option<Vec<Market>>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "comma_joined")]
    pub indicators: Option<Vec<ScoreMetric>>,
}

/// Selector for the position-sizing chart.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PositionChartQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<Market>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_capital: Option<Decimal>,
}

// Analysis request bodies.

/// Body of `POST /analysis/timing-indicators`. Inline indicator inputs are
/// optional; absent dimensions are read from previously submitted records.
#[derive(Debug, Clone, Serialize)]
pub struct TimingIndicatorsRequest {
    pub market: Market,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub macro_data: Option<MacroInputs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub industry_data: Option<IndustryInputs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_sentiment: Option<SentimentInputs>,
}

/// Body of `POST /analysis/ai-analysis`.
#[derive(Debug, Clone, Serialize)]
pub struct AiAnalysisRequest {
    pub market: Market,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timing_indicators: Option<TimingIndicators>,
    pub include_position_sizing: bool,
}

/// Body of `POST /analysis/position-sizing`.
#[derive(Debug, Clone, Serialize)]
pub struct PositionSizingRequest {
    pub market: Market,
    pub date: NaiveDate,
    pub timing_score: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_capital: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_per_trade_percentage: Option<Decimal>,
}
