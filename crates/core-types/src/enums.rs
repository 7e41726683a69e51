use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A market the timing analysis covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Market {
    AShare,
    HongKong,
    Nasdaq,
}

impl Market {
    /// The wire name used in paths, query strings and JSON payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Market::AShare => "a_share",
            Market::HongKong => "hong_kong",
            Market::Nasdaq => "nasdaq",
        }
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Market {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a_share" => Ok(Market::AShare),
            "hong_kong" => Ok(Market::HongKong),
            "nasdaq" => Ok(Market::Nasdaq),
            other => Err(CoreError::InvalidInput(
                "market".to_string(),
                other.to_string(),
            )),
        }
    }
}

/// Categorical strength label derived from the 0-100 timing score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Neutral,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "very_weak",
            StrengthLevel::Weak => "weak",
            StrengthLevel::Neutral => "neutral",
            StrengthLevel::Strong => "strong",
            StrengthLevel::VeryStrong => "very_strong",
        }
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrengthLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "very_weak" => Ok(StrengthLevel::VeryWeak),
            "weak" => Ok(StrengthLevel::Weak),
            "neutral" => Ok(StrengthLevel::Neutral),
            "strong" => Ok(StrengthLevel::Strong),
            "very_strong" => Ok(StrengthLevel::VeryStrong),
            other => Err(CoreError::InvalidInput(
                "strength_level".to_string(),
                other.to_string(),
            )),
        }
    }
}

/// Which component series a trend query selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    Overall,
    Macro,
    Industry,
    Sentiment,
}

impl IndicatorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorKind::Overall => "overall",
            IndicatorKind::Macro => "macro",
            IndicatorKind::Industry => "industry",
            IndicatorKind::Sentiment => "sentiment",
        }
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IndicatorKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overall" => Ok(IndicatorKind::Overall),
            "macro" => Ok(IndicatorKind::Macro),
            "industry" => Ok(IndicatorKind::Industry),
            "sentiment" => Ok(IndicatorKind::Sentiment),
            other => Err(CoreError::InvalidInput(
                "indicator_type".to_string(),
                other.to_string(),
            )),
        }
    }
}

/// Score column selected by the market-comparison chart endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreMetric {
    OverallScore,
    MacroScore,
    IndustryScore,
    SentimentScore,
}

impl ScoreMetric {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreMetric::OverallScore => "overall_score",
            ScoreMetric::MacroScore => "macro_score",
            ScoreMetric::IndustryScore => "industry_score",
            ScoreMetric::SentimentScore => "sentiment_score",
        }
    }
}

impl fmt::Display for ScoreMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoreMetric {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overall_score" => Ok(ScoreMetric::OverallScore),
            "macro_score" => Ok(ScoreMetric::MacroScore),
            "industry_score" => Ok(ScoreMetric::IndustryScore),
            "sentiment_score" => Ok(ScoreMetric::SentimentScore),
            other => Err(CoreError::InvalidInput(
                "indicator".to_string(),
                other.to_string(),
            )),
        }
    }
}
