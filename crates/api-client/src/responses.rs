use core_types::{Market, ScoreMetric};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::BTreeMap;

// The backend wraps payloads in a handful of thin envelopes. Deserializing
// them here keeps callers on typed schemas instead of probing `data` fields.

/// Envelope of submission and compute endpoints: a human-readable message
/// plus the stored/derived record.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse<T> {
    pub message: String,
    pub data: T,
}

/// Envelope of record-listing endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordsResponse<T> {
    pub data: Vec<T>,
    pub count: usize,
}

/// Envelope of single-payload visualization endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// Envelope of the market-comparison chart: scores keyed by metric, then by
/// market, plus the echoed selection.
#[derive(Debug, Clone, Deserialize)]
pub struct ComparisonChartResponse {
    pub data: BTreeMap<ScoreMetric, BTreeMap<Market, Decimal>>,
    pub markets: Vec<Market>,
    pub indicators: Vec<ScoreMetric>,
}

/// Liveness report of one backend service.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}
