//! Domain sub-clients: a path + verb + payload-shape catalogue over the
//! gateway. None of these methods carry logic of their own.

use crate::GatewayClient;
use crate::error::ApiError;
use crate::requests::{
    AiAnalysisRequest, ComparisonChartQuery, ComparisonQuery, IndustryQuery, PositionChartQuery,
    PositionSizingRequest, RecordQuery, SummaryQuery, TimingIndicatorsRequest, TrendQuery,
};
use crate::responses::{
    ComparisonChartResponse, DataResponse, HealthResponse, RecordsResponse, SubmitResponse,
};
use core_types::{
    AiAnalysis, AnalysisSummary, DashboardSummary, IndicatorBreakdown, IndustryRecord,
    MacroRecord, MarketComparison, PositionSizing, PositionSizingChart, SentimentAnalysis,
    SentimentRecord, TimingIndicators, TrendPoint,
};

const EMPTY_QUERY: &[(&str, &str)] = &[];

/// Manual entry and retrieval of macro, sentiment and industry records.
pub struct DataInputApi<'a> {
    client: &'a GatewayClient,
}

impl<'a> DataInputApi<'a> {
    pub(crate) fn new(client: &'a GatewayClient) -> Self {
        Self { client }
    }

    pub async fn add_macro_data(
        &self,
        record: &MacroRecord,
    ) -> Result<SubmitResponse<MacroRecord>, ApiError> {
        self.client.post("/data/macro", record).await
    }

    pub async fn fetch_macro_data(
        &self,
        query: &RecordQuery,
    ) -> Result<RecordsResponse<MacroRecord>, ApiError> {
        self.client.get("/data/macro", query).await
    }

    pub async fn add_market_sentiment(
        &self,
        record: &SentimentRecord,
    ) -> Result<SubmitResponse<SentimentRecord>, ApiError> {
        self.client.post("/data/market-sentiment", record).await
    }

    pub async fn fetch_market_sentiment(
        &self,
        query: &RecordQuery,
    ) -> Result<RecordsResponse<SentimentRecord>, ApiError> {
        self.client.get("/data/market-sentiment", query).await
    }

    pub async fn add_industry_data(
        &self,
        record: &IndustryRecord,
    ) -> Result<SubmitResponse<IndustryRecord>, ApiError> {
        self.client.post("/data/industry", record).await
    }

    pub async fn fetch_industry_data(
        &self,
        query: &IndustryQuery,
    ) -> Result<RecordsResponse<IndustryRecord>, ApiError> {
        self.client.get("/data/industry", query).await
    }
}

/// Timing-indicator computation, AI analysis, position sizing and
/// cross-market comparison.
pub struct AnalysisApi<'a> {
    client: &'a GatewayClient,
}

impl<'a> AnalysisApi<'a> {
    pub(crate) fn new(client: &'a GatewayClient) -> Self {
        Self { client }
    }

    pub async fn calculate_timing_indicators(
        &self,
        request: &TimingIndicatorsRequest,
    ) -> Result<SubmitResponse<TimingIndicators>, ApiError> {
        self.client.post("/analysis/timing-indicators", request).await
    }

    pub async fn fetch_timing_indicators(
        &self,
        query: &RecordQuery,
    ) -> Result<RecordsResponse<TimingIndicators>, ApiError> {
        self.client.get("/analysis/timing-indicators", query).await
    }

    pub async fn request_ai_analysis(
        &self,
        request: &AiAnalysisRequest,
    ) -> Result<SubmitResponse<AiAnalysis>, ApiError> {
        self.client.post("/analysis/ai-analysis", request).await
    }

    pub async fn calculate_position_sizing(
        &self,
        request: &PositionSizingRequest,
    ) -> Result<SubmitResponse<PositionSizing>, ApiError> {
        self.client.post("/analysis/position-sizing", request).await
    }

    pub async fn compare_markets(
        &self,
        query: &ComparisonQuery,
    ) -> Result<SubmitResponse<MarketComparison>, ApiError> {
        self.client.get("/analysis/market-comparison", query).await
    }

    pub async fn fetch_analysis_summary(
        &self,
        query: &SummaryQuery,
    ) -> Result<SubmitResponse<AnalysisSummary>, ApiError> {
        self.client.get("/analysis/summary", query).await
    }
}

/// Chart and dashboard data.
pub struct VisualizationApi<'a> {
    client: &'a GatewayClient,
}

impl<'a> VisualizationApi<'a> {
    pub(crate) fn new(client: &'a GatewayClient) -> Self {
        Self { client }
    }

    pub async fn fetch_timing_score_trend(
        &self,
        query: &TrendQuery,
    ) -> Result<RecordsResponse<TrendPoint>, ApiError> {
        self.client
            .get("/visualization/timing-score-trend", query)
            .await
    }

    pub async fn fetch_market_comparison_chart(
        &self,
        query: &ComparisonChartQuery,
    ) -> Result<ComparisonChartResponse, ApiError> {
        self.client
            .get("/visualization/market-comparison-chart", query)
            .await
    }

    pub async fn fetch_indicator_breakdown(
        &self,
        query: &SummaryQuery,
    ) -> Result<DataResponse<IndicatorBreakdown>, ApiError> {
        self.client
            .get("/visualization/indicator-breakdown", query)
            .await
    }

    pub async fn fetch_position_sizing_chart(
        &self,
        query: &PositionChartQuery,
    ) -> Result<DataResponse<PositionSizingChart>, ApiError> {
        self.client
            .get("/visualization/position-sizing-chart", query)
            .await
    }

    pub async fn fetch_sentiment_analysis(
        &self,
        query: &RecordQuery,
    ) -> Result<DataResponse<SentimentAnalysis>, ApiError> {
        self.client
            .get("/visualization/sentiment-analysis", query)
            .await
    }

    pub async fn fetch_macro_indicators(
        &self,
        query: &RecordQuery,
    ) -> Result<RecordsResponse<MacroRecord>, ApiError> {
        self.client
            .get("/visualization/macro-indicators", query)
            .await
    }

    pub async fn fetch_dashboard_summary(
        &self,
        query: &SummaryQuery,
    ) -> Result<DataResponse<DashboardSummary>, ApiError> {
        self.client
            .get("/visualization/dashboard-summary", query)
            .await
    }
}

/// Liveness probes of the three backend services.
pub struct HealthApi<'a> {
    client: &'a GatewayClient,
}

impl<'a> HealthApi<'a> {
    pub(crate) fn new(client: &'a GatewayClient) -> Self {
        Self { client }
    }

    pub async fn check_data_service(&self) -> Result<HealthResponse, ApiError> {
        self.client.get("/data/health", EMPTY_QUERY).await
    }

    pub async fn check_analysis_service(&self) -> Result<HealthResponse, ApiError> {
        self.client.get("/analysis/health", EMPTY_QUERY).await
    }

    pub async fn check_visualization_service(&self) -> Result<HealthResponse, ApiError> {
        self.client.get("/visualization/health", EMPTY_QUERY).await
    }
}
