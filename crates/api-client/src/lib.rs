use crate::interceptor::{Passthrough, RequestInterceptor};
use configuration::ApiSettings;
use reqwest::RequestBuilder;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;

pub mod endpoints;
pub mod error;
pub mod interceptor;
pub mod requests;
pub mod responses;

#[cfg(test)]
mod client_tests;

// --- Public API ---
pub use endpoints::{AnalysisApi, DataInputApi, HealthApi, VisualizationApi};
pub use error::ApiError;
pub use requests::{
    AiAnalysisRequest, ComparisonChartQuery, ComparisonQuery, IndustryQuery, PositionChartQuery,
    PositionSizingRequest, RecordQuery, SummaryQuery, TimingIndicatorsRequest, TrendQuery,
};
pub use responses::{
    ComparisonChartResponse, DataResponse, HealthResponse, RecordsResponse, SubmitResponse,
};

/// Fixed upper bound on the lifetime of any single request.
const REQUEST_TIMEOUT: Duration = Duration::from_millis(10_000);

/// The gateway every backend call goes through.
///
/// Wraps a `reqwest::Client` configured once at construction: resolved base
/// URL, JSON content type, fixed timeout. Each call is an independent,
/// stateless exchange; the client is cheap to clone and share across
/// concurrent requests. All failures are normalized to [`ApiError`] before
/// they reach the caller.
#[derive(Clone)]
pub struct GatewayClient {
    client: reqwest::Client,
    base_url: String,
    interceptor: Arc<dyn RequestInterceptor>,
}

impl GatewayClient {
    /// Builds a client against the base URL the settings resolve to.
    pub fn new(settings: &ApiSettings) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| {
                tracing::error!(error = %err, "failed to build the http client");
                ApiError::Unknown
            })?;

        Ok(Self {
            client,
            base_url: settings.resolve_base_url().trim_end_matches('/').to_string(),
            interceptor: Arc::new(Passthrough),
        })
    }

    /// Installs a request interceptor, replacing the default pass-through.
    pub fn with_interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.interceptor = Arc::new(interceptor);
        self
    }

    /// The domain sub-client for manual data entry.
    pub fn data_input(&self) -> DataInputApi<'_> {
        DataInputApi::new(self)
    }

    /// The domain sub-client for timing analysis.
    pub fn analysis(&self) -> AnalysisApi<'_> {
        AnalysisApi::new(self)
    }

    /// The domain sub-client for chart data.
    pub fn visualization(&self) -> VisualizationApi<'_> {
        VisualizationApi::new(self)
    }

    /// The domain sub-client for service liveness checks.
    pub fn health(&self) -> HealthApi<'_> {
        HealthApi::new(self)
    }

    /// Issues a GET against `path` with the given query payload and decodes
    /// the response body into `T`.
    pub async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        self.dispatch(path, self.client.get(&url).query(query)).await
    }

    /// Issues a POST against `path` with a JSON body and decodes the response
    /// body into `T`.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);
        self.dispatch(path, self.client.post(&url).json(body)).await
    }

    /// The single funnel every request passes through: interceptor, send,
    /// then normalization of the outcome.
    ///
    /// On success the decoded body is returned bare; status and headers never
    /// surface. On failure exactly one [`ApiError`] variant is produced and
    /// logged before being returned.
    async fn dispatch<T: DeserializeOwned>(
        &self,
        path: &str,
        request: RequestBuilder,
    ) -> Result<T, ApiError> {
        let request = self.interceptor.intercept(request).await;

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => return Err(self.normalize_transport(path, err)),
        };

        let status = response.status();
        let body = match response.bytes().await {
            Ok(body) => body,
            // The exchange started but the response was cut short.
            Err(err) => {
                tracing::error!(path, error = %err, "response body lost in transit");
                return Err(ApiError::Network);
            }
        };

        if status.is_success() {
            serde_json::from_slice(&body).map_err(|err| {
                tracing::error!(path, error = %err, "undecodable response body");
                ApiError::Unknown
            })
        } else {
            let err = ApiError::server(status, &body);
            tracing::error!(path, code = %err.code(), "server rejected the request: {err}");
            Err(err)
        }
    }

    /// Classifies a send-stage failure: a request that never got built is a
    /// local problem; anything after that means the response never arrived.
    fn normalize_transport(&self, path: &str, err: reqwest::Error) -> ApiError {
        let normalized = if err.is_builder() {
            ApiError::Unknown
        } else {
            ApiError::Network
        };
        tracing::error!(path, code = %normalized.code(), error = %err, "request failed in transit");
        normalized
    }
}
