#![cfg(test)]
//! Contract tests for the gateway client, run against an in-process mock
//! server.

use crate::error::{ApiError, NETWORK_ERROR_MESSAGE};
use crate::interceptor::RequestInterceptor;
use crate::requests::{ComparisonQuery, PositionChartQuery, RecordQuery, SummaryQuery, TrendQuery};
use crate::{GatewayClient, HealthResponse};

use async_trait::async_trait;
use chrono::NaiveDate;
use configuration::{ApiSettings, RunMode};
use core_types::{IndicatorKind, MacroRecord, Market, StrengthLevel};
use httptest::{
    Expectation, Server, ServerPool,
    matchers::{all_of, contains, eq, json_decoded, key, not, request, url_decoded},
    responders::{json_encoded, status_code},
};
use reqwest::RequestBuilder;
use rust_decimal_macros::dec;
use serde_json::{Value, json};

static SERVER_POOL: ServerPool = ServerPool::new(4);

fn client_for(server: &Server) -> GatewayClient {
    let settings = ApiSettings {
        mode: RunMode::Production,
        base_url: Some(server.url_str("")),
    };
    GatewayClient::new(&settings).unwrap()
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[tokio::test]
async fn success_returns_exactly_the_decoded_body() {
    let server = SERVER_POOL.get_server();
    server.expect(
        Expectation::matching(request::method_path("POST", "/data/macro"))
            .respond_with(json_encoded(json!({"status": "ok"}))),
    );

    let client = client_for(&server);
    let body = json!({"date": "2024-01-15", "market": "a_share", "pmi": 51.2});
    let result: Value = client.post("/data/macro", &body).await.unwrap();

    assert_eq!(result, json!({"status": "ok"}));
}

#[tokio::test]
async fn non_2xx_maps_to_server_error_with_body_message() {
    let server = SERVER_POOL.get_server();
    server.expect(
        Expectation::matching(request::method_path("GET", "/analysis/summary"))
            .respond_with(status_code(500).body(json!({"message": "db unavailable"}).to_string())),
    );

    let client = client_for(&server);
    let err = client
        .get::<Value, _>("/analysis/summary", &[("market", "a_share")])
        .await
        .unwrap_err();

    match err {
        ApiError::Server { code, message, .. } => {
            assert_eq!(code, 500);
            assert_eq!(message, "db unavailable");
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_2xx_without_message_field_gets_generated_fallback() {
    let server = SERVER_POOL.get_server();
    server.expect(
        Expectation::matching(request::method_path("GET", "/data/macro"))
            .respond_with(status_code(404).body("")),
    );

    let client = client_for(&server);
    let err = client
        .get::<Value, _>("/data/macro", &RecordQuery::default())
        .await
        .unwrap_err();

    assert_eq!(err.code(), "404");
    assert_eq!(err.to_string(), "request failed: 404");
}

#[tokio::test]
async fn unreachable_server_maps_to_network_error() {
    // Port 9 (discard) is never bound in the test environment.
    let settings = ApiSettings {
        mode: RunMode::Production,
        base_url: Some("http://127.0.0.1:9".to_string()),
    };
    let client = GatewayClient::new(&settings).unwrap();

    let err = client
        .get::<Value, _>("/visualization/dashboard-summary", &RecordQuery::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Network));
    assert_eq!(err.code(), "NETWORK_ERROR");
    assert_eq!(err.to_string(), NETWORK_ERROR_MESSAGE);
}

#[tokio::test]
async fn unserializable_body_maps_to_unknown_error() {
    let server = SERVER_POOL.get_server();
    let client = client_for(&server);

    // JSON object keys must be strings; a byte-vector key fails at
    // serialization, before anything is sent.
    let mut body = std::collections::BTreeMap::new();
    body.insert(vec![1u8, 2], 3);
    let err = client.post::<Value, _>("/data/macro", &body).await.unwrap_err();

    assert!(matches!(err, ApiError::Unknown));
    assert_eq!(err.code(), "UNKNOWN_ERROR");
}

#[tokio::test]
async fn undecodable_success_body_maps_to_unknown_error() {
    let server = SERVER_POOL.get_server();
    server.expect(
        Expectation::matching(request::method_path("GET", "/analysis/summary"))
            .respond_with(status_code(200).body("<html>proxy placeholder</html>")),
    );

    let client = client_for(&server);
    let err = client
        .get::<HealthResponse, _>("/analysis/summary", &RecordQuery::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Unknown));
}

#[tokio::test]
async fn add_macro_data_posts_typed_record_to_its_path() {
    let server = SERVER_POOL.get_server();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/data/macro"),
            request::body(json_decoded(eq(json!({
                "date": "2024-01-15",
                "market": "a_share",
                "pmi": 51.2
            })))),
        ])
        .respond_with(json_encoded(json!({
            "message": "macro data saved",
            "data": {
                "id": "m-1",
                "date": "2024-01-15",
                "market": "a_share",
                "pmi": 51.2,
                "created_at": "2024-01-15T09:30:00"
            }
        }))),
    );

    let client = client_for(&server);
    let record = MacroRecord {
        id: None,
        date: date("2024-01-15"),
        market: Market::AShare,
        pmi: Some(dec!(51.2)),
        cpi: None,
        ppi: None,
        m2: None,
        interest_rate: None,
        other_macro: None,
        created_at: None,
    };

    let response = client.data_input().add_macro_data(&record).await.unwrap();
    assert_eq!(response.message, "macro data saved");
    assert_eq!(response.data.id.as_deref(), Some("m-1"));
    assert_eq!(response.data.pmi, Some(dec!(51.2)));
}

#[tokio::test]
async fn fetch_macro_data_sends_only_set_query_fields() {
    let server = SERVER_POOL.get_server();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/data/macro"),
            request::query(url_decoded(all_of![
                contains(("market", "a_share")),
                contains(("start_date", "2024-01-01")),
                not(contains(key("end_date"))),
            ])),
        ])
        .respond_with(json_encoded(json!({"data": [], "count": 0}))),
    );

    let client = client_for(&server);
    let query = RecordQuery {
        market: Some(Market::AShare),
        start_date: Some(date("2024-01-01")),
        end_date: None,
    };

    let response = client.data_input().fetch_macro_data(&query).await.unwrap();
    assert_eq!(response.count, 0);
    assert!(response.data.is_empty());
}

#[tokio::test]
async fn compare_markets_joins_list_parameters_with_commas() {
    let server = SERVER_POOL.get_server();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/analysis/market-comparison"),
            request::query(url_decoded(contains(("markets", "a_share,nasdaq")))),
        ])
        .respond_with(json_encoded(json!({
            "message": "market comparison succeeded",
            "data": {
                "markets": {
                    "a_share": {
                        "overall_score": 75.5,
                        "macro_score": 80.0,
                        "industry_score": 70.0,
                        "sentiment_score": 65.0,
                        "strength_level": "strong",
                        "date": "2024-01-15"
                    },
                    "nasdaq": {
                        "overall_score": 62.0,
                        "macro_score": 60.0,
                        "industry_score": 64.0,
                        "sentiment_score": 61.0,
                        "strength_level": "neutral",
                        "date": "2024-01-15"
                    }
                },
                "best_market": "a_share",
                "comparison_date": "2024-01-15"
            }
        }))),
    );

    let client = client_for(&server);
    let query = ComparisonQuery {
        date: None,
        markets: Some(vec![Market::AShare, Market::Nasdaq]),
    };

    let response = client.analysis().compare_markets(&query).await.unwrap();
    assert_eq!(response.data.best_market, Some(Market::AShare));
    assert_eq!(
        response.data.markets[&Market::AShare].strength_level,
        StrengthLevel::Strong
    );
}

#[tokio::test]
async fn comparison_chart_decodes_metric_market_grid() {
    let server = SERVER_POOL.get_server();
    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            "/visualization/market-comparison-chart",
        ))
        .respond_with(json_encoded(json!({
            "data": {
                "overall_score": {"a_share": 75.5, "nasdaq": 62.0},
                "macro_score": {"a_share": 80.0, "nasdaq": 60.0}
            },
            "markets": ["a_share", "nasdaq"],
            "indicators": ["overall_score", "macro_score"]
        }))),
    );

    let client = client_for(&server);
    let response = client
        .visualization()
        .fetch_market_comparison_chart(&crate::ComparisonChartQuery::default())
        .await
        .unwrap();

    assert_eq!(response.markets, vec![Market::AShare, Market::Nasdaq]);
    assert_eq!(
        response.data[&core_types::ScoreMetric::OverallScore][&Market::AShare],
        dec!(75.5)
    );
}

#[tokio::test]
async fn sentiment_analysis_decodes_series_and_averages() {
    let server = SERVER_POOL.get_server();
    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            "/visualization/sentiment-analysis",
        ))
        .respond_with(json_encoded(json!({
            "data": {
                "sentiment_data": [
                    {"date": "2024-01-15", "volatility": 15.5,
                     "investor_sentiment": 65.0, "technical_score": 58.0}
                ],
                "average_volatility": 15.5,
                "average_sentiment": 65.0
            }
        }))),
    );

    let client = client_for(&server);
    let response = client
        .visualization()
        .fetch_sentiment_analysis(&RecordQuery::default())
        .await
        .unwrap();

    assert_eq!(response.data.sentiment_data.len(), 1);
    assert_eq!(response.data.sentiment_data[0].technical_score, dec!(58.0));
    assert_eq!(response.data.average_volatility, dec!(15.5));
}

#[tokio::test]
async fn trend_query_sends_indicator_type_and_decodes_points() {
    let server = SERVER_POOL.get_server();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/visualization/timing-score-trend"),
            request::query(url_decoded(all_of![
                contains(("market", "hong_kong")),
                contains(("indicator_type", "sentiment")),
            ])),
        ])
        .respond_with(json_encoded(json!({
            "data": [
                {"date": "2024-01-14", "score": 61.0, "strength_level": "neutral"},
                {"date": "2024-01-15", "score": 68.5, "strength_level": "strong"}
            ],
            "count": 2
        }))),
    );

    let client = client_for(&server);
    let query = TrendQuery {
        market: Some(Market::HongKong),
        start_date: None,
        end_date: None,
        indicator_type: Some(IndicatorKind::Sentiment),
    };

    let response = client
        .visualization()
        .fetch_timing_score_trend(&query)
        .await
        .unwrap();
    assert_eq!(response.count, 2);
    assert_eq!(response.data[1].score, dec!(68.5));
    assert_eq!(response.data[1].strength_level, StrengthLevel::Strong);
}

#[tokio::test]
async fn indicator_breakdown_decodes_weighted_components() {
    let server = SERVER_POOL.get_server();
    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            "/visualization/indicator-breakdown",
        ))
        .respond_with(json_encoded(json!({
            "data": {
                "macro": {"score": 80.0, "weight": 0.4},
                "industry": {"score": 70.0, "weight": 0.3},
                "sentiment": {"score": 65.0, "weight": 0.3}
            }
        }))),
    );

    let client = client_for(&server);
    let query = SummaryQuery {
        market: Some(Market::AShare),
        date: Some(date("2024-01-15")),
    };

    let response = client
        .visualization()
        .fetch_indicator_breakdown(&query)
        .await
        .unwrap();
    assert_eq!(response.data.macro_component.weight, dec!(0.4));
    assert_eq!(response.data.sentiment.score, dec!(65.0));
}

#[tokio::test]
async fn position_chart_query_carries_available_capital() {
    let server = SERVER_POOL.get_server();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/visualization/position-sizing-chart"),
            request::query(url_decoded(contains(("available_capital", "50000")))),
        ])
        .respond_with(json_encoded(json!({
            "data": {
                "current_score": 75.5,
                "position_data": {
                    "70": {
                        "market": "a_share",
                        "date": "2024-01-15",
                        "timing_score": 70.0,
                        "strength_level": "strong",
                        "position_percentage": 60.0,
                        "position_amount": 30000.0,
                        "available_capital": 50000.0,
                        "risk_per_trade_percentage": 2.0,
                        "risk_amount": 1000.0
                    }
                }
            }
        }))),
    );

    let client = client_for(&server);
    let query = PositionChartQuery {
        market: Some(Market::AShare),
        date: None,
        available_capital: Some(dec!(50000)),
    };

    let response = client
        .visualization()
        .fetch_position_sizing_chart(&query)
        .await
        .unwrap();
    assert_eq!(response.data.current_score, dec!(75.5));
    assert_eq!(
        response.data.position_data["70"].position_amount,
        dec!(30000.0)
    );
}

#[tokio::test]
async fn dashboard_summary_decodes_the_aggregate() {
    let server = SERVER_POOL.get_server();
    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            "/visualization/dashboard-summary",
        ))
        .respond_with(json_encoded(json!({
            "data": {
                "analysis": {
                    "market": "a_share",
                    "analysis_date": "2024-01-15",
                    "overall_score": 75.5,
                    "strength_level": "strong",
                    "component_scores": {"macro": 80.0, "industry": 70.0, "sentiment": 65.0},
                    "key_indicators": {"pmi": 51.2, "volatility": 15.5},
                    "recommendation": "buy - strong timing signal"
                },
                "position": {
                    "market": "a_share",
                    "date": "2024-01-15",
                    "timing_score": 75.5,
                    "strength_level": "strong",
                    "position_percentage": 60.0,
                    "position_amount": 60000.0,
                    "available_capital": 100000.0,
                    "risk_per_trade_percentage": 2.0,
                    "risk_amount": 2000.0
                },
                "market_config": {
                    "enabled": true,
                    "indices": ["000001.SH", "399001.SZ"],
                    "update_frequency": "daily"
                }
            }
        }))),
    );

    let client = client_for(&server);
    let query = SummaryQuery {
        market: Some(Market::AShare),
        date: None,
    };

    let response = client
        .visualization()
        .fetch_dashboard_summary(&query)
        .await
        .unwrap();
    let dashboard = response.data;
    assert_eq!(dashboard.analysis.overall_score, dec!(75.5));
    assert_eq!(dashboard.analysis.key_indicators.cpi, None);
    assert_eq!(dashboard.position.position_amount, dec!(60000.0));
    assert!(dashboard.market_config.enabled);
}

struct TokenInterceptor;

#[async_trait]
impl RequestInterceptor for TokenInterceptor {
    async fn intercept(&self, request: RequestBuilder) -> RequestBuilder {
        request.header("x-api-token", "secret")
    }
}

#[tokio::test]
async fn interceptor_header_is_observed_server_side() {
    let server = SERVER_POOL.get_server();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/data/health"),
            request::headers(contains(("x-api-token", "secret"))),
        ])
        .respond_with(json_encoded(
            json!({"status": "healthy", "service": "data_input"}),
        )),
    );

    let client = client_for(&server).with_interceptor(TokenInterceptor);
    let health = client.health().check_data_service().await.unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.service, "data_input");
}

#[tokio::test]
async fn passthrough_interceptor_adds_nothing() {
    let server = SERVER_POOL.get_server();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/analysis/health"),
            request::headers(not(contains(key("x-api-token")))),
        ])
        .respond_with(json_encoded(
            json!({"status": "healthy", "service": "analysis"}),
        )),
    );

    let client = client_for(&server);
    let health = client.health().check_analysis_service().await.unwrap();
    assert_eq!(health.service, "analysis");
}
