//! Integration tests for the summary statistics client using wiremock

use core::time::Duration;
use covid_gist::facts::{MetricSet, SummaryClient};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> SummaryClient {
    SummaryClient::new(format!("{}/summary", server.uri()), Duration::from_secs(5)).expect("Failed to create client")
}

#[tokio::test]
async fn test_fetch_extracts_global_totals() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Global": {
                "NewConfirmed": 1,
                "TotalConfirmed": 1_000_000,
                "TotalDeaths": 50_000,
                "TotalRecovered": 900_000
            },
            "Countries": []
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let metrics = client_for(&mock_server).await.fetch().await.unwrap();

    assert_eq!(
        metrics,
        MetricSet {
            confirmed: 1_000_000,
            deaths: 50_000,
            recovered: 900_000,
        }
    );
}

#[tokio::test]
async fn test_fetch_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/summary"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).await.fetch().await.unwrap_err();
    assert!(err.to_string().contains("HTTP 500"), "unexpected error: {err}");
}

#[tokio::test]
async fn test_fetch_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>caching in progress</html>"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).await.fetch().await.unwrap_err();
    assert!(err.to_string().contains("parsing summary statistics response"), "unexpected error: {err}");
}

#[tokio::test]
async fn test_fetch_missing_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "Global": { "TotalConfirmed": 5 } })))
        .mount(&mock_server)
        .await;

    let _ = client_for(&mock_server).await.fetch().await.unwrap_err();
}

#[tokio::test]
async fn test_fetch_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/summary"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let client = SummaryClient::new(format!("{}/summary", mock_server.uri()), Duration::from_millis(200)).unwrap();
    let _ = client.fetch().await.unwrap_err();
}
