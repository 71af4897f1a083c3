//! Client for the global summary statistics endpoint

use super::MetricSet;
use crate::Result;
use core::time::Duration;
use ohno::{IntoAppError, bail};
use serde::Deserialize;

/// Top-level shape of the summary response; everything except `Global` is ignored
#[derive(Debug, Deserialize)]
pub struct SummaryResponse {
    #[serde(rename = "Global")]
    pub global: GlobalSummary,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GlobalSummary {
    pub total_confirmed: u64,
    pub total_deaths: u64,
    pub total_recovered: u64,
}

impl From<GlobalSummary> for MetricSet {
    fn from(global: GlobalSummary) -> Self {
        Self {
            confirmed: global.total_confirmed,
            deaths: global.total_deaths,
            recovered: global.total_recovered,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SummaryClient {
    client: reqwest::Client,
    url: String,
}

impl SummaryClient {
    /// Create a client for the given summary endpoint
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("covid-gist")
            .timeout(timeout)
            .build()
            .into_app_err("unable to create HTTP client")?;

        Ok(Self { client, url: url.into() })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the current global totals
    pub async fn fetch(&self) -> Result<MetricSet> {
        log::debug!("fetching summary statistics from '{}'", self.url);

        let resp = self
            .client
            .get(&self.url)
            .send()
            .await
            .into_app_err_with(|| format!("fetching summary statistics from '{}'", self.url))?;

        let status = resp.status();
        if !status.is_success() {
            bail!("summary statistics request failed: HTTP {status}");
        }

        let body = resp
            .bytes()
            .await
            .into_app_err_with(|| format!("could not read response body from '{}'", self.url))?;

        let summary: SummaryResponse = serde_json::from_slice(&body).into_app_err("parsing summary statistics response")?;
        let metrics = MetricSet::from(summary.global);

        log::info!(
            "fetched summary statistics: {} confirmed, {} deaths, {} recovered",
            metrics.confirmed,
            metrics.deaths,
            metrics.recovered
        );

        Ok(metrics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_deserialize_ignores_other_fields() {
        let json = r#"{
            "Message": "",
            "Global": {
                "NewConfirmed": 100,
                "TotalConfirmed": 1000000,
                "NewDeaths": 10,
                "TotalDeaths": 50000,
                "NewRecovered": 90,
                "TotalRecovered": 900000,
                "Date": "2020-04-05T06:37:00Z"
            },
            "Countries": []
        }"#;

        let summary: SummaryResponse = serde_json::from_str(json).unwrap();
        let metrics = MetricSet::from(summary.global);
        assert_eq!(
            metrics,
            MetricSet {
                confirmed: 1_000_000,
                deaths: 50_000,
                recovered: 900_000,
            }
        );
    }

    #[test]
    fn test_summary_missing_global() {
        let result: serde_json::Result<SummaryResponse> = serde_json::from_str(r#"{"Countries": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_summary_missing_field() {
        let json = r#"{"Global": {"TotalConfirmed": 1, "TotalDeaths": 2}}"#;
        let result: serde_json::Result<SummaryResponse> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_summary_negative_count() {
        let json = r#"{"Global": {"TotalConfirmed": -1, "TotalDeaths": 2, "TotalRecovered": 3}}"#;
        let result: serde_json::Result<SummaryResponse> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_summary_non_numeric_count() {
        let json = r#"{"Global": {"TotalConfirmed": "many", "TotalDeaths": 2, "TotalRecovered": 3}}"#;
        let result: serde_json::Result<SummaryResponse> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_client_new() {
        let client = SummaryClient::new("https://api.covid19api.com/summary", Duration::from_secs(5)).unwrap();
        assert_eq!(client.url(), "https://api.covid19api.com/summary");
    }
}
