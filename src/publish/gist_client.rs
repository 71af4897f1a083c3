//! Gist REST API client

use super::{GistUpdate, PublishRequest};
use crate::Result;
use crate::config::PublishMethod;
use core::time::Duration;
use ohno::{IntoAppError, bail};
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, HeaderValue};

#[derive(Debug, Clone)]
pub struct GistClient {
    client: reqwest::Client,
    base_url: String,
    description: String,
    filename: String,
    method: PublishMethod,
}

impl GistClient {
    /// Create a client that writes `filename` in gists under `base_url`
    pub fn new(
        base_url: impl Into<String>,
        description: impl Into<String>,
        filename: impl Into<String>,
        method: PublishMethod,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("covid-gist")
            .timeout(timeout)
            .build()
            .into_app_err("unable to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            description: description.into(),
            filename: filename.into(),
            method,
        })
    }

    /// URL of the gist resource
    #[must_use]
    pub fn gist_url(&self, gist_id: &str) -> String {
        format!("{}/gists/{gist_id}", self.base_url.trim_end_matches('/'))
    }

    #[must_use]
    pub fn method(&self) -> Method {
        match self.method {
            PublishMethod::Post => Method::POST,
            PublishMethod::Patch => Method::PATCH,
        }
    }

    /// Overwrite the gist file with the request's content
    pub async fn publish(&self, request: &PublishRequest) -> Result<()> {
        let url = self.gist_url(&request.gist_id);
        let method = self.method();

        let mut auth_val = HeaderValue::from_str(&request.authorization()).into_app_err("building authorization header")?;
        auth_val.set_sensitive(true);

        log::info!("publishing {} bytes to {method} {url}", request.content.len());

        let resp = self
            .client
            .request(method, &url)
            .header(AUTHORIZATION, auth_val)
            .json(&GistUpdate::new(&self.description, &self.filename, &request.content))
            .send()
            .await
            .into_app_err_with(|| format!("publishing gist '{}'", request.gist_id))?;

        let status = resp.status();
        if !status.is_success() {
            bail!("gist update failed: HTTP {status}");
        }

        log::info!("gist '{}' updated (HTTP {status})", request.gist_id);
        Ok(())
    }
}
