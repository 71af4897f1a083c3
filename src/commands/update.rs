use super::Host;
use crate::Result;
use crate::config::Config;
use crate::facts::SummaryClient;
use crate::graph::{GraphOptions, Renderer};
use crate::publish::{GistClient, PublishRequest};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use ohno::IntoAppError;
use std::io::Write;

#[derive(Args, Debug, Default)]
pub struct UpdateArgs {
    /// Identifier of the gist to overwrite
    #[arg(long, value_name = "ID", env = "GIST_ID")]
    pub gist_id: Option<String>,

    /// GitHub user owning the gist
    #[arg(long, value_name = "NAME", env = "GH_USERNAME")]
    pub username: Option<String>,

    /// Access token used to authenticate against the gist API
    #[arg(long, value_name = "TOKEN", env = "GH_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Path to configuration file (default is `covid-gist.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Print the rendered graph instead of publishing it
    #[arg(long)]
    pub dry_run: bool,
}

/// Fetch the statistics, render them, and publish the result once
pub async fn update<H: Host>(host: &mut H, args: &UpdateArgs) -> Result<()> {
    match update_inner(host, args).await {
        Ok(()) => Ok(()),
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Update failed: {e}");
            Err(e)
        }
    }
}

async fn update_inner<H: Host>(host: &mut H, args: &UpdateArgs) -> Result<()> {
    let config = Config::load(Utf8Path::new("."), args.config.as_ref())?;

    let summary = SummaryClient::new(&config.summary_url, config.request_timeout)?;
    let metrics = summary.fetch().await?;

    let renderer = Renderer::new(GraphOptions::from(&config.graph));
    let content = renderer.render_metrics(&metrics, &mut rand::rng())?;

    if args.dry_run {
        log::info!("dry run, not publishing");
        writeln!(host.output(), "{content}").into_app_err("writing rendered graph")?;
        return Ok(());
    }

    let request = build_request(args, &config, content);
    let gist = GistClient::new(
        &config.gist_api_url,
        &config.gist_description,
        &config.gist_filename,
        config.publish_method,
        config.request_timeout,
    )?;

    gist.publish(&request).await
}

/// Combine command-line/environment values with the configuration file fallbacks
fn build_request(args: &UpdateArgs, config: &Config, content: String) -> PublishRequest {
    let token = args.token.clone().unwrap_or_default();
    if token.is_empty() {
        log::warn!("no access token provided, set GH_TOKEN or pass --token");
    }

    PublishRequest {
        gist_id: pick(args.gist_id.as_deref(), &config.gist_id),
        username: pick(args.username.as_deref(), &config.username),
        token,
        content,
    }
}

fn pick(preferred: Option<&str>, fallback: &str) -> String {
    preferred.filter(|value| !value.is_empty()).unwrap_or(fallback).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            gist_id: "from-config".to_string(),
            username: "config-user".to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn test_pick_prefers_explicit_value() {
        assert_eq!(pick(Some("cli"), "file"), "cli");
        assert_eq!(pick(None, "file"), "file");
        assert_eq!(pick(Some(""), "file"), "file");
    }

    #[test]
    fn test_build_request_falls_back_to_config() {
        let request = build_request(&UpdateArgs::default(), &config(), "graph".to_string());
        assert_eq!(request.gist_id, "from-config");
        assert_eq!(request.username, "config-user");
        assert_eq!(request.token, "");
        assert_eq!(request.content, "graph");
    }

    #[test]
    fn test_build_request_uses_arguments() {
        let args = UpdateArgs {
            gist_id: Some("abc123".to_string()),
            username: Some("octocat".to_string()),
            token: Some("secret".to_string()),
            ..UpdateArgs::default()
        };
        let request = build_request(&args, &config(), "graph".to_string());
        assert_eq!(request.gist_id, "abc123");
        assert_eq!(request.username, "octocat");
        assert_eq!(request.token, "secret");
    }
}
