use crate::Result;
use camino::{Utf8Path, Utf8PathBuf};
use core::time::Duration;
use ohno::{EnrichableExt, IntoAppError, app_err};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use url::Url;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// File looked up in the base directory when no explicit path is given
pub const DEFAULT_CONFIG_FILE_NAME: &str = "covid-gist.toml";

/// HTTP verb used to overwrite the gist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishMethod {
    #[default]
    Post,
    Patch,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Gist to overwrite, used when neither the CLI nor the environment supplies one
    #[serde(default)]
    pub gist_id: String,

    /// Gist owner, used when neither the CLI nor the environment supplies one
    #[serde(default)]
    pub username: String,

    /// Endpoint returning the global summary statistics
    #[serde(default = "default_summary_url")]
    pub summary_url: String,

    /// Base URL of the gist REST API
    #[serde(default = "default_gist_api_url")]
    pub gist_api_url: String,

    #[serde(default = "default_gist_description")]
    pub gist_description: String,

    /// Name of the file inside the gist whose content gets replaced
    #[serde(default = "default_gist_filename")]
    pub gist_filename: String,

    #[serde(default)]
    pub publish_method: PublishMethod,

    /// Timeout applied to every HTTP request
    #[serde(default = "default_request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,

    #[serde(default)]
    pub graph: GraphConfig,
}

/// The `[graph]` table
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GraphConfig {
    /// Total width of each rendered line
    #[serde(default = "default_line_length")]
    pub line_length: usize,

    /// Bar glyphs, assigned by rank after sorting
    #[serde(default = "default_glyphs")]
    pub glyphs: Vec<String>,

    /// Text appended after the graph lines
    #[serde(default = "default_footer")]
    pub footer: String,
}

fn default_summary_url() -> String {
    "https://api.covid19api.com/summary".to_string()
}

fn default_gist_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_gist_description() -> String {
    "COVID 19 Update".to_string()
}

fn default_gist_filename() -> String {
    "status.txt".to_string()
}

const fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

const fn default_line_length() -> usize {
    60
}

fn default_glyphs() -> Vec<String> {
    vec!["▓".to_string(), "▒".to_string(), "░".to_string()]
}

fn default_footer() -> String {
    "Stay Safe! Stay home! 💖".to_string()
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            line_length: default_line_length(),
            glyphs: default_glyphs(),
            footer: default_footer(),
        }
    }
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// An explicit `config_path` must exist. Without one, `covid-gist.toml` in `base_dir`
    /// is used if present, and the embedded defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails validation
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading configuration file '{path}'"))?;
            (path.clone(), text)
        } else {
            let path = base_dir.join(DEFAULT_CONFIG_FILE_NAME);
            match fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    return Ok(Self::default());
                }
                Err(e) => return Err(e).into_app_err_with(|| format!("reading configuration file '{path}'")),
            }
        };

        let config: Self = toml::from_str(&text).into_app_err_with(|| format!("parsing configuration file '{final_path}'"))?;
        config
            .validate()
            .map_err(|e| e.enrich_with(|| format!("validating configuration file '{final_path}'")))?;

        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a URL does not parse or a value is out of range
    pub fn validate(&self) -> Result<()> {
        let _ = Url::parse(&self.summary_url).into_app_err_with(|| format!("summary_url '{}' is not a valid URL", self.summary_url))?;
        let _ = Url::parse(&self.gist_api_url).into_app_err_with(|| format!("gist_api_url '{}' is not a valid URL", self.gist_api_url))?;

        if self.gist_filename.is_empty() {
            return Err(app_err!("gist_filename must not be empty"));
        }

        if self.request_timeout.is_zero() {
            return Err(app_err!("request_timeout must be greater than zero"));
        }

        if self.graph.line_length == 0 {
            return Err(app_err!("graph.line_length must be greater than zero"));
        }

        if self.graph.glyphs.is_empty() {
            return Err(app_err!("graph.glyphs must contain at least one glyph"));
        }

        if self.graph.glyphs.iter().any(String::is_empty) {
            return Err(app_err!("graph.glyphs must not contain empty strings"));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        toml::from_str(DEFAULT_CONFIG_TOML).expect("default_config.toml should be valid TOML that deserializes to Config")
    }
}
