//! Publish a COVID-19 summary bar graph to a GitHub gist.
//!
//! # Overview
//!
//! `covid-gist` is a single-shot batch job meant to be run by an external scheduler
//! (cron, a CI schedule, ...). Each invocation fetches the global totals from the summary
//! statistics API, renders them as a bar graph such as
//!
//! ```text
//! 😄 Recovered 0.9 M ▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒▒
//! 🤒 Confirmed 1.0 M ░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░
//! 😵 Deaths    0.1 M ▓▓
//! Stay Safe! Stay home! 💖
//! ```
//!
//! and overwrites a file in the configured gist with it.
//!
//! # Usage
//!
//! ```bash
//! export GIST_ID=0123456789abcdef
//! export GH_USERNAME=octocat
//! export GH_TOKEN=ghp_xxxxxxxxxxxxxxxxxxxx
//! covid-gist update
//! ```
//!
//! Preview the graph without publishing:
//!
//! ```bash
//! covid-gist update --dry-run
//! ```
//!
//! # Configuration
//!
//! Defaults can be checked in as `covid-gist.toml`; generate one with:
//!
//! ```bash
//! covid-gist init
//! ```
//!
//! The access token is never read from the configuration file.
//!
//! # Exit codes
//!
//! - `0`: the gist was updated (or the dry run succeeded)
//! - `1`: any stage failed; the error is printed to stderr
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use covid_gist::{Host, run};
use std::io::Write;
use std::io::{stderr, stdout};

/// Host backed by the process's standard streams.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

#[cfg_attr(coverage_nightly, coverage(off))]
impl Host for RealHost {
    fn output(&mut self) -> impl Write {
        stdout()
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }
}

#[tokio::main]
#[cfg_attr(coverage_nightly, coverage(off))]
async fn main() {
    // commands report their own failures on the host's error stream
    if run(&mut RealHost, std::env::args()).await.is_err() {
        std::process::exit(1);
    }
}
