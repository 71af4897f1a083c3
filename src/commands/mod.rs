//! Command-line interface and orchestration for covid-gist
//!
//! # Commands
//!
//! - **update**: fetch the global summary statistics, render them as a bar graph, and
//!   overwrite the configured gist file. With `--dry-run` the graph is printed instead.
//! - **init**: write the default configuration file.
//!
//! ## Execution Flow
//!
//! `update` runs strictly in sequence: load configuration, fetch, render, publish. Nothing
//! is retried and nothing is kept between runs. The first failure aborts the run, is
//! reported on the host's error stream, and is returned to the caller so the process exits
//! with a non-zero status.
//!
//! Identity values resolve as command-line flag, then environment variable (`GIST_ID`,
//! `GH_USERNAME`), then configuration file. The access token is only taken from `--token`
//! or `GH_TOKEN`.

mod common;
mod host;
mod init;
mod run;
mod update;

pub use common::LogLevel;
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use run::run;
pub use update::{UpdateArgs, update};
