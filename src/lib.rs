//! covid-gist crate
//!
//! Fetches global COVID-19 summary statistics, renders them as a small text bar graph, and
//! publishes the result to a GitHub gist. This crate is the implementation behind the
//! `covid-gist` tool; its API may change without warning.

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[doc(hidden)]
pub mod commands;

#[doc(hidden)]
pub mod config;

#[doc(hidden)]
pub mod facts;

#[doc(hidden)]
pub mod graph;

#[doc(hidden)]
pub mod publish;

pub use crate::commands::{Host, run};
