//! Summary statistics collection
//!
//! The [`SummaryClient`] issues a single GET against the statistics endpoint and pulls the
//! three global totals out of the response's `Global` object. Any transport error, non-2xx
//! status, or unexpected response shape is returned as an error; nothing is retried.

mod metric_set;
mod summary_client;

pub use metric_set::{CONFIRMED_LABEL, DEATHS_LABEL, MetricSet, RECOVERED_LABEL};
pub use summary_client::{GlobalSummary, SummaryClient, SummaryResponse};
