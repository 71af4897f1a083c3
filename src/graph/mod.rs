//! Text bar graphs for summary metrics
//!
//! Turns a set of labelled counts into a block of text lines. Each line holds the label,
//! the count abbreviated with a unit suffix (`K`, `M`, `B`, `T`), and a bar whose length
//! is proportional to the largest count. Labels and values are padded to a shared width
//! so every bar starts in the same column. Line order is shuffled on each render and a
//! footer is appended.

mod abbreviation;
mod renderer;

pub use abbreviation::abbreviate;
pub use renderer::{GraphOptions, RankedEntry, Renderer};
