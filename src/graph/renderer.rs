use super::abbreviate;
use crate::Result;
use crate::config::GraphConfig;
use crate::facts::MetricSet;
use ohno::bail;
use rand::Rng;
use rand::seq::SliceRandom;
use unicode_width::UnicodeWidthStr;

/// Characters reserved around the abbreviated value: one separating it from the label and
/// one separating it from the bar.
const VALUE_PADDING: usize = 2;

/// Options controlling how a graph is drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphOptions {
    /// Total width of each rendered line
    pub line_length: usize,

    /// Glyphs used for the bars, in any order
    pub glyphs: Vec<String>,

    /// Text appended verbatim after the graph lines
    pub footer: String,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            line_length: 60,
            glyphs: vec!["▓".to_string(), "▒".to_string(), "░".to_string()],
            footer: String::new(),
        }
    }
}

impl From<&GraphConfig> for GraphOptions {
    fn from(config: &GraphConfig) -> Self {
        Self {
            line_length: config.line_length,
            glyphs: config.glyphs.clone(),
            footer: config.footer.clone(),
        }
    }
}

/// A metric after ranking, carrying its abbreviated value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry<'a> {
    /// Label drawn at the start of the line
    pub label: &'a str,

    /// Raw value used for ranking and bar length
    pub value: u64,

    /// Shortened form of `value` shown before the bar
    pub abbreviation: String,
}

impl RankedEntry<'_> {
    /// Width of the label plus abbreviated value, including padding
    fn prefix_width(&self) -> usize {
        display_len(self.label) + display_len(&self.abbreviation) + VALUE_PADDING
    }
}

/// Draws labelled horizontal bar graphs
#[derive(Debug, Clone)]
pub struct Renderer {
    options: GraphOptions,
}

impl Renderer {
    /// Create a renderer. Glyphs are put in code point order so rank `i` always gets the
    /// same glyph regardless of how they were configured.
    #[must_use]
    pub fn new(mut options: GraphOptions) -> Self {
        options.glyphs.sort();
        Self { options }
    }

    /// The glyphs in the order they are assigned to ranks
    #[must_use]
    pub fn glyphs(&self) -> &[String] {
        &self.options.glyphs
    }

    /// Sort entries by value, largest first, and abbreviate each value.
    ///
    /// The sort is stable so equal values keep their input order.
    ///
    /// # Errors
    ///
    /// Fails if a value is too small to abbreviate.
    pub fn rank<'a>(entries: &[(&'a str, u64)]) -> Result<Vec<RankedEntry<'a>>> {
        let mut sorted = entries.to_vec();
        sorted.sort_by(|(_, a), (_, b)| b.cmp(a));

        sorted
            .into_iter()
            .map(|(label, value)| {
                Ok(RankedEntry {
                    label,
                    value,
                    abbreviation: abbreviate(value)?,
                })
            })
            .collect()
    }

    /// Column at which every bar starts
    #[must_use]
    pub fn alignment_width(ranked: &[RankedEntry<'_>]) -> usize {
        ranked.iter().map(RankedEntry::prefix_width).max().unwrap_or(0)
    }

    /// Build one line per entry in rank order.
    ///
    /// # Errors
    ///
    /// Fails if there are no entries, no glyphs, or a value is too small to abbreviate.
    pub fn lines(&self, entries: &[(&str, u64)]) -> Result<Vec<String>> {
        if entries.is_empty() {
            bail!("no metrics to render");
        }

        if self.options.glyphs.is_empty() {
            bail!("no glyphs to draw bars with");
        }

        let ranked = Self::rank(entries)?;
        let width = Self::alignment_width(&ranked);
        let graph_space = self.options.line_length.saturating_sub(width);
        let max_value = ranked.first().map_or(0, |entry| entry.value);

        let lines = ranked
            .iter()
            .enumerate()
            .map(|(index, entry)| {
                let glyph = &self.options.glyphs[index % self.options.glyphs.len()];
                let gap = width - (display_len(entry.label) + display_len(&entry.abbreviation) + 1);

                format!(
                    "{}{}{} {}",
                    entry.label,
                    " ".repeat(gap),
                    entry.abbreviation,
                    glyph.repeat(bar_length(entry.value, max_value, graph_space))
                )
            })
            .collect();

        Ok(lines)
    }

    /// Render the entries as a shuffled block of lines followed by the footer.
    ///
    /// The output ends with the footer itself; no newline is added after it.
    ///
    /// # Errors
    ///
    /// See [`Renderer::lines`].
    pub fn render<R: Rng + ?Sized>(&self, entries: &[(&str, u64)], rng: &mut R) -> Result<String> {
        let mut lines = self.lines(entries)?;
        lines.shuffle(rng);
        log::debug!("rendered {} graph lines", lines.len());

        let mut output = lines.join("\n");
        output.push('\n');
        output.push_str(&self.options.footer);
        Ok(output)
    }

    /// Render the three summary metrics.
    ///
    /// # Errors
    ///
    /// See [`Renderer::lines`].
    pub fn render_metrics<R: Rng + ?Sized>(&self, metrics: &MetricSet, rng: &mut R) -> Result<String> {
        self.render(&metrics.entries(), rng)
    }
}

/// Number of glyphs for `value` when `max_value` spans `graph_space`
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "bar lengths are small and non-negative"
)]
fn bar_length(value: u64, max_value: u64, graph_space: usize) -> usize {
    if max_value == 0 {
        return 0;
    }

    ((value as f64 / max_value as f64) * graph_space as f64).floor() as usize
}

/// Terminal columns occupied by `text`; emoji count as two
fn display_len(text: &str) -> usize {
    text.width()
}
