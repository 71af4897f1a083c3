pub const CONFIRMED_LABEL: &str = "🤒 Confirmed";
pub const DEATHS_LABEL: &str = "😵 Deaths";
pub const RECOVERED_LABEL: &str = "😄 Recovered";

/// Global pandemic summary counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricSet {
    pub confirmed: u64,
    pub deaths: u64,
    pub recovered: u64,
}

impl MetricSet {
    /// Labelled values in declaration order
    #[must_use]
    pub const fn entries(&self) -> [(&'static str, u64); 3] {
        [
            (CONFIRMED_LABEL, self.confirmed),
            (DEATHS_LABEL, self.deaths),
            (RECOVERED_LABEL, self.recovered),
        ]
    }
}
