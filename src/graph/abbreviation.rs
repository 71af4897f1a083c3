use crate::Result;
use ohno::bail;

/// Unit suffixes and their power of ten, largest first
const UNITS: [(&str, i32); 4] = [("T", 12), ("B", 9), ("M", 6), ("K", 3)];

/// Render a count with one decimal digit and a unit suffix, e.g. `1.2 M`.
///
/// The largest unit whose rounded value is non-zero wins. Rounding happens one power of
/// ten below the unit and the result is then divided by ten, so `50_000` becomes `0.1 M`
/// rather than `50.0 K`.
///
/// # Errors
///
/// Fails for values that round to zero in every unit (anything below 50).
pub fn abbreviate(num: u64) -> Result<String> {
    #[expect(clippy::cast_precision_loss, reason = "one significant decimal is all that is displayed")]
    let value = num as f64;

    for (suffix, exponent) in UNITS {
        let divisor = 10_f64.powi(exponent - 1);
        let scaled = (value / divisor).round() / 10.0;
        let text = scaled.to_string();

        if text != "0" {
            return Ok(if text.contains('.') {
                format!("{text} {suffix}")
            } else {
                format!("{text}.0 {suffix}")
            });
        }
    }

    bail!("number {num} is too small to abbreviate")
}
