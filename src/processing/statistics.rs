use serde::Serialize;
use std::fmt;

/// Median of a dataset. Odd-length data yields the middle element, which is
/// displayed as-is; even-length data yields the midpoint of the two middle
/// elements, displayed with two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Median {
    Middle(f64),
    Midpoint(f64),
}

impl fmt::Display for Median {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Median::Middle(v) => write!(f, "{}", format_value(*v)),
            Median::Midpoint(v) => f.write_str(&format_fixed2(*v)),
        }
    }
}

/// Format a raw data value the way it is shown next to its marker:
/// shortest representation, no trailing `.0`. Magnitudes of 1e21 and up
/// switch to exponent form with an explicit sign (`1e+21`).
pub fn format_value(v: f64) -> String {
    // Avoid printing "-0".
    let v = if v == 0.0 { 0.0 } else { v };
    if v.abs() >= 1e21 {
        let s = format!("{v:e}");
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => s,
        };
    }
    format!("{v}")
}

/// Format with exactly two decimals, rounding exact ties away from zero.
///
/// `{:.2}` rounds a value sitting exactly halfway (1.125, 0.625) to even;
/// the result panels round those up instead. Negative zero prints as `0.00`.
pub fn format_fixed2(v: f64) -> String {
    let v = if v == 0.0 { 0.0 } else { v };
    let magnitude = v.abs();
    if magnitude < 1e15 && is_third_decimal_tie(magnitude) {
        // Exact: the tie is k + 0.5 after scaling, well inside f64 precision.
        let rounded = (magnitude * 100.0 + 0.5).floor() / 100.0;
        let sign = if v < 0.0 { "-" } else { "" };
        return format!("{sign}{rounded:.2}");
    }
    format!("{v:.2}")
}

/// Whether the exact decimal expansion of `magnitude` ends in a 5 at the
/// third fractional digit.
fn is_third_decimal_tie(magnitude: f64) -> bool {
    // 1100 digits covers the longest fractional expansion an f64 can have.
    let exact = format!("{magnitude:.1100}");
    let Some((_, frac)) = exact.split_once('.') else {
        return false;
    };
    let frac = frac.as_bytes();
    frac.len() >= 3 && frac[2] == b'5' && frac[3..].iter().all(|&d| d == b'0')
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

pub fn median(values: &[f64]) -> Option<Median> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some(Median::Midpoint((sorted[mid - 1] + sorted[mid]) / 2.0))
    } else {
        Some(Median::Middle(sorted[mid]))
    }
}

/// All values sharing the highest frequency, ascending. When every value
/// occurs equally often they are all modes.
pub fn mode(values: &[f64]) -> Option<Vec<f64>> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    // Run-length count over the sorted copy. `==` keeps -0 and 0 together.
    let mut counts: Vec<(f64, usize)> = Vec::new();
    for v in sorted {
        match counts.last_mut() {
            Some((last, n)) if *last == v => *n += 1,
            _ => counts.push((v, 1)),
        }
    }

    let max_freq = counts.iter().map(|&(_, n)| n).max().unwrap_or(0);
    Some(
        counts
            .into_iter()
            .filter(|&(_, n)| n == max_freq)
            .map(|(v, _)| v)
            .collect(),
    )
}

pub fn range(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(max - min)
}

/// The four descriptive statistics shown in the result panels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsResult {
    pub count: usize,
    pub mean: f64,
    pub median: Median,
    pub mode: Vec<f64>,
    pub range: f64,
}

impl StatisticsResult {
    /// Compute every statistic from scratch. Returns `None` for an empty
    /// dataset so the display can show its absent state.
    pub fn compute(values: &[f64]) -> Option<Self> {
        Some(Self {
            count: values.len(),
            mean: mean(values)?,
            median: median(values)?,
            mode: mode(values)?,
            range: range(values)?,
        })
    }

    pub fn mean_label(&self) -> String {
        format_fixed2(self.mean)
    }

    pub fn median_label(&self) -> String {
        self.median.to_string()
    }

    pub fn mode_label(&self) -> String {
        self.mode
            .iter()
            .map(|v| format_value(*v))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn range_label(&self) -> String {
        format_fixed2(self.range)
    }

    /// One-line report for the clipboard.
    pub fn summary(&self) -> String {
        format!(
            "Mean: {} | Median: {} | Mode: {} | Range: {}",
            self.mean_label(),
            self.median_label(),
            self.mode_label(),
            self.range_label()
        )
    }

    /// JSON document with both display labels and raw values.
    pub fn to_json(&self) -> Result<String, String> {
        let doc = serde_json::json!({
            "labels": {
                "mean": self.mean_label(),
                "median": self.median_label(),
                "mode": self.mode_label(),
                "range": self.range_label(),
            },
            "values": self,
        });
        serde_json::to_string_pretty(&doc).map_err(|e| format!("Failed to serialize statistics: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [f64; 4] = [3.0, 5.0, 8.0, 12.0];

    #[test]
    fn mean_two_decimals() {
        let stats = StatisticsResult::compute(&SAMPLE).unwrap();
        assert_eq!(stats.mean_label(), "7.00");
    }

    #[test]
    fn median_even_count_is_formatted() {
        let stats = StatisticsResult::compute(&SAMPLE).unwrap();
        assert_eq!(stats.median, Median::Midpoint(6.5));
        assert_eq!(stats.median_label(), "6.50");
    }

    #[test]
    fn median_odd_count_is_unformatted() {
        assert_eq!(median(&[3.0, 5.0, 8.0]), Some(Median::Middle(5.0)));
        assert_eq!(median(&[3.0, 5.0, 8.0]).unwrap().to_string(), "5");
        assert_eq!(median(&[1.5]).unwrap().to_string(), "1.5");
    }

    #[test]
    fn median_sorts_unsorted_input() {
        assert_eq!(median(&[9.0, 1.0, 4.0]), Some(Median::Middle(4.0)));
    }

    #[test]
    fn mode_single_winner() {
        let stats = StatisticsResult::compute(&[3.0, 3.0, 5.0, 8.0]).unwrap();
        assert_eq!(stats.mode_label(), "3");
    }

    #[test]
    fn mode_ties_are_joined_ascending() {
        let stats = StatisticsResult::compute(&[5.0, 3.0, 5.0, 3.0]).unwrap();
        assert_eq!(stats.mode_label(), "3, 5");
    }

    #[test]
    fn mode_all_distinct_lists_everything() {
        let stats = StatisticsResult::compute(&SAMPLE).unwrap();
        assert_eq!(stats.mode_label(), "3, 5, 8, 12");
    }

    #[test]
    fn range_two_decimals() {
        let stats = StatisticsResult::compute(&SAMPLE).unwrap();
        assert_eq!(stats.range_label(), "9.00");
    }

    #[test]
    fn single_element() {
        let stats = StatisticsResult::compute(&[4.0]).unwrap();
        assert_eq!(stats.mean_label(), "4.00");
        assert_eq!(stats.median_label(), "4");
        assert_eq!(stats.mode_label(), "4");
        assert_eq!(stats.range_label(), "0.00");
    }

    #[test]
    fn empty_dataset_has_no_statistics() {
        assert_eq!(mean(&[]), None);
        assert_eq!(median(&[]), None);
        assert_eq!(mode(&[]), None);
        assert_eq!(range(&[]), None);
        assert!(StatisticsResult::compute(&[]).is_none());
    }

    #[test]
    fn recompute_is_idempotent() {
        let first = StatisticsResult::compute(&SAMPLE);
        let second = StatisticsResult::compute(&SAMPLE);
        assert_eq!(first, second);
    }

    #[test]
    fn summary_line() {
        let stats = StatisticsResult::compute(&[3.0, 3.0, 5.0, 5.0]).unwrap();
        assert_eq!(
            stats.summary(),
            "Mean: 4.00 | Median: 4.00 | Mode: 3, 5 | Range: 2.00"
        );
    }

    #[test]
    fn json_carries_labels_and_values() {
        let stats = StatisticsResult::compute(&[3.0, 5.0, 8.0]).unwrap();
        let json = stats.to_json().unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["labels"]["median"], "5");
        assert_eq!(parsed["values"]["count"], 3);
        assert_eq!(parsed["values"]["median"]["kind"], "middle");
    }

    #[test]
    fn exact_ties_round_up() {
        let stats = StatisticsResult::compute(&[1.0, 1.25]).unwrap();
        assert_eq!(stats.mean_label(), "1.13");
        assert_eq!(stats.median_label(), "1.13");
        assert_eq!(format_fixed2(0.125), "0.13");
        assert_eq!(format_fixed2(0.625), "0.63");
        assert_eq!(format_fixed2(10.125), "10.13");
        assert_eq!(format_fixed2(-1.125), "-1.13");
    }

    #[test]
    fn near_ties_follow_the_stored_value() {
        // 1.005 is stored slightly below the halfway point.
        assert_eq!(format_fixed2(1.005), "1.00");
        assert_eq!(format_fixed2(2.675), "2.67");
        assert_eq!(format_fixed2(7.25), "7.25");
        assert_eq!(format_fixed2(0.999), "1.00");
    }

    #[test]
    fn range_label_rounds_ties_up() {
        let stats = StatisticsResult::compute(&[0.0, 0.125]).unwrap();
        assert_eq!(stats.range_label(), "0.13");
    }

    #[test]
    fn negative_zero_prints_unsigned() {
        let stats = StatisticsResult::compute(&[-0.0]).unwrap();
        assert_eq!(stats.mean_label(), "0.00");
        assert_eq!(stats.range_label(), "0.00");
        assert_eq!(stats.median_label(), "0");
        assert_eq!(format_fixed2(-0.0), "0.00");
    }

    #[test]
    fn huge_values_use_exponent_form() {
        assert_eq!(format_value(1e21), "1e+21");
        assert_eq!(format_value(-2.5e22), "-2.5e+22");
        assert_eq!(format_value(1e20), "100000000000000000000");
    }

    #[test]
    fn format_value_drops_trailing_zero() {
        assert_eq!(format_value(12.0), "12");
        assert_eq!(format_value(-0.0), "0");
        assert_eq!(format_value(2.25), "2.25");
    }
}
