use crate::data::parser;

/// Direction of a single-element adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustDirection {
    Up,
    Down,
}

impl AdjustDirection {
    pub fn delta(&self) -> f64 {
        match self {
            AdjustDirection::Up => 1.0,
            AdjustDirection::Down => -1.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdjustDirection::Up => "\u{2191}",
            AdjustDirection::Down => "\u{2193}",
        }
    }
}

/// The numbers under analysis.
///
/// Sorted ascending right after [`Dataset::replace_from_text`]. Adjustments
/// change values in place without re-sorting, so the order can drift.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    values: Vec<f64>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Replace everything with the numbers parsed from `text`.
    /// Returns how many tokens were dropped.
    pub fn replace_from_text(&mut self, text: &str) -> usize {
        let parsed = parser::parse_numbers(text);
        self.values = parsed.values;
        parsed.dropped
    }

    /// Add the direction's delta to the element at `index`.
    pub fn adjust(&mut self, index: usize, direction: AdjustDirection) -> Result<f64, String> {
        let len = self.values.len();
        let value = self
            .values
            .get_mut(index)
            .ok_or_else(|| format!("No data value at index {index} (dataset has {len})"))?;
        *value += direction.delta();
        Ok(*value)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Smallest and largest value, or `None` when empty.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        if self.values.is_empty() {
            return None;
        }
        let min = self.values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_parses_and_sorts() {
        let mut ds = Dataset::new();
        let dropped = ds.replace_from_text("12, 5, x, 3, 8");
        assert_eq!(ds.values(), &[3.0, 5.0, 8.0, 12.0]);
        assert_eq!(dropped, 1);
    }

    #[test]
    fn replace_discards_previous_values() {
        let mut ds = Dataset::new();
        ds.replace_from_text("1, 2, 3");
        ds.replace_from_text("9");
        assert_eq!(ds.values(), &[9.0]);
    }

    #[test]
    fn adjust_changes_one_element_in_place() {
        let mut ds = Dataset::new();
        ds.replace_from_text("3, 5, 8, 12");
        assert_eq!(ds.adjust(0, AdjustDirection::Up), Ok(4.0));
        assert_eq!(ds.values(), &[4.0, 5.0, 8.0, 12.0]);
    }

    #[test]
    fn adjust_does_not_resort() {
        let mut ds = Dataset::new();
        ds.replace_from_text("3, 4");
        ds.adjust(0, AdjustDirection::Up).unwrap();
        ds.adjust(0, AdjustDirection::Up).unwrap();
        assert_eq!(ds.values(), &[5.0, 4.0]);
    }

    #[test]
    fn adjust_can_go_negative() {
        let mut ds = Dataset::new();
        ds.replace_from_text("0");
        ds.adjust(0, AdjustDirection::Down).unwrap();
        assert_eq!(ds.values(), &[-1.0]);
    }

    #[test]
    fn adjust_out_of_range_is_rejected() {
        let mut ds = Dataset::new();
        ds.replace_from_text("1, 2");
        assert!(ds.adjust(2, AdjustDirection::Up).is_err());
        assert_eq!(ds.values(), &[1.0, 2.0]);
    }

    #[test]
    fn bounds() {
        let mut ds = Dataset::new();
        assert_eq!(ds.bounds(), None);
        ds.replace_from_text("4, -2, 7");
        assert_eq!(ds.bounds(), Some((-2.0, 7.0)));
    }

    #[test]
    fn clear_empties() {
        let mut ds = Dataset::new();
        ds.replace_from_text("1, 2");
        ds.clear();
        assert!(ds.is_empty());
    }
}
