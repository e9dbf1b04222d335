/// Result of parsing a comma-separated list of numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedInput {
    /// Finite values, sorted ascending.
    pub values: Vec<f64>,
    /// Number of non-empty tokens that were discarded.
    pub dropped: usize,
}

/// Longest prefix of `s` that reads as a decimal float: optional sign,
/// digits with an optional fraction, then an optional exponent.
/// Returns an empty string when `s` does not start with a number.
fn leading_number(s: &str) -> &str {
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut mantissa_end = int_end;
    let mut has_digits = int_end > end;

    if bytes.get(int_end) == Some(&b'.') {
        let frac_end = digits_from(int_end + 1);
        if has_digits || frac_end > int_end + 1 {
            mantissa_end = frac_end;
            has_digits = true;
        }
    }
    if !has_digits {
        return "";
    }
    end = mantissa_end;

    // An exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    &s[..end]
}

/// Parse one token the way the input field accepts numbers.
///
/// Leading numeric text is kept and anything after it ignored, so `"12px"`
/// reads as 12 and `"7 8"` as 7. Returns `None` when the token does not
/// start with a number or the number is not finite.
pub fn parse_token(token: &str) -> Option<f64> {
    let number = leading_number(token.trim());
    if number.is_empty() {
        return None;
    }
    match number.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

/// Split `text` on commas and keep every token that parses to a finite number.
///
/// Invalid tokens are dropped silently instead of failing the whole input, so
/// `"5, abc, 8"` yields `[5, 8]` and an input with no valid tokens yields an
/// empty list. The values come back sorted ascending.
pub fn parse_numbers(text: &str) -> ParsedInput {
    let mut values = Vec::new();
    let mut dropped = 0usize;

    for token in text.split(',') {
        match parse_token(token) {
            Some(v) => values.push(v),
            None => {
                if !token.trim().is_empty() {
                    dropped += 1;
                }
            }
        }
    }

    values.sort_by(|a, b| a.total_cmp(b));

    if dropped > 0 {
        tracing::debug!("Dropped {dropped} invalid token(s) from input");
    }

    ParsedInput { values, dropped }
}
