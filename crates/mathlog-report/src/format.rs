//! Display strings for report cells
//!
//! Precision is part of the report: rates use 1 decimal, test statistics 4.
//! Undefined values are written out instead of printing `NaN`.

/// Text used for NaN cells
pub const UNDEFINED: &str = "undefined";

/// Fixed-point with `decimals` places; NaN → `undefined`, ±∞ → `inf`/`-inf`
pub fn fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        UNDEFINED.to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "inf" } else { "-inf" }.to_string()
    } else {
        format!("{:.*}", decimals, value)
    }
}

/// Test statistic or group statistic: 4 decimals
pub fn stat(value: f64) -> String {
    fixed(value, 4)
}

/// Percentage with 1 decimal and a `%` sign
pub fn percent(value: f64) -> String {
    if value.is_finite() {
        format!("{:.1}%", value)
    } else {
        fixed(value, 1)
    }
}

/// Percentage points with 1 decimal
pub fn points(value: f64) -> String {
    fixed(value, 1)
}

/// A measured value such as seconds; whole numbers keep one decimal
pub fn measure(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else if value.is_finite() {
        value.to_string()
    } else {
        fixed(value, 1)
    }
}

/// An optional extreme value, `undefined` when the table was empty
pub fn optional(value: Option<f64>) -> String {
    value.map_or_else(|| UNDEFINED.to_string(), measure)
}

/// Boolean as the dataset spells it
pub fn flag(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.5, 4, "0.5000")]
    #[case(-1.23456, 4, "-1.2346")]
    #[case(f64::NAN, 4, "undefined")]
    #[case(f64::INFINITY, 4, "inf")]
    #[case(f64::NEG_INFINITY, 1, "-inf")]
    fn test_fixed(#[case] value: f64, #[case] decimals: usize, #[case] expected: &str) {
        assert_eq!(fixed(value, decimals), expected);
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(66.666), "66.7%");
        assert_eq!(percent(f64::NAN), UNDEFINED);
        assert_eq!(points(100.0), "100.0");
    }

    #[test]
    fn test_measure() {
        assert_eq!(measure(3.0), "3.0");
        assert_eq!(measure(12.25), "12.25");
        assert_eq!(optional(None), UNDEFINED);
        assert_eq!(optional(Some(5.0)), "5.0");
    }
}
