use serde::Serialize;

/// How a chart value is written out.
///
/// One formatter feeds the axis ticks, the tooltip, the value-label overlay
/// and the mirrored text labels, so all four always agree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueFormat {
    /// Whole percent, `89%`
    Percent,
    /// Fixed number of decimals, `0.92`
    Fixed { decimals: u8 },
    /// Percent for a `%` suffix, one decimal for small fractional values,
    /// otherwise the plain number followed by the suffix
    Auto { suffix: &'static str },
}

impl ValueFormat {
    pub fn apply(&self, value: f64) -> String {
        match *self {
            ValueFormat::Percent => format!("{}%", round_half_up(value)),
            ValueFormat::Fixed { decimals } => {
                format!("{:.*}", usize::from(decimals), round_half_away(value, decimals))
            }
            ValueFormat::Auto { suffix } => {
                if suffix == "%" {
                    ValueFormat::Percent.apply(value)
                } else if value < 10.0 && value != value.round() {
                    format!("{value:.1}")
                } else {
                    format!("{value}{suffix}")
                }
            }
        }
    }
}

impl Default for ValueFormat {
    fn default() -> Self {
        ValueFormat::Auto { suffix: "" }
    }
}

/// Rounds halves toward positive infinity, the way chart labels expect
fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// Rounds to `decimals` places with ties away from zero; `{:.N}` alone
/// rounds ties to even
fn round_half_away(value: f64, decimals: u8) -> f64 {
    let scale = 10f64.powi(i32::from(decimals));
    let rounded = (value.abs() * scale + 0.5).floor() / scale;
    if value < 0.0 {
        -rounded
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent() {
        assert_eq!(ValueFormat::Percent.apply(89.0), "89%");
        assert_eq!(ValueFormat::Percent.apply(61.5), "62%");
        assert_eq!(ValueFormat::Percent.apply(0.0), "0%");
    }

    #[test]
    fn test_fixed() {
        assert_eq!(ValueFormat::Fixed { decimals: 2 }.apply(0.92), "0.92");
        assert_eq!(ValueFormat::Fixed { decimals: 2 }.apply(1.0), "1.00");
        assert_eq!(ValueFormat::Fixed { decimals: 1 }.apply(4.7), "4.7");
        assert_eq!(ValueFormat::Fixed { decimals: 1 }.apply(5.0), "5.0");
    }

    #[test]
    fn test_fixed_ties_round_up() {
        assert_eq!(ValueFormat::Fixed { decimals: 1 }.apply(0.25), "0.3");
        assert_eq!(ValueFormat::Fixed { decimals: 0 }.apply(2.5), "3");
        assert_eq!(ValueFormat::Fixed { decimals: 0 }.apply(-2.5), "-3");
        assert_eq!(ValueFormat::Fixed { decimals: 2 }.apply(0.125), "0.13");
    }

    #[test]
    fn test_auto() {
        assert_eq!(ValueFormat::Auto { suffix: "%" }.apply(88.6), "89%");
        assert_eq!(ValueFormat::Auto { suffix: "" }.apply(3.14), "3.1");
        assert_eq!(ValueFormat::Auto { suffix: " pts" }.apply(12.0), "12 pts");
        assert_eq!(ValueFormat::Auto { suffix: "" }.apply(4.0), "4");
        assert_eq!(ValueFormat::Auto { suffix: "x" }.apply(12.5), "12.5x");
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ValueFormat::Fixed { decimals: 1 }).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "fixed", "decimals": 1 }));
    }
}
