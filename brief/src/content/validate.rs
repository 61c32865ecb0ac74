//! Invariant checks over the content tables.

use super::{analysis, outcomes, ANALYSIS, BENEFIT_CHARTS, OUTCOMES, STAFFING, TIMELINE, VOICES};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::fmt;

/// Ratio text such as `1 : 4` or `1 : 4 (acuity-adjusted)`
static RATIO_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^1 : \d+(?: \([a-z-]+\))?$").expect("valid ratio regex"));

/// A content invariant that does not hold
#[derive(Debug, Clone, PartialEq)]
pub struct ContentIssue {
    pub table: &'static str,
    pub key: String,
    pub message: String,
}

impl ContentIssue {
    fn new<K: Into<String>, M: Into<String>>(table: &'static str, key: K, message: M) -> Self {
        Self {
            table,
            key: key.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ContentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.table, self.key, self.message)
    }
}

/// Check every shipped table. An empty result means the content is consistent.
pub fn validate() -> Vec<ContentIssue> {
    let mut issues = Vec::new();

    issues.extend(duplicate_keys("timeline", TIMELINE.iter().map(|e| e.key)));
    issues.extend(duplicate_keys("analysis", ANALYSIS.iter().map(|d| d.label)));
    issues.extend(duplicate_keys("outcomes", OUTCOMES.iter().map(|m| m.key)));
    issues.extend(duplicate_keys("staffing", STAFFING.iter().map(|u| u.key)));
    issues.extend(duplicate_keys("benefits", BENEFIT_CHARTS.iter().map(|c| c.key)));
    issues.extend(duplicate_keys(
        "benefits",
        BENEFIT_CHARTS.iter().map(|c| c.canvas_id),
    ));

    for entry in TIMELINE {
        if entry.title.is_empty() || entry.body.is_empty() {
            issues.push(ContentIssue::new("timeline", entry.key, "title and body are required"));
        }
    }

    for detail in ANALYSIS {
        if !(0.0..=10.0).contains(&detail.impact) {
            issues.push(ContentIssue::new(
                "analysis",
                detail.label,
                format!("impact {} is outside 0-10", detail.impact),
            ));
        }
    }
    if analysis::find(analysis::DEFAULT_ANALYSIS).is_none() {
        issues.push(ContentIssue::new(
            "analysis",
            analysis::DEFAULT_ANALYSIS,
            "default category does not resolve",
        ));
    }

    for metric in OUTCOMES {
        for (side, bar) in [("union_bar", metric.union_bar), ("non_union_bar", metric.non_union_bar)] {
            if bar > 100 {
                issues.push(ContentIssue::new(
                    "outcomes",
                    metric.key,
                    format!("{side} {bar} exceeds 100"),
                ));
            }
        }
    }
    if outcomes::find(outcomes::DEFAULT_OUTCOME).is_none() {
        issues.push(ContentIssue::new(
            "outcomes",
            outcomes::DEFAULT_OUTCOME,
            "default tab does not resolve",
        ));
    }

    if VOICES.is_empty() {
        issues.push(ContentIssue::new("voices", "-", "carousel needs at least one entry"));
    }

    for unit in STAFFING {
        if unit.gap_percent > 100 {
            issues.push(ContentIssue::new(
                "staffing",
                unit.key,
                format!("gap_percent {} exceeds 100", unit.gap_percent),
            ));
        }
        for (field, ratio) in [("recommended", unit.recommended), ("current", unit.current)] {
            if !RATIO_PATTERN.is_match(ratio) {
                issues.push(ContentIssue::new(
                    "staffing",
                    unit.key,
                    format!("{field} ratio '{ratio}' is not of the form '1 : N'"),
                ));
            }
        }
    }

    for chart in BENEFIT_CHARTS {
        if chart.tick_step <= 0.0 {
            issues.push(ContentIssue::new("benefits", chart.key, "tick_step must be positive"));
        }
        for value in chart.values {
            if !value.is_finite() || value < 0.0 {
                issues.push(ContentIssue::new(
                    "benefits",
                    chart.key,
                    format!("value {value} must be a non-negative number"),
                ));
            } else if value > chart.suggested_max {
                issues.push(ContentIssue::new(
                    "benefits",
                    chart.key,
                    format!("value {value} exceeds suggested_max {}", chart.suggested_max),
                ));
            }
        }
    }

    issues
}

/// Report every trigger key that has no record behind it
pub fn check_trigger_keys<'a, I, F>(table: &'static str, keys: I, resolves: F) -> Vec<ContentIssue>
where
    I: IntoIterator<Item = &'a str>,
    F: Fn(&str) -> bool,
{
    keys.into_iter()
        .filter(|key| !resolves(key))
        .map(|key| ContentIssue::new(table, key, "trigger key has no matching record"))
        .collect()
}

fn duplicate_keys<'a>(
    table: &'static str,
    keys: impl Iterator<Item = &'a str>,
) -> Vec<ContentIssue> {
    let mut seen = HashSet::new();
    keys.filter(|key| !seen.insert(*key))
        .map(|key| ContentIssue::new(table, key, "duplicate key"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipped_content_is_consistent() {
        let issues = validate();
        assert!(issues.is_empty(), "unexpected issues: {issues:?}");
    }

    #[test]
    fn test_ratio_pattern() {
        assert!(RATIO_PATTERN.is_match("1 : 4"));
        assert!(RATIO_PATTERN.is_match("1 : 4 (acuity-adjusted)"));
        assert!(!RATIO_PATTERN.is_match("1:4"));
        assert!(!RATIO_PATTERN.is_match("one to four"));
    }

    #[test]
    fn test_duplicate_keys_reported_once_per_repeat() {
        let issues = duplicate_keys("t", ["a", "b", "a", "a"].into_iter());
        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].to_string(), "t[a]: duplicate key");
    }

    #[test]
    fn test_check_trigger_keys() {
        let issues = check_trigger_keys("timeline", ["1989", "1975"], |key| {
            super::super::timeline::find(key).is_some()
        });
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].key, "1975");
    }
}
