//! Equivalence rules deciding pass/fail
//!
//! The expected value always arrives as a string from the cases file; the
//! actual value keeps its database type. The rules below run in a fixed
//! precedence order and the first match wins.

use fc_core::value::ActualValue;
use fc_core::EXISTS_SENTINEL;

/// Pass/fail decision for one comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Pass,
    Fail,
}

/// Result of evaluating one (actual, expected) pair.
///
/// `expected` is the normalized expected value: when evaluation reached the
/// quoted-numeric rule, exactly one leading apostrophe has been stripped.
/// Callers persist it instead of the engine mutating the case in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub verdict: Verdict,
    pub expected: String,
}

impl Evaluation {
    pub fn passed(&self) -> bool {
        self.verdict == Verdict::Pass
    }

    fn decided(passed: bool, expected: &str) -> Self {
        Self {
            verdict: if passed { Verdict::Pass } else { Verdict::Fail },
            expected: expected.to_string(),
        }
    }
}

/// Interchangeable tokens, looked up by the string form of the actual
/// value. Normalizes boolean/yes-no representations across the import.
fn lookup_equivalent(s: &str) -> Option<&'static str> {
    match s {
        "" => Some(""),
        "None" => Some(""),
        "0" => Some("No"),
        "1" => Some("Yes"),
        "Yes" => Some("1"),
        "No" => Some("0"),
        "N" => Some("0"),
        "Y" => Some("1"),
        _ => None,
    }
}

/// Decide pass/fail for an (actual, expected) pair.
///
/// Rule order, first match wins:
/// 1. exact string match
/// 2. `### EXISTS ###` shorthand (anything but a missing row passes)
/// 3. canonical equivalence lookup on the string form
/// 4. date/time values compare in `YYYY-MM-DD HH:MM:SS` form
/// 5. trailing `...` prefix shorthand
/// 6. leading `'` stripped from expected (sheet-escaped numerics)
/// 7. numeric coercion when the actual is numeric
/// 8. string fallback on the normalized comparison value
pub fn evaluate(actual: &ActualValue, expected: &str) -> Evaluation {
    // string_form already renders dates/timestamps in canonical form
    let raw = actual.string_form();

    if raw == expected {
        return Evaluation::decided(true, expected);
    }

    if expected == EXISTS_SENTINEL {
        return Evaluation::decided(!actual.is_missing(), expected);
    }

    // Whitespace-only actuals collapse to empty before the lookup
    let normalized = if raw.trim().is_empty() {
        String::new()
    } else {
        raw
    };
    let compared = match lookup_equivalent(&normalized) {
        Some(token) => token.to_string(),
        None => normalized,
    };

    if let Some(prefix) = expected.strip_suffix("...") {
        return Evaluation::decided(compared.starts_with(prefix), expected);
    }

    // A leading apostrophe forces a sheet cell to text; strip exactly one
    let stripped = expected.strip_prefix('\'').unwrap_or(expected);

    if let Some(number) = actual.numeric_value() {
        if let Ok(wanted) = stripped.parse::<f64>() {
            return Evaluation::decided(wanted == number, stripped);
        }
    }

    Evaluation::decided(compared == stripped, stripped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fc_core::DOES_NOT_EXIST_SENTINEL;

    fn text(s: &str) -> ActualValue {
        ActualValue::Text(s.to_string())
    }

    fn assert_pass(actual: &ActualValue, expected: &str) {
        assert!(
            evaluate(actual, expected).passed(),
            "expected Pass: {:?} vs {:?}",
            actual,
            expected
        );
    }

    fn assert_fail(actual: &ActualValue, expected: &str) {
        assert!(
            !evaluate(actual, expected).passed(),
            "expected Fail: {:?} vs {:?}",
            actual,
            expected
        );
    }

    #[test]
    fn test_exact_match_dominates() {
        assert_pass(&text("Yes"), "Yes");
        assert_pass(&ActualValue::Int(3), "3");
        // even the sentinel matches itself verbatim
        assert_pass(&ActualValue::Missing, DOES_NOT_EXIST_SENTINEL);
    }

    #[test]
    fn test_exists_shorthand() {
        assert_pass(&text("anything"), EXISTS_SENTINEL);
        assert_pass(&text(""), EXISTS_SENTINEL);
        assert_pass(&ActualValue::Null, EXISTS_SENTINEL);
        assert_fail(&ActualValue::Missing, EXISTS_SENTINEL);
    }

    #[test]
    fn test_lookup_table_symmetry() {
        assert_pass(&ActualValue::Int(1), "Yes");
        assert_pass(&text("1"), "Yes");
        assert_pass(&ActualValue::Int(0), "No");
        assert_pass(&text("Y"), "1");
        assert_pass(&text("N"), "0");
        assert_pass(&text("Yes"), "1");
        assert_pass(&text("No"), "0");
    }

    #[test]
    fn test_bool_actual_round_trips() {
        assert_pass(&ActualValue::Bool(true), "Yes");
        assert_pass(&ActualValue::Bool(false), "No");
        assert_pass(&ActualValue::Bool(true), "1");
    }

    #[test]
    fn test_null_normalizes_to_empty() {
        assert_pass(&ActualValue::Null, "");
        assert_pass(&text("None"), "");
    }

    #[test]
    fn test_whitespace_only_normalizes_to_empty() {
        assert_pass(&text("   "), "");
    }

    #[test]
    fn test_prefix_shorthand() {
        assert_pass(&text("Hello World"), "Hello...");
        assert_fail(&text("Hi"), "Hello...");
    }

    #[test]
    fn test_quoted_numeric_unwrap() {
        let evaluation = evaluate(&ActualValue::Int(42), "'42");
        assert!(evaluation.passed());
        assert_eq!(evaluation.expected, "42");
    }

    #[test]
    fn test_numeric_coercion() {
        assert_pass(&ActualValue::Float(3.0), "3");
        assert_pass(&ActualValue::Int(3), "3.0");
        assert_fail(&ActualValue::Float(3.0), "three");
        assert_fail(&ActualValue::Int(3), "4");
    }

    #[test]
    fn test_non_numeric_actual_skips_coercion() {
        // "03" does not string-match "3" and text never coerces
        assert_fail(&text("03"), "3");
    }

    #[test]
    fn test_datetime_normalized_form() {
        let dt = NaiveDate::from_ymd_opt(2023, 9, 14)
            .unwrap()
            .and_hms_opt(8, 30, 5)
            .unwrap();
        assert_pass(&ActualValue::DateTime(dt), "2023-09-14 08:30:05");
        assert_pass(&ActualValue::DateTime(dt), "2023-09-14...");
    }

    #[test]
    fn test_expected_untouched_when_decided_early() {
        let evaluation = evaluate(&text("'42"), "'42");
        assert!(evaluation.passed());
        assert_eq!(evaluation.expected, "'42");
    }

    #[test]
    fn test_idempotent() {
        let actual = ActualValue::Int(42);
        let first = evaluate(&actual, "'42");
        let second = evaluate(&actual, &first.expected);
        assert_eq!(first.verdict, second.verdict);
        assert_eq!(second.expected, "42");
    }

    #[test]
    fn test_string_fallback() {
        assert_pass(&text("Cambridge"), "Cambridge");
        assert_fail(&text("Cambridge"), "Oxford");
    }
}
