//! Locale-independent value parsing for the configuration protocol.
//!
//! Values cross the wire as strings and are parsed only on the
//! authoritative node. Parsing must behave identically regardless of the
//! sender's locale: Rust's `str::parse` already guarantees that, and the
//! helpers here add trimming, a finiteness filter, and the tolerant
//! word-boolean grammar the chat surface accepts.

/// Parses a decimal value from user input.
///
/// Accepts anything `f64` accepts after trimming, but rejects NaN and
/// infinities so a range check downstream can never be skipped by a
/// non-finite value.
pub fn parse_decimal(value: &str) -> Option<f64> {
    let parsed: f64 = value.trim().parse().ok()?;
    parsed.is_finite().then_some(parsed)
}

/// Parses a boolean from the tolerant word grammar.
///
/// Accepts, case-insensitively: `true`/`false`, `on`/`off`, `yes`/`no`,
/// `1`/`0`. Anything else is `None`.
pub fn parse_word_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Some(true),
        "false" | "off" | "no" | "0" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_accepts_plain_numbers() {
        assert_eq!(parse_decimal("850"), Some(850.0));
        assert_eq!(parse_decimal(" 0.1 "), Some(0.1));
        assert_eq!(parse_decimal("-3.5"), Some(-3.5));
    }

    #[test]
    fn decimal_rejects_garbage_and_non_finite() {
        assert_eq!(parse_decimal("fast"), None);
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_decimal("inf"), None);
        assert_eq!(parse_decimal("1,000"), None);
    }

    #[test]
    fn word_bool_grammar_true_forms() {
        for input in ["true", "True", "on", "YES", "1"] {
            assert_eq!(parse_word_bool(input), Some(true), "input '{input}'");
        }
    }

    #[test]
    fn word_bool_grammar_false_forms() {
        for input in ["false", "off", "no", "0", "OFF"] {
            assert_eq!(parse_word_bool(input), Some(false), "input '{input}'");
        }
    }

    #[test]
    fn word_bool_rejects_everything_else() {
        assert_eq!(parse_word_bool("maybe"), None);
        assert_eq!(parse_word_bool(""), None);
        assert_eq!(parse_word_bool("2"), None);
    }
}
