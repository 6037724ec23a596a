//! Property-based tests for logfmt_logger using proptest

use logfmt_logger::core::logfmt::write_value_string;
use logfmt_logger::prelude::*;
use proptest::prelude::*;

fn render(value: &str) -> String {
    let mut out = String::new();
    write_value_string(&mut out, value);
    out
}

fn needs_quotes(value: &str) -> bool {
    value.chars().any(|c| c == '"' || c == '=' || c <= ' ')
}

/// Reverse the backslash escaping applied inside quotes
fn unescape(inner: &str) -> String {
    let mut out = String::new();
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn any_level() -> impl Strategy<Value = Level> {
    prop_oneof![
        Just(Level::Debug),
        Just(Level::Info),
        Just(Level::Warning),
        Just(Level::Error),
    ]
}

// ============================================================================
// Level Tests
// ============================================================================

proptest! {
    /// Canonical spellings decode back to the same level
    #[test]
    fn test_level_str_roundtrip(level in any_level()) {
        let parsed: Level = level.as_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Decoding ignores case, and `warning` is a synonym for `warn`
    #[test]
    fn test_level_case_insensitive(
        spelling in prop_oneof![
            Just("debug"), Just("info"), Just("warn"), Just("warning"), Just("error")
        ],
        mask in prop::collection::vec(any::<bool>(), 7),
    ) {
        let mixed: String = spelling
            .chars()
            .zip(mask.iter().cycle())
            .map(|(c, upper)| if *upper { c.to_ascii_uppercase() } else { c })
            .collect();

        let level: Level = mixed.parse().unwrap();
        let expected = if spelling == "warning" { "warn" } else { spelling };
        prop_assert_eq!(level.as_str(), expected);
    }

    /// Anything that is not a known spelling is rejected
    #[test]
    fn test_level_rejects_unknown(input in ".*") {
        let known = ["debug", "info", "warn", "warning", "error"];
        prop_assume!(!known.contains(&input.to_lowercase().as_str()));

        let result = input.parse::<Level>();
        let is_invalid_level = matches!(result, Err(LoggerError::InvalidLevel { .. }));
        prop_assert!(is_invalid_level);
    }

    /// Ordering follows the numeric discriminant
    #[test]
    fn test_level_ordering(a in any_level(), b in any_level()) {
        prop_assert_eq!(a <= b, (a as u8) <= (b as u8));
        prop_assert_eq!(a > b, (a as u8) > (b as u8));
    }
}

// ============================================================================
// String Quoting Tests
// ============================================================================

proptest! {
    /// Values without quote, equals or control/space characters are copied as is
    #[test]
    fn test_bare_values_unchanged(value in "[!#-<>-~]*") {
        prop_assert_eq!(render(&value), value);
    }

    /// Quoting is decided only by quote, equals and characters at or below space
    #[test]
    fn test_quoting_decision(value in any::<String>()) {
        let out = render(&value);
        if needs_quotes(&value) {
            prop_assert!(out.len() >= 2);
            prop_assert!(out.starts_with('"') && out.ends_with('"'));
        } else {
            prop_assert_eq!(out, value);
        }
    }

    /// Quoted values decode back to the original text
    #[test]
    fn test_quoted_values_lossless(value in any::<String>()) {
        prop_assume!(needs_quotes(&value));
        let out = render(&value);
        let inner = &out[1..out.len() - 1];

        if value.contains(['"', '=', '\\']) {
            prop_assert_eq!(unescape(inner), value);
        } else {
            prop_assert_eq!(inner, value.as_str());
        }
    }

    /// A rendered value never ends a quoted section early
    #[test]
    fn test_no_unescaped_inner_quotes(value in any::<String>()) {
        let out = render(&value);
        if out.starts_with('"') {
            let inner = &out[1..out.len() - 1];
            let mut escaped = false;
            for c in inner.chars() {
                if c == '"' {
                    prop_assert!(escaped, "bare quote in {:?}", out);
                }
                escaped = c == '\\' && !escaped;
            }
        }
    }
}

// ============================================================================
// Message Rendering Tests
// ============================================================================

proptest! {
    /// The encoder writes exactly one line per message
    #[test]
    fn test_single_line_per_message(text in "[a-z ]{1,20}", value in "[^\r\n]*") {
        let mut m = Message::new(Level::Info, text);
        m.apply([with_value("v", value)]);

        let mut buf = Vec::new();
        m.write_logfmt(&mut buf).unwrap();
        let line = String::from_utf8(buf).unwrap();
        prop_assert_eq!(line.lines().count(), 1);
    }

    /// Explicit parameters keep their attachment order
    #[test]
    fn test_parameter_order_preserved(values in prop::collection::vec(any::<i64>(), 1..8)) {
        let mut m = Message::new(Level::Warning, "ordered");
        m.apply(values.iter().enumerate().map(|(i, v)| with_value(format!("p{}", i), *v)));

        let expected: String = values
            .iter()
            .enumerate()
            .map(|(i, v)| format!(" p{}={}", i, v))
            .collect();
        prop_assert!(m.to_logfmt().ends_with(&expected));
    }

    /// The last code and status applied win
    #[test]
    fn test_last_code_wins(codes in prop::collection::vec("[A-Z]{1,6}", 1..5)) {
        let mut m = Message::new(Level::Error, "codes");
        m.apply(codes.iter().map(|c| with_code(c.clone())));
        prop_assert_eq!(m.code(), codes.last().map(String::as_str));
    }
}
