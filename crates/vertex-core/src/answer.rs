//! Answer parsing and feedback

/// Outcome shown to the user after the last submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerFeedback {
    /// Nothing submitted since the last reset
    #[default]
    Neutral,
    Correct,
    Wrong,
}

impl AnswerFeedback {
    pub fn from_flags(is_correct: bool, has_error: bool) -> Self {
        match (is_correct, has_error) {
            (true, _) => AnswerFeedback::Correct,
            (false, true) => AnswerFeedback::Wrong,
            (false, false) => AnswerFeedback::Neutral,
        }
    }
}

/// Parse the integer at the start of `text`.
///
/// Leading whitespace and a single sign are accepted, then digits are
/// consumed up to the first character that is not one. A `0x`/`0X` prefix
/// switches to hexadecimal, so `"0x6"` reads as 6. Returns `None` when no
/// digit is found. Values beyond `i64` saturate.
pub fn parse_leading_integer(text: &str) -> Option<i64> {
    let rest = text.trim_start();
    let (negative, rest) = match rest.as_bytes().first() {
        Some(b'-') => (true, &rest[1..]),
        Some(b'+') => (false, &rest[1..]),
        _ => (false, rest),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for digit in rest.chars().map_while(|c| c.to_digit(radix)) {
        seen_digit = true;
        let d = i64::from(digit);
        value = value
            .saturating_mul(i64::from(radix))
            .saturating_add(if negative { -d } else { d });
    }

    seen_digit.then_some(value)
}

/// Check a raw answer against the expected vertex count
pub fn answer_matches(text: &str, expected: usize) -> bool {
    parse_leading_integer(text).is_some_and(|value| i64::try_from(expected) == Ok(value))
}
