use std::cmp::Ordering;

use crate::models::AnswerValue;

use super::filters::{Condition, FilterClause};
use super::normalize::{epoch_millis, normalize_answer, normalize_clause_value, Normalized};

/// Does a question's answer satisfy `clause`?
///
/// Equality is strict: both sides must normalize to the same kind and value.
/// Ordering compares two strings by UTF-16 code units; any other pairing is
/// compared numerically after coercing each side to a number (absent is 0,
/// strings are parsed, unparseable strings never order).
pub fn evaluate(answer: Option<&AnswerValue>, clause: &FilterClause) -> bool {
    let left = normalize_answer(answer).into_comparable();
    let right = normalize_clause_value(&clause.value).into_comparable();

    match clause.condition {
        Condition::Equals => strict_eq(&left, &right),
        Condition::DoesNotEqual => !strict_eq(&left, &right),
        Condition::GreaterThan => compare(&left, &right) == Some(Ordering::Greater),
        Condition::LessThan => compare(&left, &right) == Some(Ordering::Less),
    }
}

fn strict_eq(left: &Normalized, right: &Normalized) -> bool {
    match (left, right) {
        (Normalized::Absent, Normalized::Absent) => true,
        (Normalized::Number(a), Normalized::Number(b)) => a == b,
        (Normalized::Text(a), Normalized::Text(b)) => a == b,
        (Normalized::Date(a), Normalized::Date(b)) => a == b,
        _ => false,
    }
}

fn compare(left: &Normalized, right: &Normalized) -> Option<Ordering> {
    if let (Normalized::Text(a), Normalized::Text(b)) = (left, right) {
        return Some(a.encode_utf16().cmp(b.encode_utf16()));
    }

    let a = to_number(left)?;
    let b = to_number(right)?;
    a.partial_cmp(&b)
}

fn to_number(value: &Normalized) -> Option<f64> {
    match value {
        Normalized::Absent => Some(0.0),
        Normalized::Number(n) => Some(*n),
        Normalized::Date(d) => Some(epoch_millis(*d) as f64),
        Normalized::Text(s) => parse_number(s),
        Normalized::Unsupported => None,
    }
}

/// Numeric reading of a string operand: surrounding whitespace is ignored,
/// an empty string reads as 0, and `0x`/`0o`/`0b` prefixes are honoured.
pub fn parse_number(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return u64::from_str_radix(digits, radix).ok().map(|n| n as f64);
        }
    }

    // f64::from_str also accepts "inf" and "NaN", which are not numbers here.
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return None;
    }

    s.parse::<f64>().ok().filter(|n| !n.is_nan())
}
