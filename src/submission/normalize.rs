use chrono::NaiveDate;

use crate::models::AnswerValue;

use super::filters::ClauseValue;

/// A raw answer or clause value turned into something comparable.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    Absent,
    Number(f64),
    Date(NaiveDate),
    Text(String),
    /// JSON shapes filters cannot compare (arrays, objects, booleans).
    Unsupported,
}

impl Normalized {
    /// Dates collapse to epoch milliseconds at UTC midnight so they compare
    /// numerically against each other and against plain numbers.
    pub fn into_comparable(self) -> Normalized {
        match self {
            Normalized::Date(date) => Normalized::Number(epoch_millis(date) as f64),
            other => other,
        }
    }
}

pub fn normalize_answer(value: Option<&AnswerValue>) -> Normalized {
    match value {
        None => Normalized::Absent,
        Some(AnswerValue::Number(n)) => n.as_f64().map_or(Normalized::Unsupported, Normalized::Number),
        Some(AnswerValue::Text(s)) => normalize_text(s),
        Some(AnswerValue::Other(serde_json::Value::Null)) => Normalized::Absent,
        Some(AnswerValue::Other(_)) => Normalized::Unsupported,
    }
}

pub fn normalize_clause_value(value: &ClauseValue) -> Normalized {
    match value {
        ClauseValue::Number(n) => Normalized::Number(*n),
        ClauseValue::Text(s) => normalize_text(s),
    }
}

/// Strings matching `yyyy-MM-dd` that name a real calendar day become dates;
/// every other string is kept as is.
pub fn normalize_text(s: &str) -> Normalized {
    parse_calendar_date(s).map_or_else(|| Normalized::Text(s.to_string()), Normalized::Date)
}

pub fn parse_calendar_date(s: &str) -> Option<NaiveDate> {
    let b = s.as_bytes();
    let shape_ok = b.len() == 10
        && b[4] == b'-'
        && b[7] == b'-'
        && b.iter()
            .enumerate()
            .all(|(i, c)| i == 4 || i == 7 || c.is_ascii_digit());
    if !shape_ok {
        return None;
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn epoch_millis(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or_default()
}
