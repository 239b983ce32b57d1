use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Equals,
    DoesNotEqual,
    GreaterThan,
    LessThan,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::Equals,
        Condition::DoesNotEqual,
        Condition::GreaterThan,
        Condition::LessThan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Equals => "equals",
            Condition::DoesNotEqual => "does_not_equal",
            Condition::GreaterThan => "greater_than",
            Condition::LessThan => "less_than",
        }
    }

    /// Exact, case-sensitive match on the operator name.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ClauseValue {
    Number(f64),
    Text(String),
}

/// One `{ id, condition, value }` rule from the `filters` query parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterClause {
    pub id: String,
    pub condition: Condition,
    pub value: ClauseValue,
}

impl FilterClause {
    /// Build a clause from one JSON entry. Returns `None` unless the entry is
    /// an object with a non-empty string `id`, a known `condition` and a
    /// non-empty string or non-zero numeric `value`.
    pub fn from_json(entry: &Value) -> Option<Self> {
        let obj = entry.as_object()?;

        let id = obj
            .get("id")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())?;

        let condition = obj
            .get("condition")
            .and_then(|v| v.as_str())
            .and_then(Condition::parse)?;

        let value = match obj.get("value")? {
            Value::String(s) if !s.is_empty() => ClauseValue::Text(s.clone()),
            Value::Number(n) => {
                let n = n.as_f64()?;
                if n == 0.0 {
                    return None;
                }
                ClauseValue::Number(n)
            }
            _ => return None,
        };

        Some(FilterClause {
            id: id.to_string(),
            condition,
            value,
        })
    }
}

/// Parse the raw `filters` string into well-formed clauses.
///
/// A missing, empty or malformed string, or a JSON document that is not an
/// array, yields no clauses. Malformed entries inside the array are dropped
/// one by one.
pub fn parse_filters(raw: Option<&str>) -> Vec<FilterClause> {
    let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
        return Vec::new();
    };

    let doc: Value = match serde_json::from_str(raw) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::debug!("Ignoring unparseable filters: {e}");
            return Vec::new();
        }
    };

    let Some(entries) = doc.as_array() else {
        tracing::debug!("Ignoring filters that are not a JSON array");
        return Vec::new();
    };

    let clauses: Vec<FilterClause> = entries.iter().filter_map(FilterClause::from_json).collect();
    if clauses.len() < entries.len() {
        tracing::debug!(
            "Dropped {} malformed filter clause(s)",
            entries.len() - clauses.len()
        );
    }
    clauses
}
