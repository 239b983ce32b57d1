use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A question's answer as sent by the forms API.
///
/// Strings and numbers are the shapes the filters understand. Anything else
/// (choice arrays, booleans, objects) is kept as raw JSON so it round-trips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Number(serde_json::Number),
    Text(String),
    Other(Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    /// `None` only when the key is missing; an explicit `null` is kept as
    /// `Some(AnswerValue::Other(Value::Null))` so it serializes back as sent.
    #[serde(
        default,
        deserialize_with = "present_value",
        skip_serializing_if = "Option::is_none"
    )]
    pub value: Option<AnswerValue>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub submission_id: String,
    pub submission_time: String,
    pub last_updated_at: String,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub calculations: Vec<Value>,
    #[serde(default)]
    pub url_parameters: Vec<Value>,
    #[serde(default)]
    pub quiz: Map<String, Value>,
    #[serde(default)]
    pub documents: Vec<Value>,
    /// Fields the forms API adds on request, such as `editLink`.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn present_value<'de, D>(deserializer: D) -> Result<Option<AnswerValue>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    AnswerValue::deserialize(deserializer).map(Some)
}

impl Submission {
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

/// One page of submissions as returned by the forms API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPage {
    pub responses: Vec<Submission>,
    pub total_responses: i64,
    pub page_count: i64,
    /// Any other page-level field the forms API sends.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
