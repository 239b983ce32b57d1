use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: u32 = 150;
pub const MAX_LIMIT: u32 = 150;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormStatus {
    InProgress,
    Finished,
}

impl FormStatus {
    pub const ALL: [FormStatus; 2] = [FormStatus::Finished, FormStatus::InProgress];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormStatus::InProgress => "in_progress",
            FormStatus::Finished => "finished",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormSort {
    Asc,
    Desc,
}

impl FormSort {
    pub const ALL: [FormSort; 2] = [FormSort::Asc, FormSort::Desc];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormSort::Asc => "asc",
            FormSort::Desc => "desc",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sort| sort.as_str() == s)
    }
}

/// Query parameters forwarded to `GET /v1/api/forms/{formId}/submissions`.
/// Unset fields are left off the query string so the API applies its defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_edit_link: Option<bool>,
    pub limit: u32,
    pub offset: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<FormSort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<FormStatus>,
}

impl Default for SubmissionsRequest {
    fn default() -> Self {
        Self {
            after_date: None,
            before_date: None,
            include_edit_link: None,
            limit: DEFAULT_LIMIT,
            offset: 0,
            sort: None,
            status: None,
        }
    }
}
