use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};

use crate::forms::{FormSort, FormStatus, SubmissionsRequest, MAX_LIMIT};

/// Validated query of `GET /{formId}/filteredResponses`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponsesParams {
    pub request: SubmissionsRequest,
    pub filters: Option<String>,
}

/// Check every known parameter and collect one message per failing field.
/// Unknown parameters are ignored.
pub fn validate(query: &HashMap<String, String>) -> Result<ResponsesParams, Vec<String>> {
    let mut errors = Vec::new();
    let mut request = SubmissionsRequest::default();

    if let Some(raw) = query.get("limit") {
        match raw.trim().parse::<u32>() {
            Ok(limit) if (1..=MAX_LIMIT).contains(&limit) => request.limit = limit,
            _ => errors.push(format!("limit must be an integer between 1 and {MAX_LIMIT}")),
        }
    }

    if let Some(raw) = query.get("offset") {
        match raw.trim().parse::<u64>() {
            Ok(offset) => request.offset = offset,
            Err(_) => errors.push("offset must be an integer".to_string()),
        }
    }

    for (name, slot) in [
        ("afterDate", &mut request.after_date),
        ("beforeDate", &mut request.before_date),
    ] {
        if let Some(raw) = query.get(name) {
            match parse_date_param(raw) {
                Some(date) => *slot = Some(date),
                None => errors.push(format!("{name} must be a valid ISO date string")),
            }
        }
    }

    if let Some(raw) = query.get("status") {
        match FormStatus::parse(raw) {
            Some(status) => request.status = Some(status),
            None => errors.push(format!(
                "status must be one of: {}",
                FormStatus::ALL.map(|s| s.as_str()).join(", ")
            )),
        }
    }

    if let Some(raw) = query.get("includeEditLink") {
        match raw.as_str() {
            "true" | "1" => request.include_edit_link = Some(true),
            "false" | "0" => request.include_edit_link = Some(false),
            _ => errors.push("includeEditLink must be a boolean".to_string()),
        }
    }

    if let Some(raw) = query.get("sort") {
        match FormSort::parse(raw) {
            Some(sort) => request.sort = Some(sort),
            None => errors.push(format!(
                "Sort must be one of: {}",
                FormSort::ALL.map(|s| s.as_str()).join(", ")
            )),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ResponsesParams {
        request,
        filters: query.get("filters").cloned(),
    })
}

/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD` (taken as UTC midnight) or a full
/// RFC 3339 timestamp.
pub fn parse_date_param(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    for format in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }

    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
