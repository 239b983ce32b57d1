use crate::forms::{FormsClient, SubmissionsRequest, UpstreamError};
use crate::models::SubmissionPage;

use super::filter::filter_submissions;
use super::filters::parse_filters;

/// Fetch one page from the forms API and apply the caller's filters to it.
pub async fn run(
    forms: &FormsClient,
    form_id: &str,
    request: &SubmissionsRequest,
    raw_filters: Option<&str>,
) -> Result<SubmissionPage, UpstreamError> {
    let page = forms.retrieve_submissions(form_id, request).await?;
    let clauses = parse_filters(raw_filters);

    let fetched = page.responses.len();
    let filtered = filter_submissions(page, &clauses);

    tracing::debug!(
        "Form {form_id}: {} clause(s) kept {} of {fetched} submission(s)",
        clauses.len(),
        filtered.responses.len(),
    );

    Ok(filtered)
}
