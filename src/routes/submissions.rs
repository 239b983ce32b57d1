use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::Json;

use crate::error::AppError;
use crate::models::SubmissionPage;
use crate::state::SharedState;
use crate::submission::pipeline;

use super::params;

pub async fn filtered_responses(
    State(state): State<SharedState>,
    Path(form_id): Path<String>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<SubmissionPage>, AppError> {
    if form_id.trim().is_empty() {
        return Err(AppError::Validation(vec!["A Form ID is required".to_string()]));
    }

    let params = params::validate(&query).map_err(AppError::Validation)?;

    let page = pipeline::run(
        &state.forms,
        &form_id,
        &params.request,
        params.filters.as_deref(),
    )
    .await?;

    Ok(Json(page))
}
