use reqwest::{StatusCode, Url};
use thiserror::Error;

use crate::config::Config;
use crate::models::SubmissionPage;

use super::request::SubmissionsRequest;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Forms API request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Forms API responded with status {status}")]
    Status { status: StatusCode, body: String },

    #[error("Forms API returned an unreadable body: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Invalid forms API base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

pub struct FormsClient {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
}

impl FormsClient {
    pub fn new(config: &Config) -> Result<Self, UpstreamError> {
        let invalid = |reason: String| UpstreamError::InvalidBaseUrl {
            url: config.forms_api_base_url.clone(),
            reason,
        };
        let base_url = Url::parse(&config.forms_api_base_url).map_err(|e| invalid(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(invalid("not a hierarchical URL".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()
            .map_err(UpstreamError::Transport)?;

        Ok(Self {
            client,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    /// The form id is added as one escaped path segment, so `/`, `?` or `#`
    /// in it cannot change the upstream path or query.
    pub fn submissions_url(&self, form_id: &str) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["v1", "api", "forms", form_id, "submissions"]);
        }
        url
    }

    /// Fetch one page of submissions. There is no retry: any failure is
    /// returned to the caller as is.
    pub async fn retrieve_submissions(
        &self,
        form_id: &str,
        request: &SubmissionsRequest,
    ) -> Result<SubmissionPage, UpstreamError> {
        let url = self.submissions_url(form_id);
        tracing::debug!("Fetching submissions from {url}");

        let resp = self
            .client
            .get(url)
            .bearer_auth(&self.api_key)
            .query(request)
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .unwrap_or_default()
                .chars()
                .take(1024)
                .collect::<String>();
            tracing::warn!("Forms API returned {status} for form {form_id}: {body}");
            return Err(UpstreamError::Status { status, body });
        }

        resp.json::<SubmissionPage>()
            .await
            .map_err(UpstreamError::Decode)
    }
}
