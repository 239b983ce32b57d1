//! Client for the upstream forms API.

pub mod client;
pub mod request;

pub use client::{FormsClient, UpstreamError};
pub use request::{FormSort, FormStatus, SubmissionsRequest, DEFAULT_LIMIT, MAX_LIMIT};
