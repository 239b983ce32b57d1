use std::sync::Arc;

use crate::forms::FormsClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub forms: FormsClient,
}
