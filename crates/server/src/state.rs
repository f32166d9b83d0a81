use axum::extract::FromRef;
use domain::{BlogRepo, Mailer};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn BlogRepo>,
    pub mailer: Arc<dyn Mailer>,
    pub site: Arc<SiteSettings>,
}

#[derive(Clone, Debug, Default)]
pub struct SiteSettings {
    /// Public origin without trailing slash; empty means "derive from Host".
    pub base_url: String,
    pub auto_approve_comments: bool,
}

impl FromRef<AppState> for Arc<dyn BlogRepo> {
    fn from_ref(state: &AppState) -> Self {
        state.repo.clone()
    }
}
