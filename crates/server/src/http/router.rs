use super::handlers::{comments, health, posts, share};
use crate::state::AppState;
use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/blog/") }))
        .route("/health", get(health::health_check))
        .route("/blog/", get(posts::post_list))
        .route("/blog/tag/:tag_slug/", get(posts::post_list_by_tag))
        .route("/blog/:year/:month/:day/:slug/", get(posts::post_detail))
        .route(
            "/blog/posts/:post_id/comment/",
            post(comments::post_comment).fallback(comments::method_not_allowed),
        )
        .route(
            "/blog/posts/:post_id/share/",
            get(share::share_form).post(share::share_submit),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
