use axum::extract::{Path, Query, State};
use domain::{BlogError, BlogRepo};
use maud::Markup;
use serde::Deserialize;
use std::sync::Arc;

use crate::http::error::HttpError;
use crate::render::{render_detail, render_list};
use crate::views;

#[derive(Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

pub async fn post_list(
    State(repo): State<Arc<dyn BlogRepo>>,
    Query(query): Query<PageQuery>,
) -> Result<Markup, HttpError> {
    let view = views::post_list(repo.as_ref(), None, query.page.as_deref()).await?;
    Ok(render_list(&view))
}

pub async fn post_list_by_tag(
    State(repo): State<Arc<dyn BlogRepo>>,
    Path(tag_slug): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Markup, HttpError> {
    let view = views::post_list(repo.as_ref(), Some(&tag_slug), query.page.as_deref()).await?;
    Ok(render_list(&view))
}

pub async fn post_detail(
    State(repo): State<Arc<dyn BlogRepo>>,
    Path((year, month, day, slug)): Path<(String, String, String, String)>,
) -> Result<Markup, HttpError> {
    // non-numeric date parts are a missing page, not a bad request
    let (Ok(year), Ok(month), Ok(day)) = (year.parse(), month.parse(), day.parse()) else {
        return Err(BlogError::NotFound(format!("post {}/{}/{}/{}", year, month, day, slug)).into());
    };
    let view = views::post_detail(repo.as_ref(), year, month, day, &slug).await?;
    Ok(render_detail(&view))
}
