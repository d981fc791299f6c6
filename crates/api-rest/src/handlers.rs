//! REST API request handlers.

use crate::error::{ApiError, ApiResult};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use glossary_core::application::{CreateTermRequest, GlossaryService, UpdateTermRequest};
use glossary_core::domain::{Keyword, Term};
use std::collections::BTreeMap;
use tracing::debug;

/// GET / - every term keyed by keyword
pub async fn list_terms_handler(
    State(service): State<GlossaryService>,
) -> ApiResult<Json<BTreeMap<Keyword, Term>>> {
    let terms = service.list_terms().await?;
    debug!(count = terms.len(), "GET /");
    Ok(Json(terms))
}

/// POST /term/{keyword} - create a term
pub async fn create_term_handler(
    State(service): State<GlossaryService>,
    Path(keyword): Path<String>,
    body: Result<Json<CreateTermRequest>, JsonRejection>,
) -> ApiResult<Json<Term>> {
    let Json(req) = body.map_err(ApiError::from)?;
    debug!(keyword = %keyword, "POST /term");

    let term = service.create_term(&keyword, req).await?;
    Ok(Json(term))
}

/// PUT /term/{keyword} - update definition and/or source link
pub async fn update_term_handler(
    State(service): State<GlossaryService>,
    Path(keyword): Path<String>,
    body: Result<Json<UpdateTermRequest>, JsonRejection>,
) -> ApiResult<Json<Term>> {
    let Json(req) = body.map_err(ApiError::from)?;
    debug!(keyword = %keyword, "PUT /term");

    let term = service.update_term(&keyword, req).await?;
    Ok(Json(term))
}
