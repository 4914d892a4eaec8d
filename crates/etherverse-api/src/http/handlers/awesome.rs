//! Curated-list search endpoint.
//!
//! GET /api/awesome?q=term - Fetch, parse, and filter the Awesome Ethereum list.

use axum::Json;
use axum::extract::{Query, State};
use serde::{Deserialize, Serialize};

use etherverse_core::catalog::{CatalogView, load_catalog};

use crate::http::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct AwesomeQuery {
    /// Search term; empty returns the whole list.
    #[serde(default)]
    pub q: String,
}

#[derive(Debug, Serialize)]
pub struct AwesomeResponse {
    #[serde(flatten)]
    pub view: CatalogView,
    /// Resources across all returned categories.
    pub total: usize,
}

/// GET /api/awesome - The document is fetched fresh on every call.
pub async fn search_resources(
    State(state): State<AppState>,
    Query(query): Query<AwesomeQuery>,
) -> Result<Json<AwesomeResponse>, ApiError> {
    let categories = load_catalog(state.catalog_source.as_ref()).await?;
    let view = CatalogView::search(&categories, &query.q);
    let total = view.resource_count();

    tracing::debug!(term = %query.q, total, "Curated list search");

    Ok(Json(AwesomeResponse { view, total }))
}
