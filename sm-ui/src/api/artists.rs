//! Artist directory API
//!
//! Directory queries recompute the filtered view synchronously from the
//! roster held in state; only the explicit reload endpoint goes back to
//! the record store.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::BTreeSet;
use tracing::error;

use crate::roster::{matches_filters, FilterState, FILTER_ALL};
use crate::AppState;
use sm_common::model::ArtistRecord;

/// Query parameters for the directory listing
#[derive(Debug, Default, Deserialize)]
pub struct ArtistQuery {
    /// Free-text search over name and location
    #[serde(default)]
    pub search: String,

    /// Genre facet ("all" or absent disables)
    pub genre: Option<String>,

    /// Tier facet ("all" or absent disables)
    pub tier: Option<String>,

    /// Comma-separated required skill tags
    pub tags: Option<String>,
}

impl ArtistQuery {
    fn filter_state(&self) -> FilterState {
        FilterState {
            genre: self.genre.clone().unwrap_or_else(|| FILTER_ALL.to_string()),
            tier: self.tier.clone().unwrap_or_else(|| FILTER_ALL.to_string()),
            tags: self
                .tags
                .as_deref()
                .unwrap_or("")
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect(),
        }
    }
}

/// Directory listing response
#[derive(Debug, Serialize)]
pub struct ArtistListResponse {
    /// Records passing the filters, roster order
    pub artists: Vec<ArtistRecord>,
    /// Matching count (an empty result is a valid state, not an error)
    pub matched: usize,
    /// Total deduplicated roster size
    pub total: usize,
}

/// GET /api/artists?search=&genre=&tier=&tags=a,b
pub async fn list_artists(
    State(state): State<AppState>,
    Query(query): Query<ArtistQuery>,
) -> Json<ArtistListResponse> {
    let filters = query.filter_state();
    let roster = state.roster.read().await;

    let artists: Vec<ArtistRecord> = roster
        .iter()
        .filter(|record| matches_filters(record, &filters, &query.search))
        .cloned()
        .collect();

    Json(ArtistListResponse {
        matched: artists.len(),
        total: roster.len(),
        artists,
    })
}

/// GET /api/artists/:id
///
/// Single record lookup by routing id.
pub async fn get_artist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ArtistRecord>, ArtistError> {
    let roster = state.roster.read().await;
    roster
        .iter()
        .find(|record| record.id == id)
        .cloned()
        .map(Json)
        .ok_or(ArtistError::NotFound(id))
}

/// Reload response
#[derive(Debug, Serialize)]
pub struct ReloadResponse {
    pub count: usize,
}

/// POST /api/artists/reload
///
/// Re-fetches from the record store and replaces the held roster. A
/// fetch failure is reported as 502 here (unlike the startup load, which
/// degrades silently to an empty roster).
pub async fn reload_artists(
    State(state): State<AppState>,
) -> Result<Json<ReloadResponse>, ArtistError> {
    let records = state.store.list().await.map_err(|e| {
        error!("Error loading artists: {}", e);
        ArtistError::StoreUnavailable(e.to_string())
    })?;

    let unique = crate::roster::dedupe_by_name(records);
    let count = unique.len();
    *state.roster.write().await = unique;
    Ok(Json(ReloadResponse { count }))
}

/// Filter option lists derived from the loaded roster
#[derive(Debug, Serialize)]
pub struct FilterOptionsResponse {
    pub genres: Vec<String>,
    pub tags: Vec<String>,
    pub tiers: Vec<String>,
}

/// GET /api/filters
///
/// Distinct genres and tags across the roster, sorted, so the sidebar
/// options always match loadable data.
pub async fn get_filter_options(State(state): State<AppState>) -> Json<FilterOptionsResponse> {
    let roster = state.roster.read().await;

    let mut genres: BTreeSet<String> = BTreeSet::new();
    let mut tags: BTreeSet<String> = BTreeSet::new();
    for record in roster.iter() {
        if let Some(primary) = &record.primary_genre {
            genres.insert(primary.clone());
        }
        genres.extend(record.genres.iter().cloned());
        tags.extend(record.tags.iter().cloned());
    }

    Json(FilterOptionsResponse {
        genres: genres.into_iter().collect(),
        tags: tags.into_iter().collect(),
        tiers: vec!["A".to_string(), "B".to_string(), "C".to_string()],
    })
}

/// Artist API errors
#[derive(Debug)]
pub enum ArtistError {
    NotFound(String),
    StoreUnavailable(String),
}

impl IntoResponse for ArtistError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ArtistError::NotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Unknown artist: {}", id))
            }
            ArtistError::StoreUnavailable(msg) => (
                StatusCode::BAD_GATEWAY,
                format!("Record store unavailable: {}", msg),
            ),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
