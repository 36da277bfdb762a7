//! Dashboard summary API

use axum::{extract::State, Json};
use serde::Serialize;
use std::collections::BTreeSet;

use crate::AppState;
use sm_common::model::Tier;

/// Roster totals for the dashboard page
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub artist_count: usize,
    pub tier_a_count: usize,
    pub tier_b_count: usize,
    pub tier_c_count: usize,
    pub nvak_artist_count: usize,
    pub genre_count: usize,
}

/// GET /api/dashboard
pub async fn get_summary(State(state): State<AppState>) -> Json<DashboardSummary> {
    let roster = state.roster.read().await;

    let tier_count = |tier: Tier| roster.iter().filter(|r| r.tier == Some(tier)).count();

    let mut genres: BTreeSet<&str> = BTreeSet::new();
    for record in roster.iter() {
        if let Some(primary) = record.primary_genre.as_deref() {
            genres.insert(primary);
        }
        genres.extend(record.genres.iter().map(String::as_str));
    }

    Json(DashboardSummary {
        artist_count: roster.len(),
        tier_a_count: tier_count(Tier::A),
        tier_b_count: tier_count(Tier::B),
        tier_c_count: tier_count(Tier::C),
        nvak_artist_count: roster.iter().filter(|r| r.nvak_artist).count(),
        genre_count: genres.len(),
    })
}
