//! sm-ui library - Session Master web UI module
//!
//! Single-user web service for the collaborator directory and the
//! recommendation assistant. Serves the embedded browser UI, exposes the
//! JSON API, and holds all transient state (deduplicated artist roster,
//! chat transcript) in process memory. Nothing is persisted; the roster
//! reloads from the remote record store on demand.

use axum::Router;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{error, info};

use sm_common::model::ArtistRecord;

pub mod api;
pub mod chat;
pub mod clients;
pub mod roster;

use chat::ChatSession;
use clients::{LlmClient, StoreClient};

/// Application state shared across HTTP handlers
///
/// The roster is read-mostly (directory queries) and only swapped
/// wholesale by a load; the chat session is serialized behind a mutex
/// that is never held across the model call.
#[derive(Clone)]
pub struct AppState {
    /// Deduplicated artist roster (transient copy of the record store)
    pub roster: Arc<RwLock<Vec<ArtistRecord>>>,
    /// Single-user chat session
    pub chat: Arc<Mutex<ChatSession>>,
    /// Record store client
    pub store: Arc<StoreClient>,
    /// Model invocation client
    pub llm: Arc<LlmClient>,
}

impl AppState {
    /// Create new application state with an empty roster and a seeded
    /// chat session
    pub fn new(store: StoreClient, llm: LlmClient) -> Self {
        AppState {
            roster: Arc::new(RwLock::new(Vec::new())),
            chat: Arc::new(Mutex::new(ChatSession::new())),
            store: Arc::new(store),
            llm: Arc::new(llm),
        }
    }

    /// Fetch the record list and replace the held roster with its
    /// deduplicated form
    ///
    /// Fetch failure is not fatal: it is logged and the roster becomes
    /// empty, which the directory renders as a valid empty state.
    pub async fn load_roster(&self) -> usize {
        let records = match self.store.list().await {
            Ok(records) => records,
            Err(e) => {
                error!("Error loading artists: {}", e);
                Vec::new()
            }
        };
        let unique = roster::dedupe_by_name(records);
        let count = unique.len();
        *self.roster.write().await = unique;
        info!(count, "Artist roster loaded");
        count
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};
    use tower_http::trace::TraceLayer;

    Router::new()
        // Pages
        .route("/", get(api::ui::redirect_to_dashboard))
        .route("/Dashboard", get(api::ui::serve_dashboard))
        .route("/Explore", get(api::ui::serve_explore))
        .route("/ArtistProfile/:id", get(api::ui::serve_artist_profile))
        .route("/static/app.js", get(api::ui::serve_app_js))
        .route("/static/style.css", get(api::ui::serve_style_css))
        // JSON API
        .route("/api/artists", get(api::artists::list_artists))
        .route("/api/artists/:id", get(api::artists::get_artist))
        .route("/api/artists/reload", post(api::artists::reload_artists))
        .route("/api/filters", get(api::artists::get_filter_options))
        .route("/api/dashboard", get(api::dashboard::get_summary))
        .route(
            "/api/chat",
            get(api::chat::get_transcript).post(api::chat::post_message),
        )
        .merge(api::health::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
