//! Recommendation chat API
//!
//! Drives one turn of the chat session per POST. The session mutex is
//! held only for the synchronous transitions, never across the model
//! call, so a concurrent submit observes `Processing` and is rejected
//! without blocking on the outstanding request.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::chat::{build_prompt, ChatMessage, Submission};
use crate::AppState;

/// Transcript response
#[derive(Debug, Serialize)]
pub struct TranscriptResponse {
    pub messages: Vec<ChatMessage>,
    pub processing: bool,
}

/// GET /api/chat
pub async fn get_transcript(State(state): State<AppState>) -> Json<TranscriptResponse> {
    let session = state.chat.lock().await;
    Json(TranscriptResponse {
        messages: session.messages().to_vec(),
        processing: session.is_processing(),
    })
}

/// Submit request body
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub text: String,
}

/// Submit response
///
/// `accepted: false` means the submit was a no-op (blank input or a turn
/// already outstanding); the transcript is unchanged.
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub accepted: bool,
    pub messages: Vec<ChatMessage>,
    pub processing: bool,
}

/// POST /api/chat
///
/// Runs a full turn: optimistic user append, model invocation with the
/// projected roster, then either the recommendation message or the fixed
/// apology. Model failures never surface past the transcript.
pub async fn post_message(
    State(state): State<AppState>,
    Json(request): Json<SubmitRequest>,
) -> Json<SubmitResponse> {
    // Phase 1: try to start the turn (synchronous, under the lock)
    let text = {
        let mut session = state.chat.lock().await;
        match session.begin_turn(&request.text) {
            Submission::Accepted { text } => text,
            Submission::Ignored => {
                return Json(SubmitResponse {
                    accepted: false,
                    messages: session.messages().to_vec(),
                    processing: session.is_processing(),
                });
            }
        }
    };

    // Phase 2: model call with the lock released
    let prompt = {
        let roster = state.roster.read().await;
        build_prompt(&text, &roster)
    };
    let outcome = state.llm.invoke(&prompt).await;

    // Phase 3: finish the turn
    let mut session = state.chat.lock().await;
    match outcome {
        Ok(reply) => session.complete_turn(reply.response, reply.artist_ids),
        Err(e) => {
            error!("Error processing request: {}", e);
            session.fail_turn();
        }
    }

    Json(SubmitResponse {
        accepted: true,
        messages: session.messages().to_vec(),
        processing: session.is_processing(),
    })
}
