//! Chat recommendation session
//!
//! Holds the append-only transcript and the two-state submit machine
//! (`Idle` / `Processing`). The session itself performs no I/O: the HTTP
//! handler drives a turn through `begin_turn` → model call →
//! `complete_turn` / `fail_turn`, so the transitions stay synchronous and
//! testable. Only one turn may be outstanding at a time; a submit that
//! observes `Processing` is rejected with no side effects, which keeps
//! transcript entries in strict call order.

use serde::Serialize;
use sm_common::model::ArtistRecord;

/// Assistant greeting seeded into every new transcript
const GREETING: &str = "Hi there! I can help you find the perfect music collaborator based on \
    your needs. Tell me what you're looking for - like 'I need a pop producer in LA who works \
    with guitar-driven tracks' or 'Looking for a songwriter in Nashville for a country album'";

/// System notice seeded as the first transcript entry
const SYSTEM_NOTICE: &str = "Start a new conversation";

/// Fixed apology appended when the model call fails; raw error detail
/// never enters the transcript.
const APOLOGY: &str = "I'm sorry, I encountered an error processing your request. Could you try \
    again with different wording?";

/// Transcript entry author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
    System,
    Recommendation,
}

/// One transcript entry
///
/// `artist_ids` is populated only for `Sender::Recommendation` and holds
/// the identifiers the model referenced, in the order it returned them.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub artist_ids: Vec<String>,
}

/// Submit machine state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatState {
    Idle,
    Processing,
}

/// Outcome of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// User message appended; caller must run the model call and finish
    /// the turn with `complete_turn` or `fail_turn`.
    Accepted { text: String },
    /// Blank input or a turn already outstanding; nothing changed.
    Ignored,
}

/// One user's conversation with the recommendation assistant
#[derive(Debug)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    state: ChatState,
    next_id: u64,
}

impl ChatSession {
    /// New session with the seeded two-entry transcript
    pub fn new() -> Self {
        let mut session = ChatSession {
            messages: Vec::new(),
            state: ChatState::Idle,
            next_id: 1,
        };
        session.append(Sender::System, SYSTEM_NOTICE.to_string(), Vec::new());
        session.append(Sender::Assistant, GREETING.to_string(), Vec::new());
        session
    }

    /// Attempt to start a turn with the given raw input
    ///
    /// Trims the input; blank input or a submit while a turn is already
    /// outstanding is `Ignored` (no transition, no append). Otherwise the
    /// user message is appended immediately, before the model call
    /// resolves, and the session enters `Processing`.
    pub fn begin_turn(&mut self, input: &str) -> Submission {
        let text = input.trim();
        if text.is_empty() || self.state == ChatState::Processing {
            return Submission::Ignored;
        }
        let text = text.to_string();
        self.append(Sender::User, text.clone(), Vec::new());
        self.state = ChatState::Processing;
        Submission::Accepted { text }
    }

    /// Finish the outstanding turn with the model's reply
    ///
    /// No-op unless a turn is outstanding, so a late resolution against a
    /// session that never started (or already finished) cannot corrupt
    /// the transcript.
    pub fn complete_turn(&mut self, response: String, artist_ids: Vec<String>) {
        if self.state != ChatState::Processing {
            return;
        }
        self.append(Sender::Recommendation, response, artist_ids);
        self.state = ChatState::Idle;
    }

    /// Finish the outstanding turn after a failed model call
    ///
    /// Appends the fixed apology; the caller is responsible for logging
    /// the underlying error.
    pub fn fail_turn(&mut self) {
        if self.state != ChatState::Processing {
            return;
        }
        self.append(Sender::Assistant, APOLOGY.to_string(), Vec::new());
        self.state = ChatState::Idle;
    }

    pub fn is_processing(&self) -> bool {
        self.state == ChatState::Processing
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    fn append(&mut self, sender: Sender, text: String, artist_ids: Vec<String>) {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            sender,
            text,
            artist_ids,
        });
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Trimmed per-record projection sent to the model
///
/// Contact details and portfolio links stay out of the prompt; the model
/// only needs matching signal plus the id to reference a record.
#[derive(Debug, Serialize)]
pub struct ArtistProjection<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub location: Option<&'a str>,
    pub tier: Option<&'a str>,
    pub genres: &'a [String],
    pub tags: &'a [String],
    pub primary_genre: Option<&'a str>,
}

impl<'a> From<&'a ArtistRecord> for ArtistProjection<'a> {
    fn from(record: &'a ArtistRecord) -> Self {
        ArtistProjection {
            id: &record.id,
            name: &record.name,
            location: record.location.as_deref(),
            tier: record.tier.map(|t| t.as_str()),
            genres: &record.genres,
            tags: &record.tags,
            primary_genre: record.primary_genre.as_deref(),
        }
    }
}

/// Assemble the matching prompt for one user turn
///
/// Embeds the raw user text plus the projected roster so the model can
/// reference records by id.
pub fn build_prompt(user_text: &str, roster: &[ArtistRecord]) -> String {
    let projections: Vec<ArtistProjection> = roster.iter().map(ArtistProjection::from).collect();
    let roster_json =
        serde_json::to_string(&projections).unwrap_or_else(|_| "[]".to_string());

    format!(
        "User query: \"{user_text}\"\n\
         \n\
         As an AI assistant for a music industry collaboration matching app, analyze this \
         query to help match the user with the most suitable artists/producers.\n\
         \n\
         Consider these aspects of the query:\n\
         1. Artist name (if specified)\n\
         2. Location preferences\n\
         3. Timeframe\n\
         4. Genre/style preferences\n\
         5. Specific skills needed (producer, songwriter, engineer, etc.)\n\
         \n\
         Based on this analysis, provide:\n\
         1. A conversational response addressing the user's needs\n\
         2. The IDs of 2-4 most relevant artists from our database\n\
         \n\
         Database artists: {roster_json}"
    )
}

/// Resolve a recommendation's artist ids against the loaded roster
///
/// Ids that match no loaded record are silently omitted; order follows
/// the id list, not the roster.
pub fn resolve_recommended<'a>(
    artist_ids: &[String],
    roster: &'a [ArtistRecord],
) -> Vec<&'a ArtistRecord> {
    artist_ids
        .iter()
        .filter_map(|id| roster.iter().find(|r| r.id == *id))
        .collect()
}
