//! Artist domain model
//!
//! Records are owned by the remote record store; this process only holds
//! transient copies for the lifetime of a view. The `name` field is the
//! deduplication identity even though `id` is the routing key — two
//! records sharing a name are treated as the same real-world entity.

use serde::{Deserialize, Serialize};

/// Coarse seniority/prestige classification of a collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    /// Award-winning (1B+ streams)
    A,
    /// Established (1M+ streams)
    B,
    /// Emerging artist
    C,
}

impl Tier {
    /// Human-readable badge label for this tier
    pub fn label(&self) -> &'static str {
        match self {
            Tier::A => "Award Winning / 1B+ Streams",
            Tier::B => "Established / 1M+ Streams",
            Tier::C => "Emerging Artist",
        }
    }

    /// Wire representation ("A" / "B" / "C")
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::A => "A",
            Tier::B => "B",
            Tier::C => "C",
        }
    }
}

/// One collaborator entity as served by the record store
///
/// Every field except `id` and `name` is optional on the wire; absent
/// sequences deserialize as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistRecord {
    /// Unique, stable identifier minted by the record store
    pub id: String,
    /// Display name; deduplication identity key
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<Tier>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_genre: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<String>,
    /// Skill labels ("Producer", "Mixing Engineer", ...)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub portfolio_links: Vec<String>,
    #[serde(default)]
    pub nvak_artist: bool,
}

impl ArtistRecord {
    /// Count of populated fields, used by dedup to pick the richer of two
    /// records sharing a name.
    ///
    /// Explicit emptiness rule: `None`, empty string, empty sequence, and
    /// `false` all count as unpopulated. The enumeration covers every
    /// field of the record so the count is stable across additions only
    /// when this list is updated with them.
    pub fn populated_field_count(&self) -> usize {
        let opt = |o: &Option<String>| o.as_deref().is_some_and(|s| !s.is_empty());
        [
            !self.id.is_empty(),
            !self.name.is_empty(),
            opt(&self.location),
            self.tier.is_some(),
            opt(&self.primary_genre),
            !self.genres.is_empty(),
            !self.tags.is_empty(),
            opt(&self.contact),
            !self.portfolio_links.is_empty(),
            self.nvak_artist,
        ]
        .iter()
        .filter(|&&populated| populated)
        .count()
    }
}
