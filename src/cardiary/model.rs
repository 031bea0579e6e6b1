use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::idgen;

/// Longest topic the engine accepts. The form widget enforces the same bound
/// client-side; the engine re-checks it so a raw API caller cannot bypass it.
pub const MAX_TOPIC_LEN: usize = 50;

/// Which side of the therapy session a card belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseTag {
    Before,
    After,
}

impl fmt::Display for PhaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhaseTag::Before => write!(f, "Before"),
            PhaseTag::After => write!(f, "After"),
        }
    }
}

impl FromStr for PhaseTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Before" => Ok(PhaseTag::Before),
            "After" => Ok(PhaseTag::After),
            other => Err(format!("invalid phase tag: {}", other)),
        }
    }
}

/// One diary entry. Cards only exist embedded in their owning diary's `cards`
/// sequence; they are never persisted on their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique within the owning diary.
    pub id: String,
    pub topic: String,
    pub phase: PhaseTag,
    /// Opaque formatted-text payload. Stored and returned verbatim; the
    /// engine never inspects its structure.
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Card {
    pub fn new(topic: String, phase: PhaseTag, body: String) -> Self {
        Self {
            id: idgen::card_id(),
            topic,
            phase,
            body,
            created_at: Utc::now(),
        }
    }
}

/// The aggregate root: one client's journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diary {
    /// Storage identity. Never part of user-facing addressing.
    pub internal_key: Uuid,
    /// The only externally usable identifier. Immutable once assigned.
    pub public_id: String,
    /// Caller-supplied reference (e.g. a case number). Not unique.
    pub client_ref: String,
    pub display_name: String,
    pub gender: String,
    /// Append order is storage order.
    pub cards: Vec<Card>,
    pub created_at: DateTime<Utc>,
}

impl Diary {
    pub fn new(public_id: String, client_ref: String, display_name: String, gender: String) -> Self {
        Self {
            internal_key: Uuid::new_v4(),
            public_id,
            client_ref,
            display_name,
            gender,
            cards: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn card(&self, card_id: &str) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == card_id)
    }

    pub fn summary(&self) -> DiarySummary {
        DiarySummary {
            public_id: self.public_id.clone(),
            display_name: self.display_name.clone(),
            client_ref: self.client_ref.clone(),
            created_at: self.created_at,
        }
    }
}

/// Restricted projection for administrative listing. Deliberately carries no
/// cards and no body content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiarySummary {
    pub public_id: String,
    pub display_name: String,
    pub client_ref: String,
    pub created_at: DateTime<Utc>,
}
