//! # Storage Layer
//!
//! The [`DiaryStore`] trait abstracts the document store holding diary
//! records. Diaries are whole documents; cards live embedded inside their
//! owning diary and are only reachable through it.
//!
//! ## Design Rationale
//!
//! Storage is abstracted behind a trait to:
//! - Enable **testing** with `InMemoryStore` (no filesystem needed)
//! - Allow **other backends** (a database collection, etc.) without changing
//!   the command layer
//!
//! Card mutations are store operations in their own right (`push_card`,
//! `update_card`, `pull_card`) rather than read-modify-write round trips in
//! the command layer. Each implementation applies them atomically against the
//! single owning document, so concurrent edits to different cards of one
//! diary cannot lose each other's writes. Cards are always addressed by
//! `card_id`, never by position.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON document per diary
//!   (`diary-<publicId>.json`), rewritten via temp-file-and-rename so a
//!   document is always either the old or the new version.
//! - [`memory::InMemoryStore`]: in-memory storage for tests.

use crate::error::Result;
use crate::model::{Card, Diary, DiarySummary, PhaseTag};

pub mod fs;
pub mod memory;

/// Abstract interface for diary storage.
///
/// `insert_diary` must reject a `public_id` already in use — that rejection,
/// not the allocator's pre-check, is the authoritative uniqueness guard.
pub trait DiaryStore {
    /// Persist a new diary. Fails with `DuplicatePublicId` if the id is taken.
    fn insert_diary(&mut self, diary: &Diary) -> Result<()>;

    /// Fetch a diary by its public id.
    fn find_diary(&self, public_id: &str) -> Result<Option<Diary>>;

    /// Header projections of every diary, newest first. Never loads card
    /// bodies into the result.
    fn list_summaries(&self) -> Result<Vec<DiarySummary>>;

    /// Remove a whole diary and everything embedded in it. Fails with
    /// `DiaryNotFound` if nothing matched.
    fn delete_diary(&mut self, public_id: &str) -> Result<()>;

    /// Append one card to the diary's sequence. Fails with `DiaryNotFound`.
    fn push_card(&mut self, public_id: &str, card: &Card) -> Result<()>;

    /// Replace `topic`/`phase`/`body` of the card with the given id, leaving
    /// `id` and `created_at` untouched, and return the card as re-read after
    /// the mutation. Fails with `DiaryNotFound` or `CardNotFound`.
    fn update_card(
        &mut self,
        public_id: &str,
        card_id: &str,
        topic: String,
        phase: PhaseTag,
        body: String,
    ) -> Result<Card>;

    /// Remove exactly the card with the given id, preserving the order of its
    /// siblings. Fails with `DiaryNotFound` or `CardNotFound`.
    fn pull_card(&mut self, public_id: &str, card_id: &str) -> Result<()>;
}
