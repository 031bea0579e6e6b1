//! # API Facade
//!
//! [`DiaryApi`] is the single entry point for every engine operation,
//! regardless of the front end consuming it. It dispatches to the command
//! layer and returns plain domain types; it never touches stdout/stderr and
//! never assumes a terminal.
//!
//! Generic over [`DiaryStore`] so production runs on `FileStore` and tests on
//! `InMemoryStore`.
//!
//! ## Administrative operations
//!
//! [`DiaryApi::list_diaries`] and [`DiaryApi::delete_diary`] take an
//! [`AdminToken`]. The engine performs no credential check of its own; the
//! token is a capability the calling layer constructs once its own
//! authentication has passed. There is no ambient session state to consult.

use crate::commands;
use crate::error::Result;
use crate::model::{Card, Diary, DiarySummary, PhaseTag};
use crate::store::DiaryStore;

/// Capability attesting that the caller was authenticated as an
/// administrator by a collaborating layer before reaching the engine.
#[derive(Debug, Clone, Copy)]
pub struct AdminToken(());

impl AdminToken {
    /// Construct the capability. Call this only after your own auth gate has
    /// approved the operator.
    pub fn assume_verified() -> Self {
        AdminToken(())
    }
}

pub struct DiaryApi<S: DiaryStore> {
    store: S,
}

impl<S: DiaryStore> DiaryApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn create_diary(
        &mut self,
        client_ref: String,
        display_name: String,
        gender: String,
    ) -> Result<Diary> {
        commands::create::run(&mut self.store, client_ref, display_name, gender)
    }

    pub fn diary(&self, public_id: &str) -> Result<Diary> {
        commands::get::run(&self.store, public_id)
    }

    pub fn append_card(
        &mut self,
        public_id: &str,
        topic: String,
        phase: PhaseTag,
        body: String,
    ) -> Result<Card> {
        commands::append::run(&mut self.store, public_id, topic, phase, body)
    }

    pub fn update_card(
        &mut self,
        public_id: &str,
        card_id: &str,
        topic: String,
        phase: PhaseTag,
        body: String,
    ) -> Result<Card> {
        commands::edit::run(&mut self.store, public_id, card_id, topic, phase, body)
    }

    pub fn remove_card(&mut self, public_id: &str, card_id: &str) -> Result<()> {
        commands::remove::run(&mut self.store, public_id, card_id)
    }

    pub fn list_diaries(&self, _admin: AdminToken) -> Result<Vec<DiarySummary>> {
        commands::list::run(&self.store)
    }

    pub fn delete_diary(&mut self, _admin: AdminToken, public_id: &str) -> Result<()> {
        commands::delete::run(&mut self.store, public_id)
    }
}
