use super::DiaryStore;
use crate::error::{DiaryError, Result};
use crate::model::{Card, Diary, DiarySummary, PhaseTag};
use std::collections::HashMap;

/// In-memory store for tests. No persistence, no I/O.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    diaries: HashMap<String, Diary>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.diaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diaries.is_empty()
    }
}

impl DiaryStore for InMemoryStore {
    fn insert_diary(&mut self, diary: &Diary) -> Result<()> {
        if self.diaries.contains_key(&diary.public_id) {
            return Err(DiaryError::DuplicatePublicId(diary.public_id.clone()));
        }
        self.diaries.insert(diary.public_id.clone(), diary.clone());
        Ok(())
    }

    fn find_diary(&self, public_id: &str) -> Result<Option<Diary>> {
        Ok(self.diaries.get(public_id).cloned())
    }

    fn list_summaries(&self) -> Result<Vec<DiarySummary>> {
        let mut summaries: Vec<_> = self.diaries.values().map(Diary::summary).collect();
        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(summaries)
    }

    fn delete_diary(&mut self, public_id: &str) -> Result<()> {
        self.diaries
            .remove(public_id)
            .map(|_| ())
            .ok_or_else(|| DiaryError::DiaryNotFound(public_id.to_string()))
    }

    fn push_card(&mut self, public_id: &str, card: &Card) -> Result<()> {
        let diary = self
            .diaries
            .get_mut(public_id)
            .ok_or_else(|| DiaryError::DiaryNotFound(public_id.to_string()))?;
        diary.cards.push(card.clone());
        Ok(())
    }

    fn update_card(
        &mut self,
        public_id: &str,
        card_id: &str,
        topic: String,
        phase: PhaseTag,
        body: String,
    ) -> Result<Card> {
        let diary = self
            .diaries
            .get_mut(public_id)
            .ok_or_else(|| DiaryError::DiaryNotFound(public_id.to_string()))?;
        let card = diary
            .cards
            .iter_mut()
            .find(|c| c.id == card_id)
            .ok_or_else(|| DiaryError::CardNotFound(public_id.to_string(), card_id.to_string()))?;
        card.topic = topic;
        card.phase = phase;
        card.body = body;
        Ok(card.clone())
    }

    fn pull_card(&mut self, public_id: &str, card_id: &str) -> Result<()> {
        let diary = self
            .diaries
            .get_mut(public_id)
            .ok_or_else(|| DiaryError::DiaryNotFound(public_id.to_string()))?;
        let before = diary.cards.len();
        diary.cards.retain(|c| c.id != card_id);
        if diary.cards.len() == before {
            return Err(DiaryError::CardNotFound(
                public_id.to_string(),
                card_id.to_string(),
            ));
        }
        Ok(())
    }
}
