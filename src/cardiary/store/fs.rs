use super::DiaryStore;
use crate::error::{DiaryError, Result};
use crate::model::{Card, Diary, DiarySummary, PhaseTag};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const LOCK_FILENAME: &str = "store.lock";

/// File-backed store: one JSON document per diary under a single root
/// directory. The public id alphabet is filename-safe, so the id is used in
/// the filename directly.
///
/// Mutations take an advisory lock on `store.lock`, so concurrent writers —
/// separate `FileStore` instances or separate processes over one directory —
/// serialize their load→mutate→rename cycles instead of overwriting each
/// other. Reads take no lock: documents are replaced by rename, so a reader
/// always sees a complete old or new version.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn diary_path(&self, public_id: &str) -> PathBuf {
        self.root.join(format!("diary-{}.json", public_id))
    }

    fn ensure_root(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }
        Ok(())
    }

    fn load_document(&self, public_id: &str) -> Result<Option<Diary>> {
        let path = self.diary_path(public_id);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        let diary: Diary = serde_json::from_str(&content)?;
        Ok(Some(diary))
    }

    /// Take the store's advisory write lock. The lock file handle releases
    /// the lock when dropped, so callers hold the returned guard for the
    /// whole mutation.
    fn lock_for_write(&self) -> Result<fs::File> {
        self.ensure_root()?;
        let lock = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .open(self.root.join(LOCK_FILENAME))?;
        lock.lock()?;
        Ok(lock)
    }

    /// Replace the diary's document in one step: write to a fresh uniquely
    /// named temp file in the same directory, then rename over the target.
    /// Readers see either the old document or the new one, never a partial
    /// write, and concurrent writers can never truncate each other's
    /// in-flight temp file.
    fn write_document(&self, diary: &Diary) -> Result<()> {
        self.ensure_root()?;
        let path = self.diary_path(&diary.public_id);
        let content = serde_json::to_string_pretty(diary)?;
        let mut tmp = NamedTempFile::new_in(&self.root)?;
        tmp.write_all(content.as_bytes())?;
        tmp.persist(path).map_err(|e| DiaryError::Io(e.error))?;
        Ok(())
    }

    /// Load the owning document, apply one mutation, write it back, all
    /// under the store's write lock. All card operations funnel through here
    /// so the document-level atomicity note above holds for every mutation
    /// path, and concurrent mutations of one diary cannot lose each other's
    /// writes.
    fn mutate_document<T>(
        &mut self,
        public_id: &str,
        f: impl FnOnce(&mut Diary) -> Result<T>,
    ) -> Result<T> {
        let _guard = self.lock_for_write()?;
        let mut diary = self
            .load_document(public_id)?
            .ok_or_else(|| DiaryError::DiaryNotFound(public_id.to_string()))?;
        let out = f(&mut diary)?;
        self.write_document(&diary)?;
        Ok(out)
    }
}

impl DiaryStore for FileStore {
    fn insert_diary(&mut self, diary: &Diary) -> Result<()> {
        let _guard = self.lock_for_write()?;
        if self.diary_path(&diary.public_id).exists() {
            return Err(DiaryError::DuplicatePublicId(diary.public_id.clone()));
        }
        self.write_document(diary)
    }

    fn find_diary(&self, public_id: &str) -> Result<Option<Diary>> {
        self.load_document(public_id)
    }

    fn list_summaries(&self) -> Result<Vec<DiarySummary>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut summaries = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            let name = match path.file_name().and_then(|n| n.to_str()) {
                Some(n) => n,
                None => continue,
            };
            if !name.starts_with("diary-") || !name.ends_with(".json") {
                continue;
            }
            let content = fs::read_to_string(&path)?;
            let diary: Diary = serde_json::from_str(&content)?;
            summaries.push(diary.summary());
        }

        summaries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(summaries)
    }

    fn delete_diary(&mut self, public_id: &str) -> Result<()> {
        let _guard = self.lock_for_write()?;
        let path = self.diary_path(public_id);
        if !path.exists() {
            return Err(DiaryError::DiaryNotFound(public_id.to_string()));
        }
        fs::remove_file(path)?;
        Ok(())
    }

    fn push_card(&mut self, public_id: &str, card: &Card) -> Result<()> {
        self.mutate_document(public_id, |diary| {
            diary.cards.push(card.clone());
            Ok(())
        })
    }

    fn update_card(
        &mut self,
        public_id: &str,
        card_id: &str,
        topic: String,
        phase: PhaseTag,
        body: String,
    ) -> Result<Card> {
        self.mutate_document(public_id, |diary| {
            let card = diary
                .cards
                .iter_mut()
                .find(|c| c.id == card_id)
                .ok_or_else(|| {
                    DiaryError::CardNotFound(public_id.to_string(), card_id.to_string())
                })?;
            card.topic = topic;
            card.phase = phase;
            card.body = body;
            Ok(card.clone())
        })
    }

    fn pull_card(&mut self, public_id: &str, card_id: &str) -> Result<()> {
        self.mutate_document(public_id, |diary| {
            let before = diary.cards.len();
            diary.cards.retain(|c| c.id != card_id);
            if diary.cards.len() == before {
                return Err(DiaryError::CardNotFound(
                    public_id.to_string(),
                    card_id.to_string(),
                ));
            }
            Ok(())
        })
    }
}
