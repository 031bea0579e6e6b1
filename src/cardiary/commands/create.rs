use crate::commands::require;
use crate::error::{DiaryError, Result};
use crate::idgen;
use crate::model::Diary;
use crate::store::DiaryStore;

/// Attempts at the allocate+insert sequence before giving up. The store's
/// duplicate rejection firing even once is already extraordinary.
const MAX_INSERT_ATTEMPTS: usize = 4;

pub fn run<S: DiaryStore>(
    store: &mut S,
    client_ref: String,
    display_name: String,
    gender: String,
) -> Result<Diary> {
    require("client reference", &client_ref)?;
    require("name", &display_name)?;
    require("gender", &gender)?;

    // The allocator's pre-check can race with a concurrent create; the
    // store's duplicate rejection on insert is authoritative, and means
    // "discard the candidate and start over".
    for _ in 0..MAX_INSERT_ATTEMPTS {
        let public_id = idgen::allocate_public_id(store)?;
        let diary = Diary::new(
            public_id,
            client_ref.clone(),
            display_name.clone(),
            gender.clone(),
        );
        match store.insert_diary(&diary) {
            Ok(()) => return Ok(diary),
            Err(DiaryError::DuplicatePublicId(_)) => continue,
            Err(e) => return Err(e),
        }
    }
    Err(DiaryError::AllocationExhausted)
}
