//! Random identifier generation and the public-id allocator.
//!
//! Public ids are what end users see in diary links, so they are short,
//! URL-safe, and checked against the store before use. Card ids only need to
//! be unique within one diary; they use the same alphabet at a length where
//! collision is not a practical concern, and skip the store check.

use rand::Rng;

use crate::error::{DiaryError, Result};
use crate::store::DiaryStore;

/// URL-safe alphabet: `A-Z a-z 0-9 _ -`.
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

pub const PUBLIC_ID_LEN: usize = 10;
pub const CARD_ID_LEN: usize = 21;

/// Cap on allocate attempts. At 64^10 candidates a single collision is
/// already extraordinary; hitting the cap means the store is misbehaving.
const MAX_ATTEMPTS: usize = 16;

pub fn random_id(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect()
}

pub fn card_id() -> String {
    random_id(CARD_ID_LEN)
}

/// Produce a `public_id` no existing diary uses.
///
/// This is a check-then-act sequence: uniqueness holds at check time, and the
/// store's own duplicate rejection on insert is the authoritative guard. The
/// create path retries the whole allocate+insert sequence when that guard
/// fires.
pub fn allocate_public_id<S: DiaryStore>(store: &S) -> Result<String> {
    for _ in 0..MAX_ATTEMPTS {
        let candidate = random_id(PUBLIC_ID_LEN);
        if store.find_diary(&candidate)?.is_none() {
            return Ok(candidate);
        }
    }
    Err(DiaryError::AllocationExhausted)
}
