use crate::error::Result;
use crate::store::DiaryStore;

/// Remove exactly one card from its diary, addressed by card id. Sibling
/// order is untouched.
pub fn run<S: DiaryStore>(store: &mut S, public_id: &str, card_id: &str) -> Result<()> {
    store.pull_card(public_id, card_id)
}
