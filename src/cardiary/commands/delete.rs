use crate::error::Result;
use crate::store::DiaryStore;

/// Administrative full delete: the diary and every card embedded in it.
pub fn run<S: DiaryStore>(store: &mut S, public_id: &str) -> Result<()> {
    store.delete_diary(public_id)
}
