use crate::error::{DiaryError, Result};
use crate::model::Diary;
use crate::store::DiaryStore;

pub fn run<S: DiaryStore>(store: &S, public_id: &str) -> Result<Diary> {
    store
        .find_diary(public_id)?
        .ok_or_else(|| DiaryError::DiaryNotFound(public_id.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::create;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn fetches_existing_diary() {
        let mut store = InMemoryStore::new();
        let created = create::run(&mut store, "C-1".into(), "Alex".into(), "Female".into()).unwrap();

        let fetched = run(&store, &created.public_id).unwrap();
        assert_eq!(fetched.public_id, created.public_id);
        assert_eq!(fetched.display_name, "Alex");
    }

    #[test]
    fn missing_diary_is_not_found() {
        let store = InMemoryStore::new();
        let err = run(&store, "0000000000").unwrap_err();
        assert!(err.is_not_found());
    }
}
