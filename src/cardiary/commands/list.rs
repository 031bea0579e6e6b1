use crate::error::Result;
use crate::model::DiarySummary;
use crate::store::DiaryStore;

/// Administrative enumeration. The projection and the newest-first order come
/// from the store; authorization happened before we were called.
pub fn run<S: DiaryStore>(store: &S) -> Result<Vec<DiarySummary>> {
    store.list_summaries()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{append, create};
    use crate::model::PhaseTag;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_store_lists_nothing() {
        let store = InMemoryStore::new();
        assert!(run(&store).unwrap().is_empty());
    }

    #[test]
    fn summaries_carry_no_card_content() {
        let mut store = InMemoryStore::new();
        let diary = create::run(&mut store, "C-1".into(), "Alex".into(), "Female".into()).unwrap();
        for i in 0..3 {
            append::run(
                &mut store,
                &diary.public_id,
                format!("Topic {}", i),
                PhaseTag::Before,
                "<p>secret</p>".into(),
            )
            .unwrap();
        }

        let summaries = run(&store).unwrap();
        assert_eq!(summaries.len(), 1);

        let json = serde_json::to_value(&summaries).unwrap();
        assert!(!json.to_string().contains("secret"));
        assert!(json[0].get("cards").is_none());
    }

    #[test]
    fn newest_diary_listed_first() {
        let mut store = InMemoryStore::new();
        let first = create::run(&mut store, "C-1".into(), "Alex".into(), "Female".into()).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = create::run(&mut store, "C-2".into(), "Sam".into(), "Male".into()).unwrap();

        let summaries = run(&store).unwrap();
        assert_eq!(summaries[0].public_id, second.public_id);
        assert_eq!(summaries[1].public_id, first.public_id);
    }
}
