use crate::commands::validate_card_fields;
use crate::error::Result;
use crate::model::{Card, PhaseTag};
use crate::store::DiaryStore;

/// Replace one card's `topic`/`phase`/`body` in place, addressed by card id.
/// `id` and `created_at` never change; the store hands back the card as
/// re-read after the mutation.
pub fn run<S: DiaryStore>(
    store: &mut S,
    public_id: &str,
    card_id: &str,
    topic: String,
    phase: PhaseTag,
    body: String,
) -> Result<Card> {
    validate_card_fields(&topic, &body)?;
    store.update_card(public_id, card_id, topic, phase, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{append, create, get};
    use crate::error::DiaryError;
    use crate::store::memory::InMemoryStore;

    fn seeded() -> (InMemoryStore, String, Vec<Card>) {
        let mut store = InMemoryStore::new();
        let diary = create::run(&mut store, "C-1".into(), "Alex".into(), "Female".into()).unwrap();
        let cards = (0..3)
            .map(|i| {
                append::run(
                    &mut store,
                    &diary.public_id,
                    format!("Topic {}", i),
                    PhaseTag::Before,
                    format!("<p>{}</p>", i),
                )
                .unwrap()
            })
            .collect();
        (store, diary.public_id, cards)
    }

    #[test]
    fn edits_only_the_targeted_card() {
        let (mut store, public_id, cards) = seeded();

        let updated = run(
            &mut store,
            &public_id,
            &cards[1].id,
            "Revised".into(),
            PhaseTag::After,
            "<p>calmer</p>".into(),
        )
        .unwrap();
        assert_eq!(updated.id, cards[1].id);
        assert_eq!(updated.created_at, cards[1].created_at);
        assert_eq!(updated.phase, PhaseTag::After);

        let diary = get::run(&store, &public_id).unwrap();
        assert_eq!(diary.cards[0], cards[0]);
        assert_eq!(diary.cards[2], cards[2]);
        assert_eq!(diary.cards[1].body, "<p>calmer</p>");
    }

    #[test]
    fn missing_card_and_missing_diary_are_one_outcome() {
        let (mut store, public_id, _) = seeded();

        let for_card = run(
            &mut store,
            &public_id,
            "no-such-card",
            "T".into(),
            PhaseTag::Before,
            "b".into(),
        )
        .unwrap_err();
        let for_diary = run(
            &mut store,
            "0000000000",
            "no-such-card",
            "T".into(),
            PhaseTag::Before,
            "b".into(),
        )
        .unwrap_err();

        assert!(for_card.is_not_found());
        assert!(for_diary.is_not_found());
    }

    #[test]
    fn invalid_fields_leave_the_card_untouched() {
        let (mut store, public_id, cards) = seeded();

        let err = run(
            &mut store,
            &public_id,
            &cards[0].id,
            "".into(),
            PhaseTag::After,
            "b".into(),
        )
        .unwrap_err();
        assert!(matches!(err, DiaryError::Validation(_)));

        let diary = get::run(&store, &public_id).unwrap();
        assert_eq!(diary.cards[0], cards[0]);
    }
}
