use crate::commands::validate_card_fields;
use crate::error::Result;
use crate::model::{Card, PhaseTag};
use crate::store::DiaryStore;

/// Append one card to the diary's sequence. The card id and timestamp are
/// allocated here; the body goes in verbatim.
pub fn run<S: DiaryStore>(
    store: &mut S,
    public_id: &str,
    topic: String,
    phase: PhaseTag,
    body: String,
) -> Result<Card> {
    validate_card_fields(&topic, &body)?;

    let card = Card::new(topic, phase, body);
    store.push_card(public_id, &card)?;
    Ok(card)
}
