use cardiary::api::{AdminToken, DiaryApi};
use cardiary::model::PhaseTag;
use cardiary::store::fs::FileStore;

/// The full lifecycle against the file-backed store: create, append, edit,
/// remove, delete, with reloads in between to prove everything hit disk.
#[test]
fn full_lifecycle_on_disk() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_dir = temp_dir.path().join("diaries");

    let mut api = DiaryApi::new(FileStore::new(data_dir.clone()));
    let admin = AdminToken::assume_verified();

    let diary = api
        .create_diary("C-100".into(), "Alex".into(), "Non-binary".into())
        .unwrap();
    assert_eq!(diary.public_id.len(), 10);
    assert!(diary.cards.is_empty());

    let card = api
        .append_card(
            &diary.public_id,
            "Anxiety".into(),
            PhaseTag::Before,
            "<p>nervous</p>".into(),
        )
        .unwrap();
    assert!(!card.id.is_empty());

    api.update_card(
        &diary.public_id,
        &card.id,
        "Anxiety (revised)".into(),
        PhaseTag::After,
        "<p>calmer</p>".into(),
    )
    .unwrap();

    // A fresh store over the same directory sees the mutated document.
    let reopened = DiaryApi::new(FileStore::new(data_dir.clone()));
    let reloaded = reopened.diary(&diary.public_id).unwrap();
    assert_eq!(reloaded.cards.len(), 1);
    assert_eq!(reloaded.cards[0].phase, PhaseTag::After);
    assert_eq!(reloaded.cards[0].body, "<p>calmer</p>");
    assert_eq!(reloaded.cards[0].created_at, card.created_at);

    api.remove_card(&diary.public_id, &card.id).unwrap();
    assert!(api.diary(&diary.public_id).unwrap().cards.is_empty());

    // Second remove of the same card is the not-found outcome.
    assert!(api
        .remove_card(&diary.public_id, &card.id)
        .unwrap_err()
        .is_not_found());

    api.delete_diary(admin, &diary.public_id).unwrap();
    assert!(api.diary(&diary.public_id).unwrap_err().is_not_found());
    assert!(api.list_diaries(admin).unwrap().is_empty());
}

#[test]
fn listing_projects_headers_newest_first() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut api = DiaryApi::new(FileStore::new(temp_dir.path().to_path_buf()));
    let admin = AdminToken::assume_verified();

    let first = api
        .create_diary("C-1".into(), "Alex".into(), "Female".into())
        .unwrap();
    std::thread::sleep(std::time::Duration::from_millis(5));
    let second = api
        .create_diary("C-2".into(), "Sam".into(), "Male".into())
        .unwrap();

    api.append_card(
        &first.public_id,
        "Topic".into(),
        PhaseTag::Before,
        "<p>private</p>".into(),
    )
    .unwrap();

    let summaries = api.list_diaries(admin).unwrap();
    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].public_id, second.public_id);
    assert_eq!(summaries[1].public_id, first.public_id);

    // The projection never leaks card content.
    let json = serde_json::to_string(&summaries).unwrap();
    assert!(!json.contains("private"));
    assert!(!json.contains("cards"));
}
