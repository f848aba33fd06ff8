use quickpick_core::history;
use quickpick_core::model::SourceGroup;

#[test]
fn recents_are_deduplicated_newest_first() {
    let db = history::open_memory().unwrap();
    history::record_selection(&db, "btn", SourceGroup::Library).unwrap();
    history::record_selection(&db, "inst-1", SourceGroup::Existing).unwrap();
    history::record_selection(&db, "btn", SourceGroup::Library).unwrap();

    let recents = history::recent_keys(&db, 10).unwrap();
    assert_eq!(recents, vec!["btn".to_string(), "inst-1".to_string()]);
}

#[test]
fn use_count_tallies_every_selection() {
    let db = history::open_memory().unwrap();
    history::record_selection(&db, "btn", SourceGroup::Library).unwrap();
    history::record_selection(&db, "btn", SourceGroup::Library).unwrap();

    assert_eq!(history::use_count(&db, "btn").unwrap(), 2);
    assert_eq!(history::use_count(&db, "ghost").unwrap(), 0);
}

#[test]
fn zero_limit_returns_no_recents() {
    let db = history::open_memory().unwrap();
    history::record_selection(&db, "btn", SourceGroup::Library).unwrap();

    assert!(history::recent_keys(&db, 0).unwrap().is_empty());
}
