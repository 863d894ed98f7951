//! End-to-end store behaviour against in-memory storage.

use todo_core::{
    visible_items, Action, FilterTags, ItemPatch, MemoryStorage, NewItem, TodoStore, UlidGenerator,
    SNAPSHOT_KEY,
};

fn open(storage: MemoryStorage) -> TodoStore<MemoryStorage, UlidGenerator> {
    TodoStore::open(storage, UlidGenerator::new(), SNAPSHOT_KEY)
}

fn visible_titles(store: &TodoStore<MemoryStorage, UlidGenerator>, filter: &FilterTags) -> Vec<String> {
    visible_items(store.items(), filter.as_slice())
        .into_iter()
        .map(|item| item.title.clone())
        .collect()
}

#[test]
fn test_milk_and_report() {
    let mut store = open(MemoryStorage::new());
    store.dispatch(Action::add(NewItem::new("Buy milk").with_tags(["errand"])));
    store.dispatch(Action::add(NewItem::new("Write report").with_tags(["work"])));

    let mut filter = FilterTags::new();
    filter.add("errand");
    assert_eq!(visible_titles(&store, &filter), ["Buy milk"]);

    let milk = visible_items(store.items(), filter.as_slice())[0].id.clone();
    store.dispatch(Action::toggle_done(milk));

    filter.remove("errand");
    assert_eq!(visible_titles(&store, &filter), ["Write report", "Buy milk"]);
}

#[test]
fn test_session_survives_reload() {
    let mut store = open(MemoryStorage::new());
    store.dispatch(Action::add(
        NewItem::new("Plan trip").with_details("book flights").with_tags(["travel", "home"]),
    ));
    store.dispatch(Action::add(NewItem::new("Call bank")));
    let trip = store.items()[1].id.clone();
    store.dispatch(Action::toggle_done(trip.clone()));
    store.dispatch(Action::edit(trip.clone(), ItemPatch::default().tags(["travel"])));

    let reloaded = open(store.storage().clone());
    assert_eq!(reloaded.items(), store.items());

    let item = reloaded.state().get(&trip).unwrap();
    assert!(item.done);
    assert_eq!(item.details.as_deref(), Some("book flights"));
    assert_eq!(item.tags, ["travel"]);
}

#[test]
fn test_corrupt_snapshot_is_replaced_on_next_change() {
    let mut store = open(MemoryStorage::with_entry(SNAPSHOT_KEY, r#"{"todoItems": "#));
    assert!(store.items().is_empty());

    store.dispatch(Action::add(NewItem::new("fresh start")));
    let reloaded = open(store.storage().clone());
    assert_eq!(reloaded.items().len(), 1);
}

#[test]
fn test_loads_snapshot_written_by_earlier_versions() {
    // ids from older builds are not ULIDs; they must still round-trip untouched
    let raw = r#"{"todoItems":[
        {"id":"kq2x1-8f3ab","title":"Old item","details":"","done":false,"tags":["a"]},
        {"id":"kq2x0-1c9zz","title":"No tags","done":true}
    ]}"#;
    let store = open(MemoryStorage::with_entry(SNAPSHOT_KEY, raw));
    assert_eq!(store.items().len(), 2);
    assert_eq!(store.items()[0].id.as_str(), "kq2x1-8f3ab");
    assert!(store.items()[1].tags.is_empty());
}
