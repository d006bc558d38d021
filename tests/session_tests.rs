use battleships::{
    attack, place_simple, AttackOutcome, Board, Fleet, Session, SessionStore,
};

fn session() -> Session {
    let mut board = Board::default();
    let fleet = Fleet::from_pairs([("Carrier", 5u32)]);
    place_simple(&mut board, &fleet).unwrap();
    Session::new(board, fleet)
}

#[test]
fn test_insert_get_remove() {
    let mut store = SessionStore::new();
    assert!(store.is_empty());

    assert!(store.insert("alice", session()).is_none());
    assert!(store.insert("bot", session()).is_none());
    assert_eq!(store.len(), 2);
    assert!(store.contains("alice"));
    assert!(store.get("alice").is_some());
    assert!(store.get("carol").is_none());

    let removed = store.remove("alice").unwrap();
    assert_eq!(removed.fleet.remaining("Carrier"), Some(5));
    assert!(!store.contains("alice"));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_insert_replaces_and_returns_previous() {
    let mut store = SessionStore::new();
    store.insert("alice", session());

    let mut fresh = session();
    attack((0, 0), &mut fresh.board, &mut fresh.fleet);
    let previous = store.insert("alice", fresh).unwrap();
    assert_eq!(previous.fleet.remaining("Carrier"), Some(5));
    assert_eq!(
        store.get("alice").unwrap().fleet.remaining("Carrier"),
        Some(4)
    );
}

#[test]
fn test_engine_calls_mutate_through_get_mut() {
    let mut store = SessionStore::new();
    store.insert("bot", session());

    let bot = store.get_mut("bot").unwrap();
    assert_eq!(attack((0, 0), &mut bot.board, &mut bot.fleet), AttackOutcome::Hit);
    assert_eq!(store.get("bot").unwrap().fleet.remaining("Carrier"), Some(4));
}

#[test]
fn test_ids() {
    let mut store = SessionStore::new();
    store.insert("alice", session());
    store.insert("bot", session());
    let mut ids: Vec<_> = store.ids().collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["alice", "bot"]);
}
