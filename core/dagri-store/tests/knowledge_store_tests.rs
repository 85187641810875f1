use dagri_store::{Database, KnowledgeStore, StoreError, UserStore};
use dagri_types::{EntryId, NewKnowledgeEntry, NewUser, User, UserId};

fn setup() -> (KnowledgeStore, User) {
    let db = Database::open_in_memory().unwrap();
    let users = UserStore::new(db.clone());
    let author = users
        .create(NewUser {
            username: "author".to_string(),
            email: "author@example.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            user_type: "farmer".to_string(),
            location: String::new(),
        })
        .unwrap();
    (KnowledgeStore::new(db), author)
}

fn new_entry(title: &str, author_id: UserId) -> NewKnowledgeEntry {
    NewKnowledgeEntry {
        title: title.to_string(),
        content: "content".to_string(),
        language: NewKnowledgeEntry::DEFAULT_LANGUAGE.to_string(),
        crop_type: "Cassava".to_string(),
        season: "Rainy Season".to_string(),
        region: "Bong County".to_string(),
        author_id,
    }
}

#[test]
fn create_denormalizes_author_username() {
    let (store, author) = setup();
    let entry = store.create(new_entry("Cassava Processing", author.id)).unwrap();

    assert_eq!(entry.title, "Cassava Processing");
    assert_eq!(entry.author_id, author.id);
    assert_eq!(entry.author_username, "author");
    assert_eq!(entry.language, "English");
}

#[test]
fn dangling_author_is_conflict() {
    let (store, _author) = setup();
    let err = store.create(new_entry("Orphan", UserId::new())).unwrap_err();
    assert!(matches!(err, StoreError::Conflict(_)), "got {err:?}");
}

#[test]
fn list_returns_newest_first() {
    let (store, author) = setup();
    for title in ["first", "second", "third"] {
        store.create(new_entry(title, author.id)).unwrap();
        // Distinct creation timestamps at microsecond precision.
        std::thread::sleep(std::time::Duration::from_millis(2));
    }

    let entries = store.list().unwrap();
    let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, ["third", "second", "first"]);

    // Strictly descending creation order.
    for pair in entries.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}

#[test]
fn get_by_id_and_missing_id() {
    let (store, author) = setup();
    let created = store.create(new_entry("findable", author.id)).unwrap();

    let fetched = store.get(&created.id).unwrap().unwrap();
    assert_eq!(fetched.title, "findable");
    assert!(store.get(&EntryId::new()).unwrap().is_none());
}

#[test]
fn list_is_empty_on_fresh_database() {
    let (store, _author) = setup();
    assert!(store.list().unwrap().is_empty());
}
