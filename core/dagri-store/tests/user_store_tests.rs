use dagri_store::{Database, StoreError, UserStore};
use dagri_types::{NewUser, UserId};

fn new_user(username: &str, email: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$stub".to_string(),
        user_type: "farmer".to_string(),
        location: "Monrovia".to_string(),
    }
}

#[test]
fn create_and_fetch_by_username() {
    let store = UserStore::new(Database::open_in_memory().unwrap());
    let created = store.create(new_user("testuser", "test@example.com")).unwrap();

    let fetched = store.find_by_username("testuser").unwrap().unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.email, "test@example.com");
    assert_eq!(fetched.user_type, "farmer");
    assert_eq!(fetched.password_hash, created.password_hash);
}

#[test]
fn fetch_by_email_and_id() {
    let store = UserStore::new(Database::open_in_memory().unwrap());
    let created = store.create(new_user("a", "a@example.com")).unwrap();

    assert!(store.find_by_email("a@example.com").unwrap().is_some());
    assert!(store.find_by_email("other@example.com").unwrap().is_none());
    assert_eq!(store.get(&created.id).unwrap().unwrap().username, "a");
    assert!(store.get(&UserId::new()).unwrap().is_none());
}

#[test]
fn duplicate_username_is_conflict() {
    let store = UserStore::new(Database::open_in_memory().unwrap());
    store.create(new_user("dup", "first@example.com")).unwrap();

    let err = store.create(new_user("dup", "second@example.com")).unwrap_err();
    assert!(matches!(err, StoreError::Conflict(_)), "got {err:?}");

    // No second record appeared under the other email.
    assert!(store.find_by_email("second@example.com").unwrap().is_none());
}

#[test]
fn duplicate_email_is_conflict() {
    let store = UserStore::new(Database::open_in_memory().unwrap());
    store.create(new_user("first", "dup@example.com")).unwrap();

    let err = store.create(new_user("second", "dup@example.com")).unwrap_err();
    assert!(matches!(err, StoreError::Conflict(_)));
    assert!(store.find_by_username("second").unwrap().is_none());
}

#[test]
fn open_on_disk_persists_across_handles() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dagri.db");
    let path = path.to_str().unwrap();

    {
        let store = UserStore::new(Database::open(path).unwrap());
        store.create(new_user("persisted", "p@example.com")).unwrap();
    }

    let store = UserStore::new(Database::open(path).unwrap());
    assert!(store.find_by_username("persisted").unwrap().is_some());
}

#[test]
fn health_check_on_open_database() {
    let db = Database::open_in_memory().unwrap();
    assert!(db.health_check().is_ok());
}
