use dagri_types::{EntryId, ListingId, UserId};
use std::str::FromStr;

#[test]
fn user_id_display_roundtrip() {
    let id = UserId::new();
    let s = id.to_string();
    let parsed = UserId::from_str(&s).unwrap();
    assert_eq!(parsed, id);
}

#[test]
fn user_id_serde_transparent() {
    let id = UserId::new();
    let json = serde_json::to_string(&id).unwrap();
    // Serializes as a bare JSON string, not a wrapper object.
    assert!(json.starts_with('"') && json.ends_with('"'));
    let parsed: UserId = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, id);
}

#[test]
fn ids_are_time_ordered() {
    // UUID v7 embeds a timestamp, so later ids sort after earlier ones.
    let first = EntryId::new();
    std::thread::sleep(std::time::Duration::from_millis(2));
    let second = EntryId::new();
    assert!(second.to_string() > first.to_string());
}

#[test]
fn invalid_id_string_rejected() {
    assert!(UserId::from_str("not-a-uuid").is_err());
    assert!(EntryId::from_str("").is_err());
    assert!(ListingId::from_str("12345").is_err());
}

#[test]
fn from_uuid_preserves_value() {
    let uuid = uuid::Uuid::now_v7();
    let id = ListingId::from_uuid(uuid);
    assert_eq!(id.as_uuid(), uuid);
}
