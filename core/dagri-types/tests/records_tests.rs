use chrono::Utc;
use dagri_types::{KnowledgeEntry, MarketListing, User, UserId};

fn sample_user() -> User {
    User {
        id: UserId::new(),
        username: "testuser".to_string(),
        email: "test@example.com".to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$secret".to_string(),
        user_type: "farmer".to_string(),
        location: "Bong County".to_string(),
        created_at: Utc::now(),
    }
}

#[test]
fn user_serialization_omits_password_hash() {
    let user = sample_user();
    let json = serde_json::to_value(&user).unwrap();
    assert!(json.get("password_hash").is_none());
    assert_eq!(json["username"], "testuser");
    assert_eq!(json["email"], "test@example.com");
    assert_eq!(json["user_type"], "farmer");
}

#[test]
fn user_created_at_is_rfc3339() {
    let user = sample_user();
    let json = serde_json::to_value(&user).unwrap();
    let ts = json["created_at"].as_str().unwrap();
    assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
}

#[test]
fn knowledge_entry_json_shape() {
    let author = UserId::new();
    let entry = KnowledgeEntry {
        id: dagri_types::EntryId::new(),
        title: "Cassava Processing".to_string(),
        content: "How to process cassava into flour".to_string(),
        language: "English".to_string(),
        crop_type: "Cassava".to_string(),
        season: "Rainy Season".to_string(),
        region: "Bong County".to_string(),
        author_id: author,
        author_username: "testuser".to_string(),
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["title"], "Cassava Processing");
    assert_eq!(json["author_username"], "testuser");
    assert_eq!(json["author_id"], author.to_string());
}

#[test]
fn market_listing_json_shape() {
    let listing = MarketListing {
        id: dagri_types::ListingId::new(),
        crop_name: "Rice".to_string(),
        quantity: 50.0,
        unit: "bags".to_string(),
        price_per_unit: 25.5,
        location: "Monrovia".to_string(),
        description: String::new(),
        farmer_id: UserId::new(),
        farmer_username: "ricefarmer".to_string(),
        is_available: true,
        created_at: Utc::now(),
    };
    let json = serde_json::to_value(&listing).unwrap();
    assert_eq!(json["crop_name"], "Rice");
    assert_eq!(json["quantity"], 50.0);
    assert_eq!(json["price_per_unit"], 25.5);
    assert_eq!(json["is_available"], true);
}
