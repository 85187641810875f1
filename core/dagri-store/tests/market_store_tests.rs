use dagri_store::{Database, MarketStore, StoreError, UserStore};
use dagri_types::{ListingId, NewMarketListing, NewUser, User, UserId};

fn setup() -> (MarketStore, User) {
    let db = Database::open_in_memory().unwrap();
    let users = UserStore::new(db.clone());
    let farmer = users
        .create(NewUser {
            username: "ricefarmer".to_string(),
            email: "rice@example.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            user_type: "farmer".to_string(),
            location: "Monrovia".to_string(),
        })
        .unwrap();
    (MarketStore::new(db), farmer)
}

fn new_listing(crop: &str, farmer_id: UserId) -> NewMarketListing {
    NewMarketListing {
        crop_name: crop.to_string(),
        quantity: 50.0,
        unit: "bags".to_string(),
        price_per_unit: 25.5,
        location: "Monrovia".to_string(),
        description: String::new(),
        farmer_id,
    }
}

#[test]
fn create_defaults_to_available() {
    let (store, farmer) = setup();
    let listing = store.create(new_listing("Rice", farmer.id)).unwrap();

    assert!(listing.is_available);
    assert_eq!(listing.farmer_username, "ricefarmer");
    assert_eq!(listing.quantity, 50.0);
    assert_eq!(listing.price_per_unit, 25.5);
}

#[test]
fn dangling_farmer_is_conflict() {
    let (store, _farmer) = setup();
    let err = store.create(new_listing("Orphan", UserId::new())).unwrap_err();
    assert!(matches!(err, StoreError::Conflict(_)));
}

#[test]
fn list_available_filters_out_unavailable() {
    let (store, farmer) = setup();
    let kept = store.create(new_listing("Rice", farmer.id)).unwrap();
    let sold = store.create(new_listing("Cassava", farmer.id)).unwrap();

    store.set_availability(&sold.id, false).unwrap();

    let listings = store.list_available().unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0].id, kept.id);
    assert!(listings.iter().all(|l| l.is_available));
}

#[test]
fn set_availability_on_missing_listing_is_not_found() {
    let (store, _farmer) = setup();
    let err = store.set_availability(&ListingId::new(), false).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(_)));
}

#[test]
fn relisting_restores_visibility() {
    let (store, farmer) = setup();
    let listing = store.create(new_listing("Peppers", farmer.id)).unwrap();

    store.set_availability(&listing.id, false).unwrap();
    assert!(store.list_available().unwrap().is_empty());

    store.set_availability(&listing.id, true).unwrap();
    assert_eq!(store.list_available().unwrap().len(), 1);
}
