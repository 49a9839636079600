mod helpers;

use clientele::domain::models::Customer;
use clientele::domain::ports::CustomerStore;
use clientele::SqliteCustomerStore;

use helpers::database::{setup_test_db, teardown_test_db};

fn full_customer() -> Customer {
    let mut c = Customer::new("ALFKI", "Alfreds Futterkiste");
    c.contact_name = Some("Maria Anders".to_string());
    c.contact_title = Some("Sales Representative".to_string());
    c.address = Some("Obere Str. 57".to_string());
    c.city = Some("Berlin".to_string());
    c.postal_code = Some("12209".to_string());
    c.country = Some("Germany".to_string());
    c.phone = Some("030-0074321".to_string());
    c.fax = Some("030-0076545".to_string());
    c
}

#[tokio::test]
async fn test_round_trips_every_field() {
    let pool = setup_test_db().await;
    let store = SqliteCustomerStore::new(pool.clone());

    let customer = full_customer();
    assert_eq!(store.add(&customer).await.unwrap(), 1);

    let found = store.find("ALFKI").await.unwrap().unwrap();
    assert_eq!(found, customer);

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn test_update_persists_changed_fields() {
    let pool = setup_test_db().await;
    let store = SqliteCustomerStore::new(pool.clone());

    let mut customer = full_customer();
    store.add(&customer).await.unwrap();

    customer.city = Some("Munich".to_string());
    customer.phone = None;
    customer.touch();
    assert_eq!(store.update(&customer).await.unwrap(), 1);

    let found = store.find("ALFKI").await.unwrap().unwrap();
    assert_eq!(found.city.as_deref(), Some("Munich"));
    assert!(found.phone.is_none());

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn test_affected_row_protocol() {
    let pool = setup_test_db().await;
    let store = SqliteCustomerStore::new(pool.clone());

    let customer = full_customer();

    // Insert of a fresh row: 1. Duplicate insert: 0, original untouched.
    assert_eq!(store.add(&customer).await.unwrap(), 1);
    assert_eq!(store.add(&customer).await.unwrap(), 0);

    // Update of a missing row: 0.
    let ghost = Customer::new("GHOST", "Ghost Co");
    assert_eq!(store.update(&ghost).await.unwrap(), 0);

    // Remove: 1 the first time, 0 after.
    assert_eq!(store.remove("ALFKI").await.unwrap(), 1);
    assert_eq!(store.remove("ALFKI").await.unwrap(), 0);

    teardown_test_db(pool).await;
}

#[tokio::test]
async fn test_all_returns_every_row() {
    let pool = setup_test_db().await;
    let store = SqliteCustomerStore::new(pool.clone());

    for (id, company) in [
        ("AROUT", "Around the Horn"),
        ("BERGS", "Berglunds snabbkop"),
        ("BONAP", "Bon app'"),
    ] {
        store.add(&Customer::new(id, company)).await.unwrap();
    }

    let mut ids: Vec<String> = store
        .all()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.id)
        .collect();
    ids.sort();
    assert_eq!(ids, ["AROUT", "BERGS", "BONAP"]);

    teardown_test_db(pool).await;
}
