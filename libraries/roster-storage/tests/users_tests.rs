//! Integration tests for the SQLite user store
//!
//! Covers the store contract: create/read round trips, id-ordered listing,
//! the no-op semantics of update/delete on missing ids, and the distinct
//! not-found signal on lookups.


use roster_core::UserStore;
use roster_storage::{users, SqliteUserStore};
use test_helpers::*;

#[tokio::test]
async fn test_create_then_get_by_id_round_trips() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = sample_user(42, "Ada Lovelace", "ada@example.com");
    users::create(pool, &user).await.expect("Failed to create");

    let fetched = users::get_by_id(pool, 42)
        .await
        .expect("Query should succeed")
        .expect("User not found");

    assert_eq!(fetched, user);
}

#[tokio::test]
async fn test_get_all_returns_users_in_id_order() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    for (id, name) in [(30, "Carol"), (10, "Alice"), (20, "Bob")] {
        let user = sample_user(id, name, &format!("{}@example.com", name.to_lowercase()));
        users::create(pool, &user).await.expect("Failed to create");
    }

    let all = users::get_all(pool).await.expect("Failed to get users");

    assert_eq!(all.len(), 3);
    assert_eq!(
        all.iter().map(|u| u.id).collect::<Vec<_>>(),
        vec![10, 20, 30]
    );
    assert_eq!(all[0].name, "Alice");
}

#[tokio::test]
async fn test_get_by_id_missing_returns_none() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let result = users::get_by_id(pool, 9999)
        .await
        .expect("Query should succeed");

    assert!(result.is_none());
}

#[tokio::test]
async fn test_duplicate_id_insert_fails() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = sample_user(7, "First", "first@example.com");
    users::create(pool, &user).await.expect("Failed to create");

    let duplicate = sample_user(7, "Second", "second@example.com");
    let result = users::create(pool, &duplicate).await;

    assert!(result.is_err(), "Primary key violation should surface");
}

#[tokio::test]
async fn test_update_replaces_name_and_email_but_not_created_at() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = sample_user(1, "Before", "before@example.com");
    users::create(pool, &user).await.expect("Failed to create");

    let mut changed = user.clone();
    changed.name = "After".to_string();
    changed.email = "after@example.com".to_string();
    users::update(pool, &changed).await.expect("Failed to update");

    let fetched = users::get_by_id(pool, 1)
        .await
        .expect("Query should succeed")
        .expect("User not found");

    assert_eq!(fetched.name, "After");
    assert_eq!(fetched.email, "after@example.com");
    assert_eq!(fetched.created_at, user.created_at);
}

#[tokio::test]
async fn test_update_missing_id_is_a_noop() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let existing = sample_user(1, "Kept", "kept@example.com");
    users::create(pool, &existing).await.expect("Failed to create");

    let ghost = sample_user(404, "Ghost", "ghost@example.com");
    users::update(pool, &ghost).await.expect("Update should not error");

    let all = users::get_all(pool).await.expect("Failed to get users");
    assert_eq!(all, vec![existing]);
}

#[tokio::test]
async fn test_delete_missing_id_is_a_noop() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let existing = sample_user(1, "Kept", "kept@example.com");
    users::create(pool, &existing).await.expect("Failed to create");

    users::delete(pool, 404).await.expect("Delete should not error");

    let all = users::get_all(pool).await.expect("Failed to get users");
    assert_eq!(all, vec![existing]);
}

#[tokio::test]
async fn test_delete_then_get_by_id_yields_not_found() {
    let test_db = TestDb::new().await;
    let pool = test_db.pool();

    let user = sample_user(5, "Gone Soon", "gone@example.com");
    users::create(pool, &user).await.expect("Failed to create");

    users::delete(pool, 5).await.expect("Failed to delete");

    let result = users::get_by_id(pool, 5)
        .await
        .expect("Query should succeed");
    assert!(result.is_none());
}

#[tokio::test]
async fn test_store_trait_maps_missing_user_to_not_found() {
    let test_db = TestDb::new().await;
    let store = SqliteUserStore::new(test_db.pool().clone());

    let err = store
        .get_by_id(9999)
        .await
        .expect_err("Missing user should be an error");

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_store_trait_round_trip() {
    let test_db = TestDb::new().await;
    let store = SqliteUserStore::new(test_db.pool().clone());

    let user = sample_user(11, "Grace Hopper", "grace@example.com");
    store.create(&user).await.expect("Failed to create");

    let fetched = store.get_by_id(11).await.expect("User should exist");
    assert_eq!(fetched, user);

    store.delete(11).await.expect("Failed to delete");
    let err = store
        .get_by_id(11)
        .await
        .expect_err("Deleted user should be gone");
    assert!(err.is_not_found());
}
