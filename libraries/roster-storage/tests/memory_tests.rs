//! Integration tests for the in-memory fallback store
//!
//! The fallback must honor the same contract as the durable store:
//! insertion-order listing, not-found on missing lookups, and silent
//! no-ops for update/delete on absent ids.


use roster_core::UserStore;
use roster_storage::MemoryUserStore;
use test_helpers::sample_user;

#[tokio::test]
async fn test_with_samples_seeds_two_users_in_insertion_order() {
    let store = MemoryUserStore::with_samples();

    let users = store.get_all().await.expect("Failed to get users");

    assert_eq!(users.len(), 2);
    assert_eq!(users[0].id, 1);
    assert_eq!(users[0].name, "John Doe");
    assert_eq!(users[0].email, "john@example.com");
    assert_eq!(users[1].id, 2);
    assert_eq!(users[1].name, "Jane Smith");
    assert_eq!(users[1].email, "jane@example.com");
}

#[tokio::test]
async fn test_create_appends_in_insertion_order() {
    let store = MemoryUserStore::new();

    store
        .create(&sample_user(50, "First", "first@example.com"))
        .await
        .expect("Failed to create");
    store
        .create(&sample_user(3, "Second", "second@example.com"))
        .await
        .expect("Failed to create");

    let users = store.get_all().await.expect("Failed to get users");
    assert_eq!(users.iter().map(|u| u.id).collect::<Vec<_>>(), vec![50, 3]);
}

#[tokio::test]
async fn test_get_by_id_finds_seeded_user() {
    let store = MemoryUserStore::with_samples();

    let user = store.get_by_id(2).await.expect("User should exist");
    assert_eq!(user.name, "Jane Smith");
}

#[tokio::test]
async fn test_get_by_id_missing_yields_not_found() {
    let store = MemoryUserStore::with_samples();

    let err = store
        .get_by_id(9999)
        .await
        .expect_err("Missing user should be an error");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_update_replaces_matching_user() {
    let store = MemoryUserStore::with_samples();

    let mut user = store.get_by_id(1).await.expect("User should exist");
    user.name = "John Updated".to_string();
    store.update(&user).await.expect("Failed to update");

    let fetched = store.get_by_id(1).await.expect("User should exist");
    assert_eq!(fetched.name, "John Updated");

    // Order unchanged by update
    let users = store.get_all().await.expect("Failed to get users");
    assert_eq!(users.iter().map(|u| u.id).collect::<Vec<_>>(), vec![1, 2]);
}

#[tokio::test]
async fn test_update_missing_id_is_a_noop() {
    let store = MemoryUserStore::with_samples();

    let ghost = sample_user(404, "Ghost", "ghost@example.com");
    store.update(&ghost).await.expect("Update should not error");

    let users = store.get_all().await.expect("Failed to get users");
    assert_eq!(users.len(), 2);
    assert!(users.iter().all(|u| u.id != 404));
}

#[tokio::test]
async fn test_delete_missing_id_is_a_noop() {
    let store = MemoryUserStore::with_samples();

    store.delete(404).await.expect("Delete should not error");

    let users = store.get_all().await.expect("Failed to get users");
    assert_eq!(users.len(), 2);
}

#[tokio::test]
async fn test_delete_then_get_by_id_yields_not_found() {
    let store = MemoryUserStore::with_samples();

    store.delete(1).await.expect("Failed to delete");

    let err = store
        .get_by_id(1)
        .await
        .expect_err("Deleted user should be gone");
    assert!(err.is_not_found());

    let users = store.get_all().await.expect("Failed to get users");
    assert_eq!(users.iter().map(|u| u.id).collect::<Vec<_>>(), vec![2]);
}
