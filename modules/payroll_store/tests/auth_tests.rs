//! Authentication against the users table

use payroll_store::contract::*;
use payroll_store::domain::credentials::{DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};

mod common;
use common::fresh_store;

#[tokio::test]
async fn test_seed_admin_authenticates() {
    let store = fresh_store().await;

    let user = store
        .authenticator()
        .authenticate(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)
        .await
        .unwrap()
        .expect("seed admin should authenticate");
    assert_eq!(user.id, 1);
    assert!(user.is_admin());
}

#[tokio::test]
async fn test_wrong_password_is_refused() {
    let store = fresh_store().await;

    let result = store
        .authenticator()
        .authenticate("admin", "admin1234")
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_unknown_user_is_refused() {
    let store = fresh_store().await;

    let result = store
        .authenticator()
        .authenticate("mallory", "admin123")
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_registered_user_authenticates() {
    let store = fresh_store().await;
    let auth = store.authenticator();

    let registered = auth.register("  hr.lead ", "Tr0ub4dor&3", "hr").await.unwrap();
    assert_eq!(registered.username, "hr.lead");
    assert_eq!(registered.role, "HR");
    assert!(!registered.is_admin());

    let user = auth
        .authenticate("hr.lead", "Tr0ub4dor&3")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(user, registered);
    assert!(auth.authenticate("hr.lead", "tr0ub4dor&3").await.unwrap().is_none());
}

#[tokio::test]
async fn test_register_duplicate_username_fails() {
    let store = fresh_store().await;
    let auth = store.authenticator();

    auth.register("clerk", "one", "CLERK").await.unwrap();
    let err = auth.register("clerk", "two", "CLERK").await.unwrap_err();
    assert!(err.is_unique_violation(), "got {err:?}");
}

#[tokio::test]
async fn test_register_requires_username_and_role() {
    let store = fresh_store().await;
    let auth = store.authenticator();

    assert!(matches!(
        auth.register("   ", "pw", "CLERK").await,
        Err(StoreError::Validation(_))
    ));
    assert!(matches!(
        auth.register("clerk", "pw", "").await,
        Err(StoreError::Validation(_))
    ));
}
