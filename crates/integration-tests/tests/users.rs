//! Integration tests for user CRUD.
//!
//! Requires a `PostgreSQL` database at `TEST_DATABASE_URL`.
//! Run with: cargo test -p pemplat-integration-tests -- --ignored

use pemplat_integration_tests::{TestContext, unique_username};
use reqwest::StatusCode;
use serde_json::{Value, json};

#[tokio::test]
#[ignore = "Requires PostgreSQL at TEST_DATABASE_URL"]
async fn test_user_lifecycle() {
    let ctx = TestContext::new().await;
    let username = unique_username("crud");
    let user_id = ctx.create_user(&username, "correct horse battery").await;

    // Fetch
    let resp = ctx.get(&format!("/users/{user_id}")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let user: Value = resp.json().await.expect("Invalid JSON");
    assert_eq!(user["user_id"], user_id);
    assert_eq!(user["username"], username.as_str());
    assert_eq!(user["email"], format!("{username}@example.com"));
    assert!(user["registration_date"].is_string());
    assert!(user.get("password_hash").is_none());

    // Listed
    let resp = ctx.get("/users").await;
    assert_eq!(resp.status(), StatusCode::OK);
    let users: Vec<Value> = resp.json().await.expect("Invalid JSON");
    assert!(users.iter().any(|u| u["user_id"] == user_id));
    assert!(users.iter().all(|u| u.get("password_hash").is_none()));

    // Rename
    let renamed = unique_username("renamed");
    let resp = ctx
        .put_json(&format!("/users/{user_id}"), &json!({"username": renamed}))
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let user: Value = resp.json().await.expect("Invalid JSON");
    assert_eq!(user["username"], renamed.as_str());

    // The old name no longer logs in, the new one does
    let resp = ctx
        .post_json(
            "/login",
            &json!({"username": username, "password": "correct horse battery"}),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = ctx
        .post_json(
            "/login",
            &json!({"username": renamed, "password": "correct horse battery"}),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Delete
    let resp = ctx.delete(&format!("/users/{user_id}")).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = ctx.get(&format!("/users/{user_id}")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Deleting twice reports the row as missing
    let resp = ctx.delete(&format!("/users/{user_id}")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires PostgreSQL at TEST_DATABASE_URL"]
async fn test_missing_user_is_not_found() {
    let ctx = TestContext::new().await;
    let id = TestContext::missing_id();

    assert_eq!(ctx.get(&format!("/users/{id}")).await.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        ctx.delete(&format!("/users/{id}")).await.status(),
        StatusCode::NOT_FOUND
    );

    let resp = ctx
        .put_json(
            &format!("/users/{id}"),
            &json!({"username": unique_username("nobody")}),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("Invalid JSON");
    assert_eq!(body["success"], false);
}

#[tokio::test]
#[ignore = "Requires PostgreSQL at TEST_DATABASE_URL"]
async fn test_duplicate_username_conflicts() {
    let ctx = TestContext::new().await;
    let username = unique_username("dup");
    ctx.create_user(&username, "correct horse battery").await;

    let resp = ctx
        .post_json(
            "/users",
            &json!({
                "username": username,
                "email": "other@example.com",
                "password": "another password",
            }),
        )
        .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "Requires PostgreSQL at TEST_DATABASE_URL"]
async fn test_concurrent_duplicate_creation() {
    let ctx = TestContext::new().await;
    let username = unique_username("race");
    let body = json!({
        "username": username,
        "email": "race@example.com",
        "password": "correct horse battery",
    });

    let (first, second) = tokio::join!(
        ctx.post_json("/users", &body),
        ctx.post_json("/users", &body)
    );

    let mut statuses = [first.status(), second.status()];
    statuses.sort();
    assert_eq!(statuses, [StatusCode::CREATED, StatusCode::CONFLICT]);
}

#[tokio::test]
#[ignore = "Requires PostgreSQL at TEST_DATABASE_URL"]
async fn test_rename_to_taken_username_conflicts() {
    let ctx = TestContext::new().await;
    let taken = unique_username("taken");
    ctx.create_user(&taken, "correct horse battery").await;
    let user_id = ctx
        .create_user(&unique_username("mover"), "correct horse battery")
        .await;

    let resp = ctx
        .put_json(&format!("/users/{user_id}"), &json!({"username": taken}))
        .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}
