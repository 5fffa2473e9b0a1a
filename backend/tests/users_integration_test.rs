//! Integration tests for user management

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_users_are_public() {
    let app = common::TestApp::new().await;
    let user = app.register_user().await;

    let (status, list) = app.get("/api/users").await;
    assert_eq!(status, StatusCode::OK);
    assert!(list["data"].as_array().unwrap().iter().any(|u| u["id"] == user.id));

    let (status, one) = app.get(&format!("/api/users/{}", user.id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(one["data"]["email"], user.email);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_missing_user_is_404() {
    let app = common::TestApp::new().await;
    let (status, response) = app.get("/api/users/2147483647").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response["message"], "User not found");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_create_user_requires_admin() {
    let app = common::TestApp::new().await;
    let user = app.register_user().await;
    let admin = app.create_admin().await;

    let suffix = &uuid::Uuid::new_v4().simple().to_string()[..12];
    let body = json!({
        "name": "Created By Admin",
        "username": format!("c{}", suffix),
        "email": format!("created_{}@example.com", suffix),
        "password": "secret1",
        "role": "ADMIN"
    });

    let (status, _) = app.post("/api/users", body.clone(), Some(&user.token)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, response) = app.post("/api/users", body, Some(&admin.token)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(response["data"]["role"], "ADMIN");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_user_self_or_admin() {
    let app = common::TestApp::new().await;
    let owner = app.register_user().await;
    let other = app.register_user().await;
    let admin = app.create_admin().await;
    let path = format!("/api/users/{}", owner.id);

    let (status, response) = app.put(&path, json!({ "name": "Other" }), &other.token).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(response["message"], "You can only update your own profile");

    let (status, response) = app.put(&path, json!({ "name": "Self" }), &owner.token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["data"]["name"], "Self");

    let (status, response) = app.put(&path, json!({ "role": "ADMIN" }), &admin.token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["data"]["role"], "ADMIN");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_missing_user_is_404_before_403() {
    let app = common::TestApp::new().await;
    let user = app.register_user().await;

    let (status, _) = app
        .put("/api/users/2147483647", json!({ "name": "x" }), &user.token)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_delete_user_rules() {
    let app = common::TestApp::new().await;
    let user = app.register_user().await;
    let victim = app.register_user().await;
    let admin = app.create_admin().await;

    let (status, _) = app
        .delete(&format!("/api/users/{}", victim.id), &user.token)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, response) = app
        .delete(&format!("/api/users/{}", admin.id), &admin.token)
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["message"], "You cannot delete your own account");

    let (status, response) = app
        .delete(&format!("/api/users/{}", victim.id), &admin.token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["message"], "User deleted successfully");

    let (status, _) = app
        .delete(&format!("/api/users/{}", victim.id), &admin.token)
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_deleting_user_cascades_to_owned_resources() {
    let app = common::TestApp::new().await;
    let user = app.register_user().await;
    let admin = app.create_admin().await;
    let post_id = app.create_post(&user).await;
    let album_id = app.create_album(&user).await;

    let (status, _) = app
        .delete(&format!("/api/users/{}", user.id), &admin.token)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.get(&format!("/api/posts/{}", post_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = app.get(&format!("/api/albums/{}", album_id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
