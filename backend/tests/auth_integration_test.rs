//! Integration tests for authentication endpoints

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_returns_user_and_token() {
    let app = common::TestApp::new().await;

    let suffix = &uuid::Uuid::new_v4().simple().to_string()[..12];
    let body = json!({
        "name": "Register Test",
        "username": format!("reg{}", suffix),
        "email": format!("register_{}@example.com", suffix),
        "password": "secret1",
        "address": {
            "street": "Kulas Light",
            "suite": "Apt. 556",
            "city": "Gwenborough",
            "zipcode": "92998-3874",
            "geo": { "lat": "-37.3159", "lng": "81.1496" }
        },
        "company": {
            "name": "Romaguera-Crona",
            "catchPhrase": "Multi-layered client-server neural-net",
            "bs": "harness real-time e-markets"
        }
    });

    let (status, response) = app.post("/api/auth/register", body, None).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(response["success"], true);
    assert_eq!(response["data"]["user"]["role"], "USER");
    assert_eq!(response["data"]["user"]["address"]["geo"]["lat"], "-37.3159");
    assert_eq!(response["data"]["user"]["company"]["catchPhrase"], "Multi-layered client-server neural-net");
    assert!(response["data"]["user"].get("password").is_none());
    assert!(response["data"]["user"].get("passwordHash").is_none());
    assert!(!response["data"]["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_duplicate_email_or_username() {
    let app = common::TestApp::new().await;
    let existing = app.register_user().await;

    let body = json!({
        "name": "Duplicate",
        "username": format!("dup{}", existing.id),
        "email": existing.email,
        "password": "secret1"
    });

    let (status, response) = app.post("/api/auth/register", body, None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(response["error"], "CONFLICT");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_invalid_body() {
    let app = common::TestApp::new().await;

    let body = json!({
        "name": "Bad",
        "username": "no spaces allowed",
        "email": "not-an-email",
        "password": "123"
    });

    let (status, response) = app.post("/api/auth/register", body, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"], "VALIDATION_ERROR");
    assert!(response["details"].as_array().unwrap().len() >= 3);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_success_and_profile() {
    let app = common::TestApp::new().await;
    let user = app.register_user().await;

    let (status, response) = app
        .post(
            "/api/auth/login",
            json!({ "email": user.email, "password": common::TEST_PASSWORD }),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    let token = response["data"]["token"].as_str().unwrap().to_string();

    let (status, profile) = app.get_as("/api/auth/profile", &token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(profile["data"]["id"], user.id);
    assert_eq!(profile["data"]["email"], user.email);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_wrong_password_and_unknown_email_look_the_same() {
    let app = common::TestApp::new().await;
    let user = app.register_user().await;

    let (wrong_status, wrong) = app
        .post(
            "/api/auth/login",
            json!({ "email": user.email, "password": "wrong-password" }),
            None,
        )
        .await;
    let (unknown_status, unknown) = app
        .post(
            "/api/auth/login",
            json!({ "email": "nobody@example.com", "password": "whatever" }),
            None,
        )
        .await;

    assert_eq!(wrong_status, StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_status, StatusCode::UNAUTHORIZED);
    assert_eq!(wrong["message"], unknown["message"]);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_update_profile_changes_password() {
    let app = common::TestApp::new().await;
    let user = app.register_user().await;

    let (status, _) = app
        .put(
            "/api/auth/profile",
            json!({ "password": "new-password" }),
            &user.token,
        )
        .await;
    assert_eq!(status, StatusCode::OK);

    let (old, _) = app
        .post(
            "/api/auth/login",
            json!({ "email": user.email, "password": common::TEST_PASSWORD }),
            None,
        )
        .await;
    let (new, _) = app
        .post(
            "/api/auth/login",
            json!({ "email": user.email, "password": "new-password" }),
            None,
        )
        .await;

    assert_eq!(old, StatusCode::UNAUTHORIZED);
    assert_eq!(new, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_profile_cannot_escalate_role() {
    let app = common::TestApp::new().await;
    let user = app.register_user().await;

    let (status, response) = app
        .put("/api/auth/profile", json!({ "role": "ADMIN" }), &user.token)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(response["error"], "FORBIDDEN");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_deleted_user_token_is_revoked() {
    let app = common::TestApp::new().await;
    let admin = app.create_admin().await;
    let user = app.register_user().await;

    let (status, _) = app.get_as("/api/auth/profile", &user.token).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app
        .delete(&format!("/api/users/{}", user.id), &admin.token)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, response) = app.get_as("/api/auth/profile", &user.token).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(response["message"], "Invalid token. User not found.");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_rejects_password_past_bcrypt_limit() {
    let app = common::TestApp::new().await;

    let suffix = &uuid::Uuid::new_v4().simple().to_string()[..12];
    let body = json!({
        "name": "Long Password",
        "username": format!("long{}", suffix),
        "email": format!("long_{}@example.com", suffix),
        "password": format!("{}correct-tail", "a".repeat(72))
    });

    let (status, response) = app.post("/api/auth/register", body, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["details"][0]["field"], "password");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_with_overlong_password_is_rejected_not_failed() {
    let app = common::TestApp::new().await;
    let user = app.register_user().await;
    let long = "a".repeat(100);

    for email in [user.email.as_str(), "nobody@example.com"] {
        let (status, response) = app
            .post(
                "/api/auth/login",
                json!({ "email": email, "password": long }),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{}", email);
        assert_eq!(response["message"], "Invalid email or password");
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_admin_create_user_lists_each_bad_field() {
    let app = common::TestApp::new().await;
    let admin = app.create_admin().await;

    let body = json!({
        "name": "Bad Fields",
        "username": "badfields",
        "email": "not-an-email",
        "password": "123",
        "role": "USER"
    });

    let (status, response) = app.post("/api/users", body, Some(&admin.token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let fields: Vec<&str> = response["details"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["email", "password"]);
}
