//! Integration tests for resource CRUD and ownership rules

mod common;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
#[ignore = "requires database"]
async fn test_post_lifecycle_for_owner() {
    let app = common::TestApp::new().await;
    let user = app.register_user().await;
    let post_id = app.create_post(&user).await;
    let path = format!("/api/posts/{}", post_id);

    let (status, post) = app.get(&path).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(post["data"]["userId"], user.id);
    assert_eq!(post["data"]["user"]["id"], user.id);
    assert!(post["data"]["comments"].as_array().unwrap().is_empty());

    let (status, updated) = app
        .put(&path, json!({ "title": "Edited" }), &user.token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["title"], "Edited");
    assert_eq!(updated["data"]["body"], "A body");

    let (status, deleted) = app.delete(&path, &user.token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["message"], "Post deleted successfully");

    let (status, _) = app.get(&path).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_post_user_filter() {
    let app = common::TestApp::new().await;
    let user = app.register_user().await;
    app.create_post(&user).await;
    app.create_post(&user).await;

    let (status, list) = app.get(&format!("/api/posts?userId={}", user.id)).await;
    assert_eq!(status, StatusCode::OK);
    let posts = list["data"].as_array().unwrap();
    assert_eq!(posts.len(), 2);
    assert!(posts.iter().all(|p| p["userId"] == user.id));
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_stranger_cannot_modify_post() {
    let app = common::TestApp::new().await;
    let owner = app.register_user().await;
    let stranger = app.register_user().await;
    let post_id = app.create_post(&owner).await;
    let path = format!("/api/posts/{}", post_id);

    let (status, response) = app
        .put(&path, json!({ "title": "Hijacked" }), &stranger.token)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(response["message"], "Unauthorized to update this post");

    let (status, _) = app.delete(&path, &stranger.token).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (_, post) = app.get(&path).await;
    assert_eq!(post["data"]["title"], "A title");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_admin_overrides_ownership() {
    let app = common::TestApp::new().await;
    let owner = app.register_user().await;
    let admin = app.create_admin().await;
    let post_id = app.create_post(&owner).await;
    let path = format!("/api/posts/{}", post_id);

    let (status, _) = app
        .put(&path, json!({ "body": "Moderated" }), &admin.token)
        .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.delete(&path, &admin.token).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_missing_resource_is_404_not_403() {
    let app = common::TestApp::new().await;
    let user = app.register_user().await;

    for path in [
        "/api/posts/2147483647",
        "/api/comments/2147483647",
        "/api/albums/2147483647",
        "/api/photos/2147483647",
        "/api/todos/2147483647",
    ] {
        let (status, _) = app.put(path, json!({ "title": "x" }), &user.token).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "PUT {}", path);
        let (status, _) = app.delete(path, &user.token).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "DELETE {}", path);
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_comments_public_create_admin_moderation() {
    let app = common::TestApp::new().await;
    let author = app.register_user().await;
    let admin = app.create_admin().await;
    let post_id = app.create_post(&author).await;

    let (status, created) = app
        .post(
            "/api/comments",
            json!({
                "name": "Visitor",
                "email": "visitor@example.com",
                "body": "Nice post",
                "postId": post_id
            }),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["post"]["id"], post_id);
    let path = format!("/api/comments/{}", created["data"]["id"]);

    // Even the post author cannot edit someone's comment
    let (status, _) = app
        .put(&path, json!({ "body": "Edited" }), &author.token)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = app.put(&path, json!({ "body": "Edited" }), &admin.token).await;
    assert_eq!(status, StatusCode::OK);

    let (status, comments) = app.get(&format!("/api/posts/{}/comments", post_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(comments["data"].as_array().unwrap().len(), 1);

    let (status, _) = app.delete(&path, &admin.token).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_comment_on_missing_post() {
    let app = common::TestApp::new().await;

    let (status, response) = app
        .post(
            "/api/comments",
            json!({
                "name": "Visitor",
                "email": "visitor@example.com",
                "body": "Hello",
                "postId": 2147483647
            }),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(response["message"], "Post not found");
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_photo_ownership_follows_album() {
    let app = common::TestApp::new().await;
    let owner = app.register_user().await;
    let stranger = app.register_user().await;
    let album_id = app.create_album(&owner).await;

    let (status, created) = app
        .post(
            "/api/photos",
            json!({
                "title": "Sunset",
                "url": "https://via.placeholder.com/600/92c952",
                "thumbnailUrl": "https://via.placeholder.com/150/92c952",
                "albumId": album_id
            }),
            Some(&stranger.token),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["album"]["user"]["id"], owner.id);
    let path = format!("/api/photos/{}", created["data"]["id"]);

    // The uploader does not own the photo; the album owner does
    let (status, _) = app
        .put(&path, json!({ "title": "Mine" }), &stranger.token)
        .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, updated) = app
        .put(&path, json!({ "title": "Renamed" }), &owner.token)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["title"], "Renamed");

    let (status, album) = app.get(&format!("/api/albums/{}", album_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(album["data"]["photos"].as_array().unwrap().len(), 1);

    let (status, _) = app.delete(&path, &owner.token).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_photo_requires_authentication() {
    let app = common::TestApp::new().await;
    let owner = app.register_user().await;
    let album_id = app.create_album(&owner).await;

    let (status, _) = app
        .post(
            "/api/photos",
            json!({
                "title": "Sunset",
                "url": "https://via.placeholder.com/600/92c952",
                "thumbnailUrl": "https://via.placeholder.com/150/92c952",
                "albumId": album_id
            }),
            None,
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_todo_toggle_and_ownership() {
    let app = common::TestApp::new().await;
    let owner = app.register_user().await;
    let stranger = app.register_user().await;

    let (status, created) = app
        .post("/api/todos", json!({ "title": "Buy milk" }), Some(&owner.token))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["completed"], false);
    let id = created["data"]["id"].as_i64().unwrap();
    let toggle = format!("/api/todos/{}/toggle", id);

    let (status, toggled) = app.patch(&toggle, &owner.token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(toggled["data"]["completed"], true);
    assert_eq!(toggled["message"], "Todo status updated successfully");

    let (status, _) = app.patch(&toggle, &stranger.token).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, toggled) = app.patch(&toggle, &owner.token).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(toggled["data"]["completed"], false);
}
