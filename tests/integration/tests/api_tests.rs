//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let health: HealthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(health.status, "ok");
    assert!(!health.version.is_empty());
}

// ============================================================================
// Category Tests
// ============================================================================

#[tokio::test]
async fn test_create_category() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = server.create_test_user().await.unwrap();

    let request = CreateCategoryRequest::unique();
    let response = server
        .post_auth("/api/categories", &user.token, &request)
        .await
        .unwrap();
    let category: CategoryResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(category.name, request.name);
    assert_eq!(category.description, request.description);
    assert!(category.icon.is_none());
}

#[tokio::test]
async fn test_create_category_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = CreateCategoryRequest::unique();
    let response = server.post("/api/categories", &request).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_category_crud() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = server.create_test_user().await.unwrap();

    // Create
    let request = CreateCategoryRequest::unique();
    let response = server
        .post_auth("/api/categories", &user.token, &request)
        .await
        .unwrap();
    let created: CategoryResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Read (public)
    let response = server
        .get(&format!("/api/categories/{}", created.id))
        .await
        .unwrap();
    let fetched: CategoryResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.name, request.name);

    // List contains it
    let response = server.get("/api/categories").await.unwrap();
    let all: Vec<CategoryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(all.iter().any(|c| c.id == created.id));

    // Update
    let update = UpdateCategoryRequest {
        name: Some(format!("{} renamed", request.name)),
        ..Default::default()
    };
    let response = server
        .patch_auth(&format!("/api/categories/{}", created.id), &user.token, &update)
        .await
        .unwrap();
    let updated: CategoryResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.name, format!("{} renamed", request.name));

    // Delete
    let response = server
        .delete_auth(&format!("/api/categories/{}", created.id), &user.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // Verify deleted
    let response = server
        .get(&format!("/api/categories/{}", created.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_get_category_invalid_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/categories/not-a-number").await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Category Icon Lifecycle Tests
// ============================================================================

#[tokio::test]
async fn test_category_icon_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = server.create_test_user().await.unwrap();

    let request = CreateCategoryRequest::unique();
    let response = server
        .post_auth("/api/categories", &user.token, &request)
        .await
        .unwrap();
    let category: CategoryResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Upload icon
    let response = server
        .put_image_auth(
            &format!("/api/categories/{}/icon", category.id),
            &user.token,
            "first.png",
            tiny_png(),
        )
        .await
        .unwrap();
    let with_icon: CategoryResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let first_url = with_icon.icon.expect("icon should be set");
    let first_path = server.media_path(&first_url);
    assert!(first_path.exists(), "uploaded icon file should exist");

    // Replace icon: the superseded file must be removed
    let response = server
        .put_image_auth(
            &format!("/api/categories/{}/icon", category.id),
            &user.token,
            "second.png",
            tiny_png(),
        )
        .await
        .unwrap();
    let replaced: CategoryResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let second_url = replaced.icon.expect("icon should be set");
    assert_ne!(first_url, second_url);
    assert!(!first_path.exists(), "superseded icon file should be removed");
    let second_path = server.media_path(&second_url);
    assert!(second_path.exists());

    // Remove icon: file goes with it
    let response = server
        .delete_auth(&format!("/api/categories/{}/icon", category.id), &user.token)
        .await
        .unwrap();
    let cleared: CategoryResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(cleared.icon.is_none());
    assert!(!second_path.exists(), "removed icon file should be deleted");
}

#[tokio::test]
async fn test_category_icon_rejects_bad_extension() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = server.create_test_user().await.unwrap();

    let request = CreateCategoryRequest::unique();
    let response = server
        .post_auth("/api/categories", &user.token, &request)
        .await
        .unwrap();
    let category: CategoryResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .put_image_auth(
            &format!("/api/categories/{}/icon", category.id),
            &user.token,
            "icon.bmp",
            tiny_png(),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_category_delete_sweeps_server_images() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = server.create_test_user().await.unwrap();

    let category = create_category(&server, &user.token).await;
    let community = create_server(&server, &user.token, &category.id).await;

    // Give the server an icon so the cascade has a file to sweep
    let response = server
        .put_image_auth(
            &format!("/api/servers/{}/icon", community.id),
            &user.token,
            "icon.png",
            tiny_png(),
        )
        .await
        .unwrap();
    let with_icon: ServerResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let icon_path = server.media_path(&with_icon.icon.expect("icon should be set"));
    assert!(icon_path.exists());

    // Deleting the category cascades to the server and its files
    let response = server
        .delete_auth(&format!("/api/categories/{}", category.id), &user.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    assert!(!icon_path.exists(), "cascade should remove the server icon file");

    let response = server
        .get(&format!("/api/servers/{}", community.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Server Tests
// ============================================================================

#[tokio::test]
async fn test_create_server() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = server.create_test_user().await.unwrap();

    let category = create_category(&server, &user.token).await;

    let request = CreateServerRequest::unique(&category.id);
    let response = server
        .post_auth("/api/servers", &user.token, &request)
        .await
        .unwrap();
    let created: ServerResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.name, request.name);
    assert_eq!(created.owner_id, user.id);
    assert_eq!(created.category_id, category.id);
    // The owner joins their own server on creation
    assert!(created.members.contains(&user.id));
}

#[tokio::test]
async fn test_create_server_unknown_category() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = server.create_test_user().await.unwrap();

    let request = CreateServerRequest::unique("999999999999999999");
    let response = server
        .post_auth("/api/servers", &user.token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_update_server_requires_owner() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.create_test_user().await.unwrap();
    let intruder = server.create_test_user().await.unwrap();

    let category = create_category(&server, &owner.token).await;
    let community = create_server(&server, &owner.token, &category.id).await;

    let update = UpdateServerRequest {
        name: Some("Hijacked".to_string()),
        ..Default::default()
    };
    let response = server
        .patch_auth(&format!("/api/servers/{}", community.id), &intruder.token, &update)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // The owner can update
    let update = UpdateServerRequest {
        name: Some(format!("{} renamed", community.name)),
        ..Default::default()
    };
    let response = server
        .patch_auth(&format!("/api/servers/{}", community.id), &owner.token, &update)
        .await
        .unwrap();
    let updated: ServerResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.name, format!("{} renamed", community.name));
}

#[tokio::test]
async fn test_delete_server_removes_image_files() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = server.create_test_user().await.unwrap();

    let category = create_category(&server, &user.token).await;
    let community = create_server(&server, &user.token, &category.id).await;

    let response = server
        .put_image_auth(
            &format!("/api/servers/{}/banner", community.id),
            &user.token,
            "banner.jpg",
            tiny_png(),
        )
        .await
        .unwrap();
    let with_banner: ServerResponse = assert_json(response, StatusCode::OK).await.unwrap();
    let banner_path = server.media_path(&with_banner.banner.expect("banner should be set"));
    assert!(banner_path.exists());

    let response = server
        .delete_auth(&format!("/api/servers/{}", community.id), &user.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    assert!(!banner_path.exists(), "server delete should remove its files");

    let response = server
        .get(&format!("/api/servers/{}", community.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Membership Tests
// ============================================================================

#[tokio::test]
async fn test_join_and_leave_server() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.create_test_user().await.unwrap();
    let member = server.create_test_user().await.unwrap();

    let category = create_category(&server, &owner.token).await;
    let community = create_server(&server, &owner.token, &category.id).await;

    // Join
    let response = server
        .post_auth_empty(
            &format!("/api/servers/{}/members/@me", community.id),
            &member.token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/servers/{}", community.id))
        .await
        .unwrap();
    let fetched: ServerResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(fetched.members.contains(&member.id));

    // Joining twice conflicts
    let response = server
        .post_auth_empty(
            &format!("/api/servers/{}/members/@me", community.id),
            &member.token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();

    // Leave
    let response = server
        .delete_auth(
            &format!("/api/servers/{}/members/@me", community.id),
            &member.token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/servers/{}", community.id))
        .await
        .unwrap();
    let fetched: ServerResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!fetched.members.contains(&member.id));
}

#[tokio::test]
async fn test_owner_cannot_leave() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.create_test_user().await.unwrap();

    let category = create_category(&server, &owner.token).await;
    let community = create_server(&server, &owner.token, &category.id).await;

    let response = server
        .delete_auth(
            &format!("/api/servers/{}/members/@me", community.id),
            &owner.token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

// ============================================================================
// Channel Tests
// ============================================================================

#[tokio::test]
async fn test_create_channel_lowercases_name() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = server.create_test_user().await.unwrap();

    let category = create_category(&server, &user.token).await;
    let community = create_server(&server, &user.token, &category.id).await;

    let request = CreateChannelRequest {
        name: "General-Chat".to_string(),
        topic: Some("Anything goes".to_string()),
    };
    let response = server
        .post_auth(
            &format!("/api/servers/{}/channels", community.id),
            &user.token,
            &request,
        )
        .await
        .unwrap();
    let channel: ChannelResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(channel.name, "general-chat");
    assert_eq!(channel.topic, "Anything goes");
    assert_eq!(channel.server_id, community.id);
    assert_eq!(channel.owner_id, user.id);
}

#[tokio::test]
async fn test_create_channel_requires_membership() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.create_test_user().await.unwrap();
    let outsider = server.create_test_user().await.unwrap();

    let category = create_category(&server, &owner.token).await;
    let community = create_server(&server, &owner.token, &category.id).await;

    let request = CreateChannelRequest::unique();
    let response = server
        .post_auth(
            &format!("/api/servers/{}/channels", community.id),
            &outsider.token,
            &request,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_channel_crud() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = server.create_test_user().await.unwrap();

    let category = create_category(&server, &user.token).await;
    let community = create_server(&server, &user.token, &category.id).await;

    let request = CreateChannelRequest::unique();
    let response = server
        .post_auth(
            &format!("/api/servers/{}/channels", community.id),
            &user.token,
            &request,
        )
        .await
        .unwrap();
    let channel: ChannelResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Listed under the server
    let response = server
        .get(&format!("/api/servers/{}/channels", community.id))
        .await
        .unwrap();
    let channels: Vec<ChannelResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(channels.iter().any(|c| c.id == channel.id));

    // Update
    let update = UpdateChannelRequest {
        topic: Some("New topic".to_string()),
        ..Default::default()
    };
    let response = server
        .patch_auth(&format!("/api/channels/{}", channel.id), &user.token, &update)
        .await
        .unwrap();
    let updated: ChannelResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.topic, "New topic");

    // Delete
    let response = server
        .delete_auth(&format!("/api/channels/{}", channel.id), &user.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/channels/{}", channel.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Server Listing Tests
// ============================================================================

#[tokio::test]
async fn test_select_by_category() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = server.create_test_user().await.unwrap();

    let category = create_category(&server, &user.token).await;
    let a = create_server(&server, &user.token, &category.id).await;
    let b = create_server(&server, &user.token, &category.id).await;

    let response = server
        .get(&format!("/api/server/select?category={}", encode(&category.name)))
        .await
        .unwrap();
    let rows: Vec<ServerListItemResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().any(|r| r.id == a.id));
    assert!(rows.iter().any(|r| r.id == b.id));
    // Counts were not requested
    assert!(rows.iter().all(|r| r.num_members.is_none()));
}

#[tokio::test]
async fn test_select_with_quantity_limit() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = server.create_test_user().await.unwrap();

    let category = create_category(&server, &user.token).await;
    for _ in 0..3 {
        create_server(&server, &user.token, &category.id).await;
    }

    let response = server
        .get(&format!(
            "/api/server/select?category={}&quantity=2",
            encode(&category.name)
        ))
        .await
        .unwrap();
    let rows: Vec<ServerListItemResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(rows.len(), 2);
}

#[tokio::test]
async fn test_select_invalid_quantity() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get("/api/server/select?quantity=abc")
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(body.error.message, "Invalid quantity value");
}

#[tokio::test]
async fn test_select_invalid_server_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/server/select?server_id=abc").await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(body.error.message, "Invalid server id");
}

#[tokio::test]
async fn test_select_unknown_server_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .get("/api/server/select?server_id=999999999999999999")
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = response.json().await.unwrap();
    assert_eq!(
        body.error.message,
        "Server with id 999999999999999999 does not exist"
    );
}

#[tokio::test]
async fn test_select_by_server_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = server.create_test_user().await.unwrap();

    let category = create_category(&server, &user.token).await;
    let community = create_server(&server, &user.token, &category.id).await;

    let response = server
        .get(&format!("/api/server/select?server_id={}", community.id))
        .await
        .unwrap();
    let rows: Vec<ServerListItemResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, community.id);
}

#[tokio::test]
async fn test_select_existing_server_id_with_zero_quantity() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let user = server.create_test_user().await.unwrap();

    let category = create_category(&server, &user.token).await;
    let community = create_server(&server, &user.token, &category.id).await;

    // Zero quantity yields an empty page, not a missing-server error
    let response = server
        .get(&format!(
            "/api/server/select?server_id={}&quantity=0",
            community.id
        ))
        .await
        .unwrap();
    let rows: Vec<ServerListItemResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(rows.is_empty());

    let response = server
        .get(&format!(
            "/api/server/select?server_id={}&quantity=-2",
            community.id
        ))
        .await
        .unwrap();
    let rows: Vec<ServerListItemResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn test_select_with_member_counts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.create_test_user().await.unwrap();
    let member = server.create_test_user().await.unwrap();

    let category = create_category(&server, &owner.token).await;
    let community = create_server(&server, &owner.token, &category.id).await;

    server
        .post_auth_empty(
            &format!("/api/servers/{}/members/@me", community.id),
            &member.token,
        )
        .await
        .unwrap();

    let response = server
        .get(&format!(
            "/api/server/select?category={}&by_num_member=true",
            encode(&category.name)
        ))
        .await
        .unwrap();
    let rows: Vec<ServerListItemResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].num_members, Some(2));
    assert_eq!(rows[0].members.len(), 2);
}

#[tokio::test]
async fn test_select_by_user_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/server/select?by_user=true").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_select_by_user_filters_to_memberships() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let owner = server.create_test_user().await.unwrap();
    let joiner = server.create_test_user().await.unwrap();

    let category = create_category(&server, &owner.token).await;
    let joined = create_server(&server, &owner.token, &category.id).await;
    let other = create_server(&server, &owner.token, &category.id).await;

    server
        .post_auth_empty(
            &format!("/api/servers/{}/members/@me", joined.id),
            &joiner.token,
        )
        .await
        .unwrap();

    let response = server
        .get_auth(
            &format!(
                "/api/server/select?category={}&by_user=true",
                encode(&category.name)
            ),
            &joiner.token,
        )
        .await
        .unwrap();
    let rows: Vec<ServerListItemResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, joined.id);
    assert!(rows.iter().all(|r| r.id != other.id));
}

// ============================================================================
// Helpers
// ============================================================================

/// Percent-encode spaces for query strings; fixture names only contain
/// letters, digits, and spaces.
fn encode(value: &str) -> String {
    value.replace(' ', "%20")
}

async fn create_category(server: &TestServer, token: &str) -> CategoryResponse {
    let request = CreateCategoryRequest::unique();
    let response = server
        .post_auth("/api/categories", token, &request)
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

async fn create_server(server: &TestServer, token: &str, category_id: &str) -> ServerResponse {
    let request = CreateServerRequest::unique(category_id);
    let response = server
        .post_auth("/api/servers", token, &request)
        .await
        .unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}
