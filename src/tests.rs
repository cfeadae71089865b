//! Integration tests for the NavHub backend.
//!
//! Each test boots the real server on a random port against a fresh
//! temporary database and talks to it over HTTP with reqwest.

use std::sync::Arc;

use once_cell::sync::Lazy;
use reqwest::Client;
use serde_json::{json, Value};
use tempfile::TempDir;

use crate::config::Config;
use crate::db::{init_database, Repository};
use crate::{create_router, ensure_initial_admin, AppState};

const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "test-admin-password";
const TEST_APP_NAME: &str = "NavHub Test";

static TRACING: Lazy<()> = Lazy::new(|| {
    tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .init();
});

/// Test fixture for integration tests.
struct TestFixture {
    /// Client carrying the initial admin's bearer token.
    admin: Client,
    /// Client with no Authorization header.
    anon: Client,
    base_url: String,
    _temp_dir: TempDir,
}

impl TestFixture {
    async fn new() -> Self {
        Lazy::force(&TRACING);

        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let db_path = temp_dir.path().join("test.sqlite");

        // Initialize database
        let pool = init_database(&db_path).await.expect("Failed to init DB");
        let repo = Arc::new(Repository::new(pool));

        // Create config
        let config = Config {
            db_path,
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            log_level: "warn".to_string(),
            secret_key: "integration-test-secret-key".to_string(),
            token_ttl_mins: 60,
            app_name: TEST_APP_NAME.to_string(),
            search_url: crate::config::DEFAULT_SEARCH_URL.to_string(),
            initial_admin_username: ADMIN_USERNAME.to_string(),
            initial_admin_password: ADMIN_PASSWORD.to_string(),
            seed_path: None,
        };

        ensure_initial_admin(&repo, &config)
            .await
            .expect("Failed to create initial admin");

        let state = AppState {
            repo,
            config: Arc::new(config),
        };

        let app = create_router(state);

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        // Spawn server
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to start
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;

        let anon = Client::new();

        // Log in as the initial admin and bake the token into a client
        let token_resp = anon
            .post(format!("{}/api/auth/token", base_url))
            .form(&[("username", ADMIN_USERNAME), ("password", ADMIN_PASSWORD)])
            .send()
            .await
            .expect("Login request failed");
        assert_eq!(token_resp.status(), 200);
        let token_body: Value = token_resp.json().await.unwrap();
        let token = token_body["access_token"].as_str().unwrap().to_string();
        assert_eq!(token_body["token_type"], "bearer");

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", token).parse().unwrap(),
        );
        let admin = Client::builder().default_headers(headers).build().unwrap();

        TestFixture {
            admin,
            anon,
            base_url,
            _temp_dir: temp_dir,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Log in with arbitrary credentials, returning a client carrying the
    /// issued bearer token.
    async fn login(&self, username: &str, password: &str) -> Client {
        let resp = self
            .anon
            .post(self.url("/api/auth/token"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        let token = body["access_token"].as_str().unwrap();

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", token).parse().unwrap(),
        );
        Client::builder().default_headers(headers).build().unwrap()
    }

    async fn create_category(&self, slug: &str, label: &str, order: i64) -> i64 {
        let resp = self
            .admin
            .post(self.url("/api/categories"))
            .json(&json!({
                "slug": slug,
                "label": label,
                "icon": "folder",
                "order": order,
                "active": true
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        body["id"].as_i64().unwrap()
    }

    async fn create_card(&self, category_id: i64, title: &str, order: i64) -> i64 {
        let resp = self
            .admin
            .post(self.url("/api/cards"))
            .json(&json!({
                "category_id": category_id,
                "title": title,
                "description": "A test card",
                "icon": "link",
                "icon_bg_class": "bg-blue-100",
                "icon_color_class": "text-blue-600",
                "href": "https://example.com",
                "order": order
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 200);
        let body: Value = resp.json().await.unwrap();
        body["id"].as_i64().unwrap()
    }
}

#[tokio::test]
async fn test_status_endpoint() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .anon
        .get(fixture.url("/api/status"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .anon
        .post(fixture.url("/api/auth/token"))
        .form(&[("username", ADMIN_USERNAME), ("password", "wrong")])
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_login_unknown_user_same_error() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .anon
        .post(fixture.url("/api/auth/token"))
        .form(&[("username", "nobody"), ("password", "whatever")])
        .send()
        .await
        .unwrap();

    // The response must not reveal whether the account exists
    assert_eq!(resp.status(), 401);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Incorrect username or password");
}

#[tokio::test]
async fn test_mutation_without_token_is_unauthorized() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .anon
        .post(fixture.url("/api/categories"))
        .json(&json!({"slug": "x", "label": "X", "icon": "folder"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
    assert_eq!(
        resp.headers().get("www-authenticate").unwrap(),
        "Bearer",
        "401 responses advertise the Bearer scheme"
    );
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_garbage_token_is_unauthorized() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .anon
        .delete(fixture.url("/api/categories/1"))
        .header("authorization", "Bearer not-a-real-token")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_non_superuser_is_forbidden() {
    let fixture = TestFixture::new().await;

    // Create a regular (non-superuser) account
    let resp = fixture
        .admin
        .post(fixture.url("/api/users"))
        .json(&json!({
            "username": "viewer",
            "password": "viewer-password",
            "is_superuser": false
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let viewer = fixture.login("viewer", "viewer-password").await;
    let resp = viewer
        .post(fixture.url("/api/categories"))
        .json(&json!({"slug": "x", "label": "X", "icon": "folder"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 403);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_inactive_user_token_is_rejected() {
    let fixture = TestFixture::new().await;

    fixture
        .admin
        .post(fixture.url("/api/users"))
        .json(&json!({
            "username": "dormant",
            "password": "dormant-password",
            "is_active": false,
            "is_superuser": true
        }))
        .send()
        .await
        .unwrap();

    // A token is still issued; the guard rejects it at use time
    let dormant = fixture.login("dormant", "dormant-password").await;
    let resp = dormant
        .post(fixture.url("/api/categories"))
        .json(&json!({"slug": "x", "label": "X", "icon": "folder"}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_category_crud() {
    let fixture = TestFixture::new().await;

    // Create
    let id = fixture.create_category("dev-tools", "开发工具", 1).await;

    // List, ordered by sort order
    fixture.create_category("aaa-later", "Later", 5).await;
    fixture.create_category("first", "First", 0).await;

    let resp = fixture
        .anon
        .get(fixture.url("/api/categories"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list[0]["slug"], "first");
    assert_eq!(list[1]["slug"], "dev-tools");
    assert_eq!(list[2]["slug"], "aaa-later");

    // Partial update: only the label changes
    let resp = fixture
        .admin
        .put(fixture.url(&format!("/api/categories/{}", id)))
        .json(&json!({"label": "Dev Tools"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["label"], "Dev Tools");
    assert_eq!(body["slug"], "dev-tools");
    assert_eq!(body["order"], 1);

    // Delete
    let resp = fixture
        .admin
        .delete(fixture.url(&format!("/api/categories/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["ok"], true);

    // Deleting again is a 404
    let resp = fixture
        .admin
        .delete(fixture.url(&format!("/api/categories/{}", id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_duplicate_category_slug_rejected() {
    let fixture = TestFixture::new().await;

    fixture.create_category("tools", "Tools", 0).await;

    let resp = fixture
        .admin
        .post(fixture.url("/api/categories"))
        .json(&json!({"slug": "tools", "label": "Duplicate", "icon": "folder"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["code"], "BAD_REQUEST");

    // Exactly one row with that slug remains
    let resp = fixture
        .anon
        .get(fixture.url("/api/categories"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    let matches: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .filter(|c| c["slug"] == "tools")
        .collect();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["label"], "Tools");
}

#[tokio::test]
async fn test_card_with_dangling_category_rejected() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .admin
        .post(fixture.url("/api/cards"))
        .json(&json!({
            "category_id": 9999,
            "title": "Orphan",
            "description": "Should not be created",
            "icon": "link",
            "icon_bg_class": "bg-red-100",
            "icon_color_class": "text-red-600",
            "href": "https://example.com"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // No row was inserted
    let resp = fixture
        .anon
        .get(fixture.url("/api/cards"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_card_crud_and_filtering() {
    let fixture = TestFixture::new().await;

    let cat_a = fixture.create_category("a", "A", 0).await;
    let cat_b = fixture.create_category("b", "B", 1).await;

    let card_second = fixture.create_card(cat_a, "Second", 2).await;
    fixture.create_card(cat_a, "First", 1).await;
    fixture.create_card(cat_b, "Other", 0).await;

    // Filter by category, ordered by sort order
    let resp = fixture
        .anon
        .get(fixture.url(&format!("/api/cards?category_id={}", cat_a)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let cards = body.as_array().unwrap();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0]["title"], "First");
    assert_eq!(cards[1]["title"], "Second");

    // Partial update keeps unnamed fields
    let resp = fixture
        .admin
        .put(fixture.url(&format!("/api/cards/{}", card_second)))
        .json(&json!({"title": "Renamed", "subtitle": "now with subtitle"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["title"], "Renamed");
    assert_eq!(body["subtitle"], "now with subtitle");
    assert_eq!(body["category_id"], cat_a);
    assert_eq!(body["href"], "https://example.com");

    // Moving a card to a missing category fails
    let resp = fixture
        .admin
        .put(fixture.url(&format!("/api/cards/{}", card_second)))
        .json(&json!({"category_id": 9999}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // Update of a missing card is a 404
    let resp = fixture
        .admin
        .put(fixture.url("/api/cards/9999"))
        .json(&json!({"title": "Ghost"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    // Delete
    let resp = fixture
        .admin
        .delete(fixture.url(&format!("/api/cards/{}", card_second)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}

#[tokio::test]
async fn test_category_delete_cascades_cards() {
    let fixture = TestFixture::new().await;

    let doomed = fixture.create_category("doomed", "Doomed", 0).await;
    let survivor = fixture.create_category("survivor", "Survivor", 1).await;
    fixture.create_card(doomed, "Card 1", 0).await;
    fixture.create_card(doomed, "Card 2", 1).await;
    fixture.create_card(survivor, "Keeper", 0).await;

    let resp = fixture
        .admin
        .delete(fixture.url(&format!("/api/categories/{}", doomed)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    // No orphan cards remain; the other category is untouched
    let resp = fixture
        .anon
        .get(fixture.url("/api/cards"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    let cards = body.as_array().unwrap();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0]["title"], "Keeper");
    assert_eq!(cards[0]["category_id"], survivor);
}

#[tokio::test]
async fn test_user_crud() {
    let fixture = TestFixture::new().await;

    // Create
    let resp = fixture
        .admin
        .post(fixture.url("/api/users"))
        .json(&json!({
            "username": "alice",
            "password": "alice-password",
            "is_superuser": true
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let alice_id = body["id"].as_i64().unwrap();
    assert_eq!(body["username"], "alice");
    assert_eq!(body["is_active"], true);
    assert!(
        body.get("hashed_password").is_none(),
        "password hash must never be serialized"
    );

    // Duplicate username rejected
    let resp = fixture
        .admin
        .post(fixture.url("/api/users"))
        .json(&json!({"username": "alice", "password": "other"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    // List requires auth
    let resp = fixture
        .anon
        .get(fixture.url("/api/users"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);

    let resp = fixture
        .admin
        .get(fixture.url("/api/users"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 2); // admin + alice

    // Password change takes effect
    let resp = fixture
        .admin
        .put(fixture.url(&format!("/api/users/{}", alice_id)))
        .json(&json!({"password": "new-password"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    fixture.login("alice", "new-password").await;

    // Empty password keeps the current one
    let resp = fixture
        .admin
        .put(fixture.url(&format!("/api/users/{}", alice_id)))
        .json(&json!({"password": ""}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    fixture.login("alice", "new-password").await;

    // Delete
    let resp = fixture
        .admin
        .delete(fixture.url(&format!("/api/users/{}", alice_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let resp = fixture
        .admin
        .delete(fixture.url(&format!("/api/users/{}", alice_id)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn test_initial_admin_protected_fields() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .admin
        .get(fixture.url("/api/users"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    let admin_row = body
        .as_array()
        .unwrap()
        .iter()
        .find(|u| u["username"] == ADMIN_USERNAME)
        .expect("initial admin must exist")
        .clone();
    let admin_id = admin_row["id"].as_i64().unwrap();

    // Username, role, and active flag are all locked
    for payload in [
        json!({"username": "root"}),
        json!({"is_superuser": false}),
        json!({"is_active": false}),
    ] {
        let resp = fixture
            .admin
            .put(fixture.url(&format!("/api/users/{}", admin_id)))
            .json(&payload)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 400, "payload {} must be rejected", payload);
    }

    // The password is still changeable
    let resp = fixture
        .admin
        .put(fixture.url(&format!("/api/users/{}", admin_id)))
        .json(&json!({"password": "rotated-admin-password"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    fixture.login(ADMIN_USERNAME, "rotated-admin-password").await;
}

#[tokio::test]
async fn test_config_defaults_and_upsert() {
    let fixture = TestFixture::new().await;

    // Reads are composed from defaults when no rows exist
    let resp = fixture
        .admin
        .get(fixture.url("/api/configs/search"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["engine_name"], "Google");
    assert_eq!(body["engine_url"], crate::config::DEFAULT_SEARCH_URL);

    let resp = fixture
        .admin
        .get(fixture.url("/api/configs/branding"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["title"], TEST_APP_NAME);
    assert_eq!(body["icon"], "hub");

    // Partial update touches only the named fields
    let resp = fixture
        .admin
        .put(fixture.url("/api/configs/search"))
        .json(&json!({"engine_name": "DuckDuckGo"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["engine_name"], "DuckDuckGo");
    assert_eq!(body["engine_url"], crate::config::DEFAULT_SEARCH_URL);

    // Overwriting the same key again wins
    let resp = fixture
        .admin
        .put(fixture.url("/api/configs/search"))
        .json(&json!({"engine_name": "Bing", "engine_url": "https://www.bing.com/search"}))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["engine_name"], "Bing");
    assert_eq!(body["engine_url"], "https://www.bing.com/search");

    // Branding upsert
    let resp = fixture
        .admin
        .put(fixture.url("/api/configs/branding"))
        .json(&json!({"title": "My Links"}))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["title"], "My Links");
    assert_eq!(body["icon"], "hub");

    // Config reads require a superuser token
    let resp = fixture
        .anon
        .get(fixture.url("/api/configs/branding"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn test_navigation_empty_store_uses_defaults() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .anon
        .get(fixture.url("/api/navigation"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();

    assert_eq!(body["branding"]["title"], TEST_APP_NAME);
    assert_eq!(body["branding"]["icon"], "hub");
    assert_eq!(body["hero"]["searchEngine"]["name"], "Google");
    assert_eq!(
        body["hero"]["searchEngine"]["url"],
        "https://www.google.com/search?q={query}"
    );
    assert!(body["sidebar"]["menuItems"].as_array().unwrap().is_empty());
    assert!(body["sections"].as_array().unwrap().is_empty());
    // Fixed blocks are always present
    assert_eq!(body["sidebar"]["status"]["indicator"]["icon"], "circle");
    assert_eq!(body["header"]["links"][0]["href"], "/");
}

#[tokio::test]
async fn test_navigation_aggregates_categories_and_cards() {
    let fixture = TestFixture::new().await;

    let tools = fixture.create_category("tools", "Tools", 1).await;
    let design = fixture.create_category("design", "Design", 0).await;
    fixture.create_card(tools, "Zulu", 2).await;
    fixture.create_card(tools, "Alpha", 1).await;
    fixture.create_card(design, "Figma", 0).await;

    fixture
        .admin
        .put(fixture.url("/api/configs/branding"))
        .json(&json!({"title": "My Nav", "icon": "star"}))
        .send()
        .await
        .unwrap();
    fixture
        .admin
        .put(fixture.url("/api/configs/search"))
        .json(&json!({"engine_url": "https://bing.com/search?mkt=en"}))
        .send()
        .await
        .unwrap();

    let resp = fixture
        .anon
        .get(fixture.url("/api/navigation"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();

    // Persisted config wins over defaults
    assert_eq!(body["branding"]["title"], "My Nav");
    assert_eq!(body["branding"]["icon"], "star");
    // Existing query string gets the placeholder appended with '&'
    assert_eq!(
        body["hero"]["searchEngine"]["url"],
        "https://bing.com/search?mkt=en&q={query}"
    );

    // Menu and sections follow the category order
    let menu = body["sidebar"]["menuItems"].as_array().unwrap();
    assert_eq!(menu.len(), 2);
    assert_eq!(menu[0]["id"], "design");
    assert_eq!(menu[1]["id"], "tools");
    assert_eq!(menu[1]["label"], "Tools");
    assert_eq!(menu[1]["active"], true);

    let sections = body["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 2);
    assert_eq!(sections[0]["id"], "design");
    assert_eq!(sections[0]["type"], "grid");
    assert_eq!(sections[0]["title"], "Design");

    // Cards within a section follow the card order
    let tool_cards = sections[1]["cards"].as_array().unwrap();
    assert_eq!(tool_cards.len(), 2);
    assert_eq!(tool_cards[0]["title"], "Alpha");
    assert_eq!(tool_cards[1]["title"], "Zulu");
    assert_eq!(tool_cards[0]["iconBgClass"], "bg-blue-100");

    // A category with no cards still gets an (empty) section
    fixture.create_category("empty", "Empty", 2).await;
    let resp = fixture
        .anon
        .get(fixture.url("/api/navigation"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    let sections = body["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 3);
    assert!(sections[2]["cards"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_pagination() {
    let fixture = TestFixture::new().await;

    for i in 0..5 {
        fixture
            .create_category(&format!("cat-{}", i), &format!("Cat {}", i), i)
            .await;
    }

    let resp = fixture
        .anon
        .get(fixture.url("/api/categories?skip=1&limit=2"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: Value = resp.json().await.unwrap();
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0]["slug"], "cat-1");
    assert_eq!(list[1]["slug"], "cat-2");
}
