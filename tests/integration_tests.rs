//! Integration tests for the Lokriti dashboard
//!
//! Each test starts the full router on an ephemeral port and drives it
//! over HTTP, so routing, the shared navigation shell, the views and the
//! command boundary are exercised together.

use lokriti_dashboard::config::Config;
use lokriti_dashboard::server::{router, AppState};
use reqwest::{redirect::Policy, Client, StatusCode};
use serde_json::Value;

// ==================== Test Helpers ====================

/// Serve `state` on 127.0.0.1 with an OS-assigned port; returns the base URL.
async fn spawn_app_with(state: AppState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    tokio::spawn(async move {
        axum::serve(listener, router(state))
            .await
            .expect("Test server failed");
    });

    format!("http://{}", addr)
}

async fn spawn_app() -> String {
    spawn_app_with(AppState::new(Config::default())).await
}

/// Client that reports redirects instead of following them.
fn client() -> Client {
    Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("Failed to build client")
}

async fn get_text(client: &Client, url: &str) -> (StatusCode, String) {
    let response = client.get(url).send().await.expect("Request failed");
    let status = response.status();
    (status, response.text().await.expect("Body was not text"))
}

fn location(response: &reqwest::Response) -> &str {
    response
        .headers()
        .get("location")
        .and_then(|value| value.to_str().ok())
        .expect("Missing Location header")
}

// ==================== Routing Tests ====================

#[tokio::test]
async fn test_root_redirects_to_dashboard() {
    let base = spawn_app().await;
    let response = client().get(&base).send().await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/dashboard");
}

#[tokio::test]
async fn test_every_page_renders() {
    let base = spawn_app().await;
    let client = client();

    for (path, heading) in [
        ("/dashboard", "Main Categories"),
        ("/inventory", "Inventory Management"),
        ("/sales", "Sales Overview"),
        ("/reports", "Monthly Business Report"),
    ] {
        let (status, body) = get_text(&client, &format!("{}{}", base, path)).await;
        assert_eq!(status, StatusCode::OK, "{} failed", path);
        assert!(body.contains(heading), "{} is missing '{}'", path, heading);
        assert!(body.contains(&format!("<a href=\"{}\" class=\"active\">", path)));
    }
}

#[tokio::test]
async fn test_health_and_unknown_path() {
    let base = spawn_app().await;
    let client = client();

    let (status, body) = get_text(&client, &format!("{}/health", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");

    let (status, _) = get_text(&client, &format!("{}/settings", base)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_dashboard_category_panel() {
    let base = spawn_app().await;
    let client = client();

    let (_, body) = get_text(&client, &format!("{}/dashboard?category=arts", base)).await;
    assert!(body.contains("category-panel"));
    assert!(body.contains("<td>Mithila Painting</td>"));

    let (status, body) = get_text(&client, &format!("{}/dashboard?category=jewelry", base)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.contains("category-panel"));
}

// ==================== Language Toggle Tests ====================

#[tokio::test]
async fn test_toggle_switches_labels_and_returns_to_current_page() {
    let base = spawn_app().await;
    let client = client();

    let (_, body) = get_text(&client, &format!("{}/inventory", base)).await;
    assert!(body.contains("Inventory Management"));
    assert!(body.contains("🇳🇵 नेपाली"));

    let response = client
        .post(format!("{}/language/toggle", base))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), "/inventory");

    let (_, body) = get_text(&client, &format!("{}/inventory", base)).await;
    assert!(body.contains("सामान व्यवस्थापन"));
    assert!(body.contains("🇬🇧 English"));
    assert!(body.contains("<html lang=\"ne\">"));

    client
        .post(format!("{}/language/toggle", base))
        .send()
        .await
        .unwrap();
    let (_, body) = get_text(&client, &format!("{}/inventory", base)).await;
    assert!(body.contains("Inventory Management"));
}

#[tokio::test]
async fn test_configured_default_language() {
    let config = Config {
        default_language: lokriti_dashboard::i18n::Language::NEPALI,
        ..Config::default()
    };
    let base = spawn_app_with(AppState::new(config)).await;

    let (_, body) = get_text(&client(), &format!("{}/sales", base)).await;
    assert!(body.contains("बिक्री विवरण"));
}

// ==================== Inventory Tests ====================

#[tokio::test]
async fn test_inventory_filters_from_query() {
    let base = spawn_app().await;
    let client = client();

    let response = client
        .get(format!("{}/inventory", base))
        .query(&[("q", ""), ("status", "low stock")])
        .send()
        .await
        .unwrap();
    let body = response.text().await.unwrap();

    assert!(body.contains("Showing 3 of 14 products"));
    assert!(body.contains("<td>Dhaka Topi</td>"));
    assert!(!body.contains("<td>Singing Bowl</td>"));
}

#[tokio::test]
async fn test_inventory_json_honours_filters() {
    let base = spawn_app().await;

    let json: Value = client()
        .get(format!("{}/api/inventory", base))
        .query(&[("q", "BUDDHA")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(json["language"], "en");
    assert_eq!(json["total_items"], 14);
    assert_eq!(json["low_stock"], 3);
    assert_eq!(json["shown"], 2);
    assert_eq!(json["rows"][0]["name"], "Wooden Buddha");
    assert_eq!(json["rows"][0]["status"], "Low Stock");
    assert_eq!(json["rows"][1]["serial"], 2);
    assert_eq!(json["value_by_category"][0]["category"], "Textiles");
    assert_eq!(json["value_by_category"][0]["total"], 120_500.0);
}

// ==================== Command Boundary Tests ====================

#[tokio::test]
async fn test_catalog_commands_are_not_implemented() {
    let base = spawn_app().await;
    let client = client();

    for path in [
        "/inventory/products",
        "/inventory/products/3/edit",
        "/inventory/products/3/delete",
    ] {
        let response = client
            .post(format!("{}{}", base, path))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED, "{}", path);
        assert_eq!(
            response.text().await.unwrap(),
            "This action is not available yet."
        );
    }
}

#[tokio::test]
async fn test_not_implemented_message_follows_language() {
    let base = spawn_app().await;
    let client = client();

    client
        .post(format!("{}/language/toggle", base))
        .send()
        .await
        .unwrap();
    let response = client
        .post(format!("{}/inventory/products/1/delete", base))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    let body = response.text().await.unwrap();
    assert_ne!(body, "This action is not available yet.");
    assert!(!body.is_empty());
}

// ==================== Usage and Failure Tests ====================

#[tokio::test]
async fn test_usage_counts_renders() {
    let base = spawn_app().await;
    let client = client();

    get_text(&client, &format!("{}/reports", base)).await;
    let json: Value = client
        .get(format!("{}/api/usage", base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(json["reports_renders"].as_u64().unwrap() >= 1);
    assert!(json["total_renders"].as_u64().unwrap() >= 1);
    assert!(json["started_at"].is_string());
}

#[tokio::test]
async fn test_poisoned_shell_returns_server_error() {
    let state = AppState::new(Config::default());
    let shell = state.shell.clone();
    let _ = std::thread::spawn(move || {
        let _guard = shell.lock().unwrap();
        panic!("poison the navigation shell");
    })
    .join();

    let base = spawn_app_with(state).await;
    let (status, _) = get_text(&client(), &format!("{}/dashboard", base)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
