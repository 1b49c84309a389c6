//! HTTP integration tests.
//!
//! Starts the API on an ephemeral port over a temporary database and
//! exercises it with reqwest.

use serde_json::{Value, json};
use tempfile::TempDir;

use retro_games_db::{CatalogStore, StoreConfig};

/// Bind to port 0 and return the base URL. The `TempDir` must outlive the test.
async fn start_server() -> (String, TempDir) {
    let dir = TempDir::new().unwrap();
    let store = CatalogStore::open(StoreConfig::new(dir.path().join("games.db"))).unwrap();
    let app = retro_games_api::router(store);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), dir)
}

fn chrono_trigger() -> Value {
    json!({
        "title": "Chrono Trigger",
        "release_year": 1995,
        "platform": "SNES",
        "date_acquired": "2024-01-15",
        "condition": "mint",
    })
}

async fn create(client: &reqwest::Client, base: &str, body: &Value) -> Value {
    let resp = client
        .post(format!("{base}/games"))
        .json(body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    resp.json().await.unwrap()
}

#[tokio::test]
async fn info_reports_version() {
    let (base, _dir) = start_server().await;
    let body: Value = reqwest::get(format!("{base}/"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn create_then_get() {
    let (base, _dir) = start_server().await;
    let client = reqwest::Client::new();

    let created = create(&client, &base, &chrono_trigger()).await;
    assert_eq!(created["title"], "Chrono Trigger");
    assert_eq!(created["release_year"], 1995);
    assert_eq!(created["date_acquired"], "2024-01-15");
    assert_eq!(created["condition"], "mint");
    let id = created["id"].as_i64().unwrap();

    let resp = client
        .get(format!("{base}/games/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let fetched: Value = resp.json().await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn create_normalizes_fields() {
    let (base, _dir) = start_server().await;
    let client = reqwest::Client::new();

    let created = create(
        &client,
        &base,
        &json!({
            "title": "  Ico ",
            "release_year": 2001,
            "platform": " PS2",
            "date_acquired": "2023-06-01",
            "condition": " VGC ",
        }),
    )
    .await;
    assert_eq!(created["title"], "Ico");
    assert_eq!(created["platform"], "PS2");
    assert_eq!(created["condition"], "vgc");
}

#[tokio::test]
async fn create_without_condition() {
    let (base, _dir) = start_server().await;
    let client = reqwest::Client::new();

    let created = create(
        &client,
        &base,
        &json!({
            "title": "Ico",
            "release_year": 2001,
            "platform": "PS2",
            "date_acquired": "2023-06-01",
        }),
    )
    .await;
    assert!(created["condition"].is_null());
}

#[tokio::test]
async fn invalid_condition_is_422_with_detail() {
    let (base, _dir) = start_server().await;
    let client = reqwest::Client::new();

    let mut body = chrono_trigger();
    body["condition"] = json!("shiny");
    let resp = client
        .post(format!("{base}/games"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);
    let err: Value = resp.json().await.unwrap();
    assert!(err["detail"].as_str().unwrap().contains("condition"));

    // Nothing was stored.
    let list: Value = reqwest::get(format!("{base}/games"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(list["total"], 0);
}

#[tokio::test]
async fn out_of_range_year_is_422() {
    let (base, _dir) = start_server().await;
    let client = reqwest::Client::new();

    let mut body = chrono_trigger();
    body["release_year"] = json!(1969);
    let resp = client
        .post(format!("{base}/games"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);
}

#[tokio::test]
async fn missing_entry_is_404() {
    let (base, _dir) = start_server().await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/games/999")).send().await.unwrap();
    assert_eq!(resp.status(), 404);
    let err: Value = resp.json().await.unwrap();
    assert_eq!(err["detail"], "Game with ID 999 not found");

    let resp = client
        .put(format!("{base}/games/999"))
        .json(&chrono_trigger())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let resp = client
        .delete(format!("{base}/games/999"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn update_replaces_every_field() {
    let (base, _dir) = start_server().await;
    let client = reqwest::Client::new();

    let id = create(&client, &base, &chrono_trigger()).await["id"]
        .as_i64()
        .unwrap();

    let resp = client
        .put(format!("{base}/games/{id}"))
        .json(&json!({
            "title": "Chrono Cross",
            "release_year": 1999,
            "platform": "PS1",
            "date_acquired": "2024-02-01",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let fetched: Value = client
        .get(format!("{base}/games/{id}"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched["id"], id);
    assert_eq!(fetched["title"], "Chrono Cross");
    assert_eq!(fetched["platform"], "PS1");
    assert!(fetched["condition"].is_null());
}

#[tokio::test]
async fn delete_then_gone() {
    let (base, _dir) = start_server().await;
    let client = reqwest::Client::new();

    let id = create(&client, &base, &chrono_trigger()).await["id"]
        .as_i64()
        .unwrap();

    let resp = client
        .delete(format!("{base}/games/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);

    let resp = client
        .get(format!("{base}/games/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn list_pages_by_release_year_descending() {
    let (base, _dir) = start_server().await;
    let client = reqwest::Client::new();

    for year in [1990, 2005, 1985, 2001, 1995] {
        let mut body = chrono_trigger();
        body["title"] = json!(format!("Game {year}"));
        body["release_year"] = json!(year);
        create(&client, &base, &body).await;
    }

    let page1: Value = client
        .get(format!("{base}/games?page=1&page_size=2"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(page1["total"], 5);
    assert_eq!(page1["page"], 1);
    assert_eq!(page1["page_size"], 2);
    assert_eq!(page1["total_pages"], 3);
    let years: Vec<i64> = page1["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["release_year"].as_i64().unwrap())
        .collect();
    assert_eq!(years, [2005, 2001]);

    let page3: Value = client
        .get(format!("{base}/games?page=3&page_size=2"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(page3["entries"].as_array().unwrap().len(), 1);
    assert_eq!(page3["entries"][0]["release_year"], 1985);

    let past_end: Value = client
        .get(format!("{base}/games?page=4&page_size=2"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(past_end["entries"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn list_defaults_to_page_one_of_25() {
    let (base, _dir) = start_server().await;
    let body: Value = reqwest::get(format!("{base}/games"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["page"], 1);
    assert_eq!(body["page_size"], 25);
    assert_eq!(body["total"], 0);
    assert_eq!(body["total_pages"], 0);
}

#[tokio::test]
async fn bad_paging_is_422() {
    let (base, _dir) = start_server().await;
    let client = reqwest::Client::new();

    for query in ["page=0", "page_size=0", "page_size=101"] {
        let resp = client
            .get(format!("{base}/games?{query}"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 422, "{query}");
    }

    let resp = client
        .get(format!("{base}/games?page_size=100"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
}

async fn assert_detail(resp: reqwest::Response, status: u16) {
    assert_eq!(resp.status(), status);
    let err: Value = resp.json().await.unwrap();
    assert!(err["detail"].is_string(), "expected JSON detail, got {err}");
}

#[tokio::test]
async fn undecodable_requests_return_json_detail() {
    let (base, _dir) = start_server().await;
    let client = reqwest::Client::new();

    let malformed = client
        .post(format!("{base}/games"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_detail(malformed, 400).await;

    let missing_field = client
        .post(format!("{base}/games"))
        .json(&json!({ "title": "Ico" }))
        .send()
        .await
        .unwrap();
    assert_detail(missing_field, 422).await;

    let bad_page = client
        .get(format!("{base}/games?page=first"))
        .send()
        .await
        .unwrap();
    assert_detail(bad_page, 400).await;

    let bad_id = client
        .get(format!("{base}/games/abc"))
        .send()
        .await
        .unwrap();
    assert_detail(bad_id, 400).await;
}
