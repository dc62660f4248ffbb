use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct EntryResponse {
    id: i64,
    name: String,
    points: u64,
}

#[derive(Debug, Deserialize)]
struct LogResponse {
    entries: Vec<EntryResponse>,
    count: usize,
    total_points: u64,
    form_open: bool,
    selected: Option<String>,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/log")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let child = Command::new(env!("CARGO_BIN_EXE_eco_tracker"))
        .env("PORT", port.to_string())
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn fetch_log(client: &Client, base_url: &str) -> LogResponse {
    client
        .get(format!("{base_url}/api/log"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

async fn post_json(client: &Client, url: String, body: serde_json::Value) -> LogResponse {
    let response = client.post(url).json(&body).send().await.unwrap();
    assert!(response.status().is_success());
    response.json().await.unwrap()
}

#[tokio::test]
async fn http_confirm_add_appends_entry_and_points() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = fetch_log(&client, &server.base_url).await;

    post_json(
        &client,
        format!("{}/api/form", server.base_url),
        serde_json::json!({ "action": "open" }),
    )
    .await;
    let selected = post_json(
        &client,
        format!("{}/api/select", server.base_url),
        serde_json::json!({ "name": "Planted a tree" }),
    )
    .await;
    assert_eq!(selected.selected.as_deref(), Some("Planted a tree"));
    assert!(selected.form_open);

    let after = post_json(
        &client,
        format!("{}/api/confirm", server.base_url),
        serde_json::json!({}),
    )
    .await;

    assert_eq!(after.count, before.count + 1);
    assert_eq!(after.total_points, before.total_points + 20);
    assert_eq!(after.entries[0].name, "Planted a tree");
    assert!(!after.form_open);
    assert!(after.selected.is_none());
}

#[tokio::test]
async fn http_remove_entry_restores_totals() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = fetch_log(&client, &server.base_url).await;

    post_json(
        &client,
        format!("{}/api/form", server.base_url),
        serde_json::json!({ "action": "open" }),
    )
    .await;
    post_json(
        &client,
        format!("{}/api/select", server.base_url),
        serde_json::json!({ "name": "Saved water" }),
    )
    .await;
    let added = post_json(
        &client,
        format!("{}/api/confirm", server.base_url),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(added.total_points, before.total_points + 8);
    let id = added.entries[0].id;
    assert_eq!(added.entries[0].points, 8);

    let after = post_json(
        &client,
        format!("{}/api/remove", server.base_url),
        serde_json::json!({ "id": id }),
    )
    .await;

    assert_eq!(after.count, before.count);
    assert_eq!(after.total_points, before.total_points);
}

#[tokio::test]
async fn http_confirm_without_selection_is_a_noop() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    // Closing the form clears any selection a previous test left behind.
    post_json(
        &client,
        format!("{}/api/form", server.base_url),
        serde_json::json!({ "action": "close" }),
    )
    .await;
    let before = fetch_log(&client, &server.base_url).await;

    let after = post_json(
        &client,
        format!("{}/api/confirm", server.base_url),
        serde_json::json!({}),
    )
    .await;

    assert_eq!(after.count, before.count);
    assert_eq!(after.total_points, before.total_points);
    assert_eq!(after.form_open, before.form_open);
}

#[tokio::test]
async fn http_remove_unknown_id_is_a_noop() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = fetch_log(&client, &server.base_url).await;

    let after = post_json(
        &client,
        format!("{}/api/remove", server.base_url),
        serde_json::json!({ "id": -1 }),
    )
    .await;

    assert_eq!(after.count, before.count);
    assert_eq!(after.total_points, before.total_points);
}

#[tokio::test]
async fn http_form_rejects_unknown_action() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/form", server.base_url))
        .json(&serde_json::json!({ "action": "toggle" }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn http_catalog_lists_eight_activities() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    #[derive(Debug, Deserialize)]
    struct CatalogEntry {
        name: String,
        points: u64,
        icon: String,
    }

    let catalog: Vec<CatalogEntry> = client
        .get(format!("{}/api/catalog", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(catalog.len(), 8);
    let tree = catalog
        .iter()
        .find(|entry| entry.name == "Planted a tree")
        .expect("missing catalog entry");
    assert_eq!(tree.points, 20);
    assert!(!tree.icon.is_empty());
}
