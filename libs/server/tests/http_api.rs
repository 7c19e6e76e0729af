use mentra_server::{
    core::storage::{models, Storage},
    http::{build_router, AppState},
    services::{self, uploads::UploadStore},
};
use reqwest::multipart::{Form, Part};
use std::net::SocketAddr;

async fn spawn_server() -> (SocketAddr, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("tempdir");
    let storage = Storage::try_new(dir.path().join("mentra.db"), models()).expect("storage");
    let upload_store = UploadStore::try_new(dir.path().join("uploads")).expect("upload store");
    let activity_service = services::build(storage, upload_store.clone());

    let app = build_router(AppState {
        activity_service,
        upload_store,
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });

    (addr, dir)
}

fn form(mentee_id: &str, name: &str) -> Form {
    Form::new()
        .text("menteeId", mentee_id.to_string())
        .text("name", name.to_string())
        .text("type", "Sports".to_string())
        .text("description", "Weekly chess practice".to_string())
}

#[tokio::test]
async fn create_then_list_round_trips_the_record() {
    let (addr, _dir) = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("http://{addr}/activities"))
        .multipart(form("m1", "Chess Club"))
        .send()
        .await
        .expect("create request");
    assert_eq!(resp.status(), 201);

    let created: serde_json::Value = resp.json().await.expect("created json");
    assert_eq!(created["menteeId"], "m1");
    assert_eq!(created["name"], "Chess Club");
    assert_eq!(created["type"], "Sports");
    assert!(created["id"].as_str().is_some_and(|id| !id.is_empty()));
    // No file was attached: the key must be absent, not null.
    assert!(created.get("pdfPath").is_none());

    let listed: serde_json::Value = client
        .get(format!("http://{addr}/activities/m1"))
        .send()
        .await
        .expect("list request")
        .json()
        .await
        .expect("list json");
    assert_eq!(listed.as_array().map(Vec::len), Some(1));
    assert_eq!(listed[0], created);
}

#[tokio::test]
async fn missing_required_field_returns_400_with_message() {
    let (addr, _dir) = spawn_server().await;
    let client = reqwest::Client::new();

    // `description` is missing entirely.
    let incomplete = Form::new()
        .text("menteeId", "m1")
        .text("name", "Chess Club")
        .text("type", "Sports");
    let resp = client
        .post(format!("http://{addr}/activities"))
        .multipart(incomplete)
        .send()
        .await
        .expect("create request");
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = resp.json().await.expect("error json");
    assert_eq!(body["message"], "All fields are required");

    // An empty string counts as missing too.
    let resp = client
        .post(format!("http://{addr}/activities"))
        .multipart(form("", "Chess Club"))
        .send()
        .await
        .expect("create request");
    assert_eq!(resp.status(), 400);

    // Neither request persisted anything.
    let listed: serde_json::Value = client
        .get(format!("http://{addr}/activities/m1"))
        .send()
        .await
        .expect("list request")
        .json()
        .await
        .expect("list json");
    assert_eq!(listed.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn list_for_unknown_mentee_returns_empty_array() {
    let (addr, _dir) = spawn_server().await;

    let resp = reqwest::get(format!("http://{addr}/activities/nobody"))
        .await
        .expect("list request");
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = resp.json().await.expect("list json");
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn records_never_cross_mentee_boundaries() {
    let (addr, _dir) = spawn_server().await;
    let client = reqwest::Client::new();

    for (mentee, name) in [("a", "Chess Club"), ("b", "Debate"), ("a", "Choir")] {
        let resp = client
            .post(format!("http://{addr}/activities"))
            .multipart(form(mentee, name))
            .send()
            .await
            .expect("create request");
        assert_eq!(resp.status(), 201);
    }

    let a: serde_json::Value = client
        .get(format!("http://{addr}/activities/a"))
        .send()
        .await
        .expect("list request")
        .json()
        .await
        .expect("list json");
    let names: Vec<&str> = a
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    // Insertion order within the mentee is preserved.
    assert_eq!(names, vec!["Chess Club", "Choir"]);
    assert!(a.as_array().unwrap().iter().all(|r| r["menteeId"] == "a"));
}

#[tokio::test]
async fn uploaded_pdf_is_served_back_byte_for_byte() {
    let (addr, _dir) = spawn_server().await;
    let client = reqwest::Client::new();

    let pdf_bytes = b"%PDF-1.4 not a real pdf".to_vec();
    let with_file = form("m1", "Science Fair").part(
        "pdf",
        Part::bytes(pdf_bytes.clone())
            .file_name("proof.pdf")
            .mime_str("application/pdf")
            .expect("mime"),
    );

    let resp = client
        .post(format!("http://{addr}/activities"))
        .multipart(with_file)
        .send()
        .await
        .expect("create request");
    assert_eq!(resp.status(), 201);

    let created: serde_json::Value = resp.json().await.expect("created json");
    let pdf_path = created["pdfPath"].as_str().expect("pdfPath present");
    assert!(pdf_path.starts_with("uploads/"));
    assert!(pdf_path.ends_with("-proof.pdf"));

    let resp = client
        .get(format!("http://{addr}/{pdf_path}"))
        .send()
        .await
        .expect("download request");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["content-type"].to_str().unwrap(),
        "application/pdf"
    );
    assert_eq!(resp.bytes().await.expect("bytes").to_vec(), pdf_bytes);
}

#[tokio::test]
async fn upload_route_rejects_unknown_and_traversing_names() {
    let (addr, _dir) = spawn_server().await;
    let client = reqwest::Client::new();

    let resp = client
        .get(format!("http://{addr}/uploads/missing.pdf"))
        .send()
        .await
        .expect("download request");
    assert_eq!(resp.status(), 404);

    let resp = client
        .get(format!("http://{addr}/uploads/..%2Fmentra.db"))
        .send()
        .await
        .expect("download request");
    assert_ne!(resp.status(), 200);
}
