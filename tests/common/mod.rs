use std::net::SocketAddr;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sqlx::AnyPool;
use tempfile::TempDir;

use stitch::analysis::{AiError, GenerativeModel};
use stitch::config::{Config, GeminiConfig};
use stitch::db::{self, Backend};
use stitch::models::Timestamp;

pub const JWT_SECRET: &str = "test-jwt-secret-that-is-long-enough";
const BOUNDARY: &str = "stitch-test-boundary";

/// A running test server instance with its own database file and upload dir.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: AnyPool,
    pub client: Client,
    pub dir: TempDir,
}

/// Model stub: answers every prompt with a fixed reply.
pub struct StubModel {
    pub reply: Value,
}

#[async_trait]
impl GenerativeModel for StubModel {
    async fn generate_json(&self, _prompt: &str) -> Result<Value, AiError> {
        Ok(self.reply.clone())
    }
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn register(&self, email: &str, password: &str, full_name: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/auth/register"))
            .json(&json!({ "email": email, "password": password, "full_name": full_name }))
            .send()
            .await
            .expect("register request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn login(&self, email: &str, password: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/auth/login"))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("login request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Register a user and return its access token.
    pub async fn signup(&self, email: &str) -> String {
        let (body, status) = self.register(email, "password123", "Test User").await;
        assert_eq!(status, StatusCode::OK, "register failed: {body}");
        body["access_token"].as_str().unwrap().to_string()
    }

    /// Insert a job row directly; there is no endpoint for creating jobs.
    pub async fn insert_job(&self, title: &str, company: &str) -> i64 {
        let row: (i64,) = sqlx::query_as(
            "INSERT INTO jobs (title, company, description, location, created_at)
             VALUES ($1, $2, $3, $4, $5) RETURNING id",
        )
        .bind(title)
        .bind(company)
        .bind(format!("{title} at {company}"))
        .bind("Remote")
        .bind(Timestamp::now().to_string())
        .fetch_one(&self.pool)
        .await
        .expect("insert job failed");
        row.0
    }

    pub async fn count_rows(&self, table: &str) -> i64 {
        let row: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&self.pool)
            .await
            .expect("count failed");
        row.0
    }

    pub async fn get(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Make an authenticated GET request.
    pub async fn get_auth(&self, path: &str, token: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Make an authenticated POST request with JSON body.
    pub async fn post_auth(&self, path: &str, token: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Make an authenticated PUT request with JSON body.
    pub async fn put_auth(&self, path: &str, token: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .put(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .expect("put request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST a multipart form with one file part and optional text fields.
    pub async fn post_multipart(
        &self,
        path: &str,
        token: Option<&str>,
        filename: &str,
        file: &[u8],
        fields: &[(&str, &str)],
    ) -> (Value, StatusCode) {
        let mut req = self
            .client
            .post(self.url(path))
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(multipart_body(filename, file, fields));
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        let resp = req.send().await.expect("multipart request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

fn multipart_body(filename: &str, file: &[u8], fields: &[(&str, &str)]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(file);
    body.extend_from_slice(b"\r\n");
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn test_config(dir: &TempDir, database_url: String) -> Config {
    Config {
        database_url,
        jwt_secret: JWT_SECRET.to_string(),
        ephemeral_jwt_secret: false,
        access_token_ttl_minutes: 30,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        upload_dir: dir.path().join("uploads"),
        max_upload_size: 10 * 1024 * 1024,
        log_level: "warn".to_string(),
        gemini: GeminiConfig {
            api_key: None,
            model: "gemini-flash-latest".to_string(),
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 1,
        },
    }
}

/// Spawn a test app with the production model client and no API key, so
/// every analysis takes the fallback path.
pub async fn spawn_app() -> TestApp {
    spawn(None).await
}

/// Spawn a test app whose model always answers with `reply`.
pub async fn spawn_app_with_reply(reply: Value) -> TestApp {
    let model: Arc<dyn GenerativeModel> = Arc::new(StubModel { reply });
    spawn(Some(model)).await
}

async fn spawn(model: Option<Arc<dyn GenerativeModel>>) -> TestApp {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let database_url = format!("sqlite://{}?mode=rwc", dir.path().join("test.db").display());

    let pool = db::connect(&database_url, 5)
        .await
        .expect("Failed to open test database");
    db::migrate(&pool, Backend::Sqlite)
        .await
        .expect("Failed to run migrations on test database");

    let config = test_config(&dir, database_url);
    let app = match model {
        Some(model) => stitch::build_app_with_model(pool.clone(), config, model),
        None => stitch::build_app(pool.clone(), config),
    };

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        pool,
        client: Client::new(),
        dir,
    }
}
