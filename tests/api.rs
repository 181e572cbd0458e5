//! Endpoint tests over the real router.
//!
//! These tests need a reachable PostgreSQL instance; each test skips with
//! a notice when `DATABASE_URL` is not exported. The mail relay points at
//! an unused loopback port, so every contact submission exercises the
//! saved-but-notification-failed path: the message must persist and the
//! response must downgrade to 202 when the relay is unreachable.

use axum::http::StatusCode;
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use nexcent_backend::backend::server::config::{ServerConfig, SmtpConfig};
use nexcent_backend::backend::server::init::create_app;

/// Loopback port with nothing listening, so sends fail fast.
const DEAD_RELAY_PORT: u16 = 43219;

async fn test_server() -> Option<TestServer> {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("skipping: DATABASE_URL not set");
        return None;
    };

    let config = ServerConfig {
        port: 0,
        database_url,
        smtp: SmtpConfig {
            host: "127.0.0.1".to_string(),
            port: DEAD_RELAY_PORT,
            username: "notify@example.com".to_string(),
            password: "secret".to_string(),
            sender: "notify@example.com".to_string(),
            admin_email: "admin@example.com".to_string(),
        },
    };

    let app = create_app(config).await.expect("Failed to create app");
    Some(TestServer::new(app).expect("Failed to start test server"))
}

fn unique_email(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    format!("{prefix}-{nanos}@example.com")
}

#[tokio::test]
async fn register_rejects_duplicate_email() {
    let Some(server) = test_server().await else {
        return;
    };
    let email = unique_email("dup");
    let body = json!({ "name": "Ada", "email": email, "password": "secret123" });

    let first = server.post("/register").json(&body).await;
    assert_eq!(first.status_code(), StatusCode::CREATED);

    let second = server.post("/register").json(&body).await;
    assert_eq!(second.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        second.json::<Value>()["message"],
        json!("User already exists!")
    );

    // Exactly one row persisted for that email
    let users = server.get("/users").await.json::<Vec<Value>>();
    let matching = users.iter().filter(|u| u["email"] == json!(email)).count();
    assert_eq!(matching, 1);
}

#[tokio::test]
async fn register_requires_all_fields() {
    let Some(server) = test_server().await else {
        return;
    };

    let response = server
        .post("/register")
        .json(&json!({ "name": "  ", "email": unique_email("missing") }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        json!("Name, email and password required")
    );
}

#[tokio::test]
async fn register_lowercases_email() {
    let Some(server) = test_server().await else {
        return;
    };
    let email = unique_email("case");
    let mixed = email.to_uppercase();

    let response = server
        .post("/register")
        .json(&json!({ "name": "Ada", "email": mixed, "password": "secret123" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let users = server.get("/users").await.json::<Vec<Value>>();
    assert!(users.iter().any(|u| u["email"] == json!(email)));
}

#[tokio::test]
async fn login_failures_use_identical_message() {
    let Some(server) = test_server().await else {
        return;
    };
    let email = unique_email("login");
    server
        .post("/register")
        .json(&json!({ "name": "Ada", "email": email, "password": "secret123" }))
        .await
        .assert_status(StatusCode::CREATED);

    let wrong_password = server
        .post("/login")
        .json(&json!({ "email": email, "password": "wrong" }))
        .await;
    assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);

    let unknown_user = server
        .post("/login")
        .json(&json!({ "email": unique_email("ghost"), "password": "secret123" }))
        .await;
    assert_eq!(unknown_user.status_code(), StatusCode::UNAUTHORIZED);

    assert_eq!(
        wrong_password.json::<Value>()["message"],
        unknown_user.json::<Value>()["message"]
    );
}

#[tokio::test]
async fn login_returns_user_info_and_token() {
    let Some(server) = test_server().await else {
        return;
    };
    let email = unique_email("token");
    server
        .post("/register")
        .json(&json!({ "name": "Ada", "email": email, "password": "secret123" }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server
        .post("/login")
        .json(&json!({ "email": email, "password": "secret123" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body = response.json::<Value>();
    assert_eq!(body["name"], json!("Ada"));
    assert_eq!(body["email"], json!(email));
    assert!(body["token"].as_str().is_some_and(|t| !t.is_empty()));
}

#[tokio::test]
async fn guest_contact_persists_when_relay_unreachable() {
    let Some(server) = test_server().await else {
        return;
    };
    let email = unique_email("guest");
    let message = format!("guest message {email}");

    let response = server
        .post("/contact")
        .json(&json!({ "name": "Visitor", "email": email, "message": message }))
        .await;
    assert_eq!(response.status_code(), StatusCode::ACCEPTED);

    let body = response.json::<Value>();
    assert_eq!(body["message"], json!("Message saved, but email failed!"));
    assert!(body["error"].as_str().is_some());

    let contacts = server.get("/contacts").await.json::<Vec<Value>>();
    assert!(contacts.iter().any(|c| c["message"] == json!(message)));
}

#[tokio::test]
async fn contacts_list_newest_first() {
    let Some(server) = test_server().await else {
        return;
    };
    let first = format!("ordering first {}", unique_email("a"));
    let second = format!("ordering second {}", unique_email("b"));

    for message in [&first, &second] {
        server
            .post("/contact")
            .json(&json!({ "name": "Visitor", "email": "v@example.com", "message": message }))
            .await
            .assert_status(StatusCode::ACCEPTED);
    }

    let contacts = server.get("/contacts").await.json::<Vec<Value>>();
    let pos_first = contacts.iter().position(|c| c["message"] == json!(first));
    let pos_second = contacts.iter().position(|c| c["message"] == json!(second));
    assert!(pos_second.unwrap() < pos_first.unwrap());
}

#[tokio::test]
async fn auth_contact_uses_stored_identity() {
    let Some(server) = test_server().await else {
        return;
    };
    let email = unique_email("member");
    server
        .post("/register")
        .json(&json!({ "name": "Member Name", "email": email, "password": "secret123" }))
        .await
        .assert_status(StatusCode::CREATED);

    let message = format!("member message {email}");
    // Uppercased authEmail still resolves; client-supplied identity is ignored.
    let response = server
        .post("/contact")
        .json(&json!({
            "authEmail": email.to_uppercase(),
            "name": "Spoofed",
            "email": "spoofed@example.com",
            "message": message,
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::ACCEPTED);

    let contacts = server.get("/contacts").await.json::<Vec<Value>>();
    let saved = contacts
        .iter()
        .find(|c| c["message"] == json!(message))
        .expect("message not persisted");
    assert_eq!(saved["name"], json!("Member Name"));
    assert_eq!(saved["email"], json!(email));
}

#[tokio::test]
async fn unknown_auth_email_rejected_without_persisting() {
    let Some(server) = test_server().await else {
        return;
    };
    let message = format!("rejected {}", unique_email("nobody"));

    let response = server
        .post("/contact")
        .json(&json!({ "authEmail": unique_email("nobody"), "message": message }))
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<Value>()["message"],
        json!("Invalid logged-in user")
    );

    let contacts = server.get("/contacts").await.json::<Vec<Value>>();
    assert!(!contacts.iter().any(|c| c["message"] == json!(message)));
}

#[tokio::test]
async fn guest_contact_requires_name_and_email() {
    let Some(server) = test_server().await else {
        return;
    };

    let response = server
        .post("/contact")
        .json(&json!({ "message": "no identity" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        json!("Name & Email required for guests")
    );
}

#[tokio::test]
async fn contact_requires_message() {
    let Some(server) = test_server().await else {
        return;
    };

    let response = server
        .post("/contact")
        .json(&json!({ "name": "Visitor", "email": "v@example.com", "message": "  " }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json::<Value>()["message"], json!("Message is required"));
}

#[tokio::test]
async fn users_listing_never_exposes_password_hash() {
    let Some(server) = test_server().await else {
        return;
    };
    server
        .post("/register")
        .json(&json!({
            "name": "Ada",
            "email": unique_email("hash"),
            "password": "secret123",
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let users = server.get("/users").await.json::<Vec<Value>>();
    assert!(!users.is_empty());
    for user in &users {
        let fields = user.as_object().expect("user should be an object");
        assert!(!fields.contains_key("password_hash"));
    }
}
