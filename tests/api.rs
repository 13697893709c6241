mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::TestApp;

#[tokio::test]
async fn should_report_health() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "Dounie Cuisine API");
}

#[tokio::test]
async fn should_login_seeded_admin() {
    let app = TestApp::new();
    let (status, body) = app
        .post(
            "/api/auth/login",
            json!({ "username": "admin", "password": "Admin123!" }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["username"], "admin");
    assert_eq!(body["user"]["email"], "admin@dounie-cuisine.ca");
    assert_eq!(body["user"]["role"], "admin");
    assert!(!body["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_invalid_credentials() {
    let app = TestApp::new();
    let (status, body) = app
        .post(
            "/api/auth/login",
            json!({ "username": "admin", "password": "wrong-password" }),
        )
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Identifiants invalides");

    let (status, _) = app
        .post("/api/auth/login", json!({ "password": "Admin123!" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn should_require_authentication_for_current_user() {
    let app = TestApp::new();
    let (status, body) = app.get("/api/auth/me").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Authentification requise");

    // ログイン後もセッションは保持されない
    app.post(
        "/api/auth/login",
        json!({ "username": "admin", "password": "Admin123!" }),
    )
    .await;
    let (status, _) = app.get("/api/auth/me").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn should_logout() {
    let app = TestApp::new();
    let (status, body) = app.send(Method::POST, "/api/auth/logout", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Déconnexion réussie");
}

#[tokio::test]
async fn should_create_and_list_menu_items() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/menu").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, created) = app
        .post("/api/menu", json!({ "name": "Griot", "price": 18.5 }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["name"], "Griot");
    assert!(created["id"].is_string());

    let (_, items) = app.get("/api/menu").await;
    assert_eq!(items.as_array().unwrap().len(), 1);
    assert_eq!(items[0]["id"], created["id"]);
}

#[tokio::test]
async fn should_reject_non_object_body() {
    let app = TestApp::new();
    let (status, _) = app.post("/api/reservations", json!(["not", "an", "object"])).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, items) = app.get("/api/reservations").await;
    assert_eq!(items, json!([]));
}

#[tokio::test]
async fn should_create_reservation() {
    let app = TestApp::new();
    let (status, created) = app
        .post("/api/reservations", json!({ "name": "Marie", "guests": 6 }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["guests"], 6);
}

#[tokio::test]
async fn should_prepare_quote_for_manual_sending() {
    let app = TestApp::new();
    let (status, quote) = app
        .post("/api/quotes", json!({ "client": "Jean", "total": 1200 }))
        .await;
    assert_eq!(status, StatusCode::OK);
    let id = quote["id"].as_str().unwrap();

    let (status, body) = app
        .send(Method::POST, &format!("/api/quotes/{id}/send"), None)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Devis prêt à envoyer");
    assert!(body["note"].as_str().unwrap().contains("manuel"));

    let (_, quotes) = app.get("/api/quotes").await;
    assert_eq!(quotes.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_quote() {
    let app = TestApp::new();
    let (status, body) = app
        .send(
            Method::POST,
            "/api/quotes/00000000-0000-0000-0000-000000000000/send",
            None,
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Devis introuvable");
}
