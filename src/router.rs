use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Router の構築
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health_check))
        // 認証
        .route("/api/auth/login", post(handlers::login))
        .route("/api/auth/logout", post(handlers::logout))
        .route("/api/auth/me", get(handlers::current_user))
        // パスワードリセット
        .route(
            "/api/admin/generate-password-reset",
            post(handlers::generate_password_reset),
        )
        .route(
            "/api/admin/password-reset-codes",
            get(handlers::list_password_reset_codes),
        )
        .route(
            "/api/auth/verify-reset-code",
            post(handlers::verify_reset_code),
        )
        .route("/api/auth/reset-password", post(handlers::reset_password))
        // メニュー・見積・予約
        .route(
            "/api/menu",
            get(handlers::list_menu).post(handlers::create_menu_item),
        )
        .route(
            "/api/quotes",
            get(handlers::list_quotes).post(handlers::create_quote),
        )
        .route("/api/quotes/{id}/send", post(handlers::send_quote))
        .route(
            "/api/reservations",
            get(handlers::list_reservations).post(handlers::create_reservation),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(state)
}

/// CORS 設定（全オリジン許可）
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}
