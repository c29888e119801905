use axum_test::TestServer;
use chrono::Duration;
use jsonwebtoken::Algorithm;
use sqlx::SqlitePool;
use std::sync::Arc;
use stockroom::core::{AppState, TokenKeys};

/// Secret used to sign every token in the test suite.
pub const TEST_JWT_SECRET: &str = "test-secret-not-for-production";

/// Creates an AppState for the tests, signing tokens with the test secret
/// and the default 30-minute lifetime.
pub fn create_test_state(pool: SqlitePool) -> Arc<AppState> {
    let token_keys = TokenKeys::new(TEST_JWT_SECRET, Algorithm::HS256, Duration::minutes(30));
    Arc::new(AppState::new(pool, token_keys))
}

/// Creates a TestServer running the full application router.
pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    let app = stockroom::create_router(state);
    TestServer::new(app).expect("Failed to create test server")
}

/// Mints a token with an arbitrary lifetime. A negative `ttl` produces an
/// already-expired token for expiry tests.
pub fn create_test_jwt(username: &str, ttl: Duration) -> String {
    TokenKeys::new(TEST_JWT_SECRET, Algorithm::HS256, ttl)
        .issue(username)
        .expect("Failed to create test token")
}
