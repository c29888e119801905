//! Integration tests for the protected catalog endpoints
//!
//! Tests for:
//! - GET    /api/items
//! - GET    /api/items/{item_id}
//! - POST   /api/items
//! - PUT    /api/items/{item_id}
//! - DELETE /api/items/{item_id}
//!
//! Every route sits behind the bearer-token gate, so these tests double as
//! coverage for the authentication middleware.

mod common;

#[cfg(test)]
mod item_tests {
    use super::common::*;
    use axum::http::{HeaderName, HeaderValue, StatusCode};
    use axum_test::TestServer;
    use chrono::Duration;
    use serde_json::{Value, json};
    use sqlx::SqlitePool;

    fn bearer(token: &str) -> (HeaderName, HeaderValue) {
        (
            HeaderName::from_static("authorization"),
            HeaderValue::from_str(&format!("Bearer {token}")).expect("valid header value"),
        )
    }

    /// Registers a user through the API and returns a real token from login.
    async fn register_and_login(server: &TestServer) -> String {
        let credentials = json!({
            "username": "bob",
            "password": "SuperSecret1"
        });

        server
            .post("/auth/register")
            .json(&credentials)
            .await
            .assert_status(StatusCode::CREATED);

        let response = server.post("/auth/login").json(&credentials).await;
        response.assert_status_ok();

        let body: Value = response.json();
        body["access_token"]
            .as_str()
            .expect("login should return a token")
            .to_string()
    }

    // ============================================================
    // The gate itself
    // ============================================================

    #[sqlx::test]
    async fn test_items_require_a_token(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let response = server.get("/api/items").await;

        response.assert_status_unauthorized();
        // the rejection is a challenge: clients should re-authenticate,
        // not retry the same request
        let challenge = response.headers().get("www-authenticate");
        assert_eq!(challenge.and_then(|v| v.to_str().ok()), Some("Bearer"));

        Ok(())
    }

    #[sqlx::test]
    async fn test_garbage_token_is_rejected(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let (name, value) = bearer("not-a-token");
        let response = server.get("/api/items").add_header(name, value).await;

        response.assert_status_unauthorized();
        Ok(())
    }

    #[sqlx::test]
    async fn test_tampered_token_is_rejected(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let token = register_and_login(&server).await;

        // corrupt one character in the middle of the token
        let position = token.len() / 2;
        let mut bytes = token.into_bytes();
        bytes[position] = if bytes[position] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).expect("still ascii");

        let (name, value) = bearer(&tampered);
        let response = server.get("/api/items").add_header(name, value).await;

        response.assert_status_unauthorized();
        Ok(())
    }

    #[sqlx::test]
    async fn test_expired_token_is_rejected(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        // signed with the right secret, but its lifetime is already over
        let expired = create_test_jwt("bob", Duration::minutes(-31));

        let (name, value) = bearer(&expired);
        let response = server.get("/api/items").add_header(name, value).await;

        response.assert_status_unauthorized();
        let challenge = response.headers().get("www-authenticate");
        assert_eq!(challenge.and_then(|v| v.to_str().ok()), Some("Bearer"));

        Ok(())
    }

    #[sqlx::test]
    async fn test_every_item_verb_is_gated(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let body = json!({"name": "Widget", "price": 9.99});

        server.get("/api/items").await.assert_status_unauthorized();
        server.get("/api/items/1").await.assert_status_unauthorized();
        server
            .post("/api/items")
            .json(&body)
            .await
            .assert_status_unauthorized();
        server
            .put("/api/items/1")
            .json(&body)
            .await
            .assert_status_unauthorized();
        server
            .delete("/api/items/1")
            .await
            .assert_status_unauthorized();

        Ok(())
    }

    // ============================================================
    // CRUD with a valid token
    // ============================================================

    #[sqlx::test]
    async fn test_item_crud_round_trip(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let token = register_and_login(&server).await;

        // create
        let (name, value) = bearer(&token);
        let response = server
            .post("/api/items")
            .add_header(name, value)
            .json(&json!({
                "name": "Widget",
                "description": "A fine widget",
                "price": 9.99
            }))
            .await;
        response.assert_status(StatusCode::CREATED);
        let created: Value = response.json();
        let item_id = created["id"].as_i64().expect("created item has an id");
        assert_eq!(created["name"], "Widget");

        // list
        let (name, value) = bearer(&token);
        let response = server.get("/api/items").add_header(name, value).await;
        response.assert_status_ok();
        let listed: Value = response.json();
        assert_eq!(listed.as_array().map(|items| items.len()), Some(1));

        // read
        let (name, value) = bearer(&token);
        let response = server
            .get(&format!("/api/items/{item_id}"))
            .add_header(name, value)
            .await;
        response.assert_status_ok();
        let fetched: Value = response.json();
        assert_eq!(fetched["description"], "A fine widget");

        // update (full replace)
        let (name, value) = bearer(&token);
        let response = server
            .put(&format!("/api/items/{item_id}"))
            .add_header(name, value)
            .json(&json!({
                "name": "Widget Mk2",
                "description": null,
                "price": 19.99
            }))
            .await;
        response.assert_status_ok();
        let updated: Value = response.json();
        assert_eq!(updated["name"], "Widget Mk2");
        assert_eq!(updated["description"], Value::Null);
        assert_eq!(updated["price"], 19.99);

        // delete
        let (name, value) = bearer(&token);
        let response = server
            .delete(&format!("/api/items/{item_id}"))
            .add_header(name, value)
            .await;
        response.assert_status(StatusCode::NO_CONTENT);

        // gone
        let (name, value) = bearer(&token);
        let response = server
            .get(&format!("/api/items/{item_id}"))
            .add_header(name, value)
            .await;
        response.assert_status_not_found();

        Ok(())
    }

    #[sqlx::test]
    async fn test_get_unknown_item(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let token = register_and_login(&server).await;

        let (name, value) = bearer(&token);
        let response = server.get("/api/items/9999").add_header(name, value).await;

        response.assert_status_not_found();
        let body: Value = response.json();
        assert_eq!(body["error"], "Item not found");

        Ok(())
    }

    #[sqlx::test]
    async fn test_update_unknown_item(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let token = register_and_login(&server).await;

        let (name, value) = bearer(&token);
        let response = server
            .put("/api/items/9999")
            .add_header(name, value)
            .json(&json!({"name": "Ghost", "price": 1.0}))
            .await;

        response.assert_status_not_found();
        Ok(())
    }

    #[sqlx::test]
    async fn test_delete_unknown_item(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let token = register_and_login(&server).await;

        let (name, value) = bearer(&token);
        let response = server
            .delete("/api/items/9999")
            .add_header(name, value)
            .await;

        response.assert_status_not_found();
        Ok(())
    }

    #[sqlx::test]
    async fn test_create_item_negative_price(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let token = register_and_login(&server).await;

        let (name, value) = bearer(&token);
        let response = server
            .post("/api/items")
            .add_header(name, value)
            .json(&json!({"name": "Widget", "price": -1.0}))
            .await;

        response.assert_status_bad_request();
        Ok(())
    }

    #[sqlx::test]
    async fn test_create_item_empty_name(pool: SqlitePool) -> sqlx::Result<()> {
        let state = create_test_state(pool);
        let server = create_test_server(state);

        let token = register_and_login(&server).await;

        let (name, value) = bearer(&token);
        let response = server
            .post("/api/items")
            .add_header(name, value)
            .json(&json!({"name": "", "price": 1.0}))
            .await;

        response.assert_status_bad_request();
        Ok(())
    }
}
