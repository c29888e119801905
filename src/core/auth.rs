//! Token issuance and verification, plus the bearer authentication middleware
//! that gates the protected routes.

use crate::core::{AppError, AppState};
use axum::{body::Body, extract::Request, extract::State, http, http::Response, middleware::Next};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Payload carried by an access token: subject plus issue/expiry instants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub exp: usize, // Expiry time of the token
    pub iat: usize, // Issued at time of the token
    pub sub: String,
}

/// Signing material and token lifetime, derived once at startup from the
/// configured secret. Passed into [`AppState`] explicitly so tests can run
/// with their own secrets.
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    algorithm: Algorithm,
    token_ttl: Duration,
}

impl TokenKeys {
    pub fn new(secret: &str, algorithm: Algorithm, token_ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            algorithm,
            token_ttl,
        }
    }

    /// Signs a token for `subject` expiring `token_ttl` from now.
    ///
    /// The payload is signed, not encrypted: any holder can base64-decode the
    /// subject and expiry, only tampering is detectable.
    #[instrument(skip(self))]
    pub fn issue(&self, subject: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            exp: (now + self.token_ttl).timestamp() as usize,
            iat: now.timestamp() as usize,
            sub: subject.to_string(),
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding)
    }

    /// Checks signature and expiry and returns the decoded claims.
    ///
    /// Expiry is exact: a token is invalid from the instant `exp` is reached,
    /// with no leeway window. Every failure mode (bad signature, malformed
    /// token, expired) collapses into the returned error; callers surface one
    /// uniform rejection.
    #[instrument(skip(self, token))]
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding, &validation)?;

        // jsonwebtoken only rejects exp < now; `exp` itself must already be
        // an invalid instant so that a zero-lifetime token never verifies
        if data.claims.exp as i64 <= Utc::now().timestamp() {
            return Err(ErrorKind::ExpiredSignature.into());
        }

        Ok(data.claims)
    }
}

/// Bearer-token gate in front of the protected routes.
///
/// Extracts `Authorization: Bearer <token>`, verifies it, and inserts the
/// decoded [`Claims`] into the request extensions so handlers never re-verify.
/// Missing or invalid tokens are rejected with a 401 challenge before the
/// handler runs.
#[instrument(skip(state, req, next))]
pub async fn authentication_middleware(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response<Body>, AppError> {
    debug!("Running authentication middleware");
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let token = match auth_header.and_then(|value| value.strip_prefix("Bearer ")) {
        Some(token) => token,
        None => {
            warn!("Missing or malformed authorization header");
            return Err(AppError::unauthorized_challenge("Missing bearer token"));
        }
    };

    let claims = match state.token_keys.verify(token) {
        Ok(claims) => claims,
        Err(err) => {
            // expired vs forged is visible here only; the client sees one category
            warn!(reason = %err, "Rejected bearer token");
            return Err(AppError::unauthorized_challenge("Invalid or expired token"));
        }
    };

    debug!(subject = %claims.sub, "Request authenticated");
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
