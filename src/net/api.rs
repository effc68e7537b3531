//! HTTP auth client for the `/api/v1` backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Network` since these
//! endpoints are only meaningful in the browser.
//!
//! The `AuthApi` trait is the seam between the session store and the
//! transport; the store only ever sees typed endpoint results, so tests drive
//! it with fake implementations.

#![allow(clippy::unused_async)]

use super::types::{ApiError, LoginResponse, MeResponse, RegisterResponse};

/// The three auth endpoints the session layer talks to.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `POST /api/v1/auth/login`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure or a malformed success
    /// envelope. A rejected credential pair is `Ok(Rejected)`, not an error.
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError>;

    /// `POST /api/v1/auth/register`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure.
    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisterResponse, ApiError>;

    /// `GET /api/v1/auth/me`, authorized with the current access token.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure.
    async fn current_user(&self, access_token: &str) -> Result<MeResponse, ApiError>;
}

/// `gloo-net` implementation of [`AuthApi`].
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthApi;

impl AuthApi for HttpAuthApi {
    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let envelope = post_envelope(
                "/api/v1/auth/login",
                &serde_json::json!({"username": username, "password": password}),
            )
            .await?;
            super::types::decode_login(envelope)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username, password);
            Err(server_side())
        }
    }

    async fn register(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<RegisterResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let envelope = post_envelope(
                "/api/v1/auth/register",
                &serde_json::json!({"username": username, "email": email, "password": password}),
            )
            .await?;
            Ok(super::types::decode_register(envelope))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (username, email, password);
            Err(server_side())
        }
    }

    async fn current_user(&self, access_token: &str) -> Result<MeResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get("/api/v1/auth/me")
                .header("Authorization", &format!("Bearer {access_token}"))
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            let envelope = resp
                .json::<super::types::Envelope>()
                .await
                .map_err(|e| ApiError::Malformed(e.to_string()))?;
            Ok(super::types::decode_me(envelope))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = access_token;
            Err(server_side())
        }
    }
}

/// POST a JSON body and decode the response envelope.
///
/// Rejections arrive as non-2xx statuses with an envelope body, so the body
/// is decoded regardless of status; only a missing or undecodable body is an
/// error.
#[cfg(feature = "hydrate")]
async fn post_envelope(
    url: &str,
    body: &serde_json::Value,
) -> Result<super::types::Envelope, ApiError> {
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    resp.json::<super::types::Envelope>()
        .await
        .map_err(|e| ApiError::Malformed(e.to_string()))
}

#[cfg(not(feature = "hydrate"))]
fn server_side() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}
