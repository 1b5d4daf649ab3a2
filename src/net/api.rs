//! REST client adapter for the ShotControl backend.
//!
//! Browser builds (`csr`) issue real HTTP calls via `gloo-net`, attach the
//! bearer credential from durable storage on every request, and translate
//! authentication failures centrally. Native builds get stubs that fail as
//! network errors so the crate compiles and tests run off the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` values instead of panics; a 401 tears
//! the persisted session down through the same chokepoint `logout` uses and
//! surfaces as `ApiError::SessionExpired`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Deserialize;

use crate::net::types::{LoginResponse, Movimentacao, NovaMovimentacaoRequest, Saldo, User};
use crate::state::session;
use crate::util::storage::Store;

/// Backend base path; override at compile time with `SHOTCONTROL_API_BASE`.
const BASE: &str = match option_env!("SHOTCONTROL_API_BASE") {
    Some(base) => base,
    None => "/api",
};

/// Failures produced by the client adapter.
#[derive(Clone, Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend answered 401; the persisted session was torn down.
    #[error("sessão expirada")]
    SessionExpired,
    /// Any other non-success status, with the backend message when present.
    #[error("{}", message.as_deref().unwrap_or("erro no servidor"))]
    Api { status: u16, message: Option<String> },
    /// The request never completed.
    #[error("falha de rede: {0}")]
    Network(String),
    /// A success body that does not match the expected schema.
    #[error("resposta inválida do servidor: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message for inline display: the backend's own message when it sent
    /// one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Api {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

/// Error body shape used by the backend: `{"message": "..."}`.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Map a non-success response to an `ApiError`.
///
/// A 401 clears the durable credential and user record here, so expiry takes
/// effect even if the originating page discards the error.
fn error_for_status(store: &Store, status: u16, body: Option<&str>) -> ApiError {
    if status == 401 {
        log::warn!("credencial rejeitada pelo servidor, encerrando sessão");
        session::clear_persisted(store);
        return ApiError::SessionExpired;
    }
    let message = body
        .and_then(|raw| serde_json::from_str::<ErrorBody>(raw).ok())
        .and_then(|b| b.message);
    ApiError::Api { status, message }
}

#[cfg(feature = "csr")]
fn url(path: &str) -> String {
    format!("{}{}", BASE, path)
}

/// Attach the bearer credential when one is durably present; requests go
/// out without the header otherwise, leaving rejection to the backend.
#[cfg(feature = "csr")]
fn authorized(store: &Store, builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match store.get(session::TOKEN_KEY) {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

#[cfg(feature = "csr")]
async fn decode<T: serde::de::DeserializeOwned>(
    store: &Store,
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !resp.ok() {
        let body = resp.text().await.ok();
        return Err(error_for_status(store, resp.status(), body.as_deref()));
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "csr")]
async fn get_json<T: serde::de::DeserializeOwned>(store: &Store, path: &str) -> Result<T, ApiError> {
    let resp = authorized(store, gloo_net::http::Request::get(&url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(store, resp).await
}

#[cfg(feature = "csr")]
async fn post_json<T: serde::de::DeserializeOwned>(
    store: &Store,
    path: &str,
    body: &impl serde::Serialize,
) -> Result<T, ApiError> {
    let resp = authorized(store, gloo_net::http::Request::post(&url(path)))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    decode(store, resp).await
}

#[cfg(not(feature = "csr"))]
fn offline<T>() -> Result<T, ApiError> {
    Err(ApiError::Network("indisponível fora do navegador".to_owned()))
}

/// Authenticate via `POST /auth/login`.
pub async fn login(store: &Store, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = serde_json::json!({ "email": email, "password": password });
        post_json(store, "/auth/login", &body).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (store, email, password);
        offline()
    }
}

/// Fetch every transaction via `GET /movimentacoes`.
pub async fn fetch_movimentacoes(store: &Store) -> Result<Vec<Movimentacao>, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json(store, "/movimentacoes").await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = store;
        offline()
    }
}

/// Fetch the current balance via `GET /movimentacoes/saldo`.
pub async fn fetch_saldo(store: &Store) -> Result<Saldo, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json(store, "/movimentacoes/saldo").await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = store;
        offline()
    }
}

/// Create a transaction via `POST /movimentacoes`.
pub async fn create_movimentacao(
    store: &Store,
    pedido: &NovaMovimentacaoRequest,
) -> Result<Movimentacao, ApiError> {
    #[cfg(feature = "csr")]
    {
        post_json(store, "/movimentacoes", pedido).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (store, pedido);
        offline()
    }
}

/// Fetch the registered users via `GET /users`.
pub async fn fetch_users(store: &Store) -> Result<Vec<User>, ApiError> {
    #[cfg(feature = "csr")]
    {
        get_json(store, "/users").await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = store;
        offline()
    }
}
