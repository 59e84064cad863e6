//! Tower authentication middleware.
//!
//! `AuthLayer` and `AuthService` wrap any inner service with bearer-token
//! validation. Generic over [`TokenValidator`] — plug in any identity
//! provider.

use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::response::IntoResponse;
use http::{Request, StatusCode};
use tower::{Layer, Service};

use crate::{AuthConfig, AuthenticatedUser, TokenValidator};

/// Tower `Layer` that wraps services with token authentication.
pub struct AuthLayer<V: TokenValidator> {
    validator: Arc<V>,
    config: AuthConfig,
}

impl<V: TokenValidator> Clone for AuthLayer<V> {
    fn clone(&self) -> Self {
        Self {
            validator: self.validator.clone(),
            config: self.config.clone(),
        }
    }
}

impl<V: TokenValidator> AuthLayer<V> {
    /// Create a new auth layer with the given validator and config.
    pub fn new(validator: Arc<V>, config: AuthConfig) -> Self {
        Self { validator, config }
    }
}

impl<V: TokenValidator, S> Layer<S> for AuthLayer<V> {
    type Service = AuthService<V, S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthService {
            inner,
            validator: self.validator.clone(),
            config: self.config.clone(),
        }
    }
}

/// Tower `Service` that validates tokens before forwarding requests.
///
/// On successful validation, inserts [`AuthenticatedUser`] into request
/// extensions where it's available to downstream handlers. With auth
/// disabled, the anonymous user is inserted instead so handlers always
/// find an identity.
pub struct AuthService<V: TokenValidator, S> {
    inner: S,
    validator: Arc<V>,
    config: AuthConfig,
}

impl<V: TokenValidator, S: Clone> Clone for AuthService<V, S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            validator: self.validator.clone(),
            config: self.config.clone(),
        }
    }
}

impl<V, S> Service<Request<Body>> for AuthService<V, S>
where
    V: TokenValidator,
    S: Service<Request<Body>, Error = Infallible> + Clone + Send + 'static,
    S::Response: IntoResponse,
    S::Future: Send,
{
    type Response = axum::response::Response;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<Body>) -> Self::Future {
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);

        let validator = self.validator.clone();
        let config = self.config.clone();

        Box::pin(async move {
            // Dev mode — no auth required
            if !config.enabled {
                req.extensions_mut().insert(AuthenticatedUser::anonymous());
                let resp = inner
                    .call(req)
                    .await
                    .unwrap_or_else(|infallible| match infallible {});
                return Ok(resp.into_response());
            }

            let token = match bearer_token(&req) {
                Some(t) => t.to_string(),
                None => return Ok(unauthorized_response("missing or invalid bearer token")),
            };

            match validator.validate(&token).await {
                Ok(user) => {
                    req.extensions_mut().insert(user);
                    let resp = inner
                        .call(req)
                        .await
                        .unwrap_or_else(|infallible| match infallible {});
                    Ok(resp.into_response())
                }
                Err(auth_err) => {
                    log::warn!("authentication failed: {auth_err}");
                    Ok(unauthorized_response(&auth_err.to_string()))
                }
            }
        })
    }
}

/// Extract the bearer token from the Authorization header.
fn bearer_token(req: &Request<Body>) -> Option<&str> {
    req.headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
}

/// Build a 401 Unauthorized response in the API error envelope.
fn unauthorized_response(message: &str) -> axum::response::Response {
    let body = serde_json::json!({
        "error": {
            "category": "authentication",
            "message": message,
        }
    });

    let mut response = (
        StatusCode::UNAUTHORIZED,
        [(http::header::CONTENT_TYPE, "application/json")],
        serde_json::to_string(&body).unwrap_or_default(),
    )
        .into_response();

    if let Ok(value) = http::HeaderValue::from_str("Bearer") {
        response
            .headers_mut()
            .insert(http::header::WWW_AUTHENTICATE, value);
    }

    response
}
