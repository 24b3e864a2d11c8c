use axum::extract::FromRequestParts;
use axum::http::{StatusCode, request::Parts};

use super::ApiKeyCtx;

/// Hands the `ApiKeyCtx` stored by `middleware::auth::api_key` to a handler.
///
/// A route without that middleware has nothing in its extensions; the request
/// is refused with a bare 401 rather than reaching the handler unauthenticated.
pub struct ApiKeyCtxExtractor(pub ApiKeyCtx);

impl<S> FromRequestParts<S> for ApiKeyCtxExtractor
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(ctx) = parts.extensions.get::<ApiKeyCtx>() else {
            tracing::error!(path = %parts.uri.path(), "ApiKeyCtx missing; api key middleware not applied");
            return Err(StatusCode::UNAUTHORIZED);
        };

        Ok(Self(ctx.clone()))
    }
}
