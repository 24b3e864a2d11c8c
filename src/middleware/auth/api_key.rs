//! `Authorization: ApiKey <key>` を parse → ApiKeyCtx を extensions に入れる
//!
//! key が既知かどうかは見ない。header の shape が正しければ通し、
//! handler は `ApiKeyCtxExtractor` で結果を受け取る。

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::ApiKeyCtx;
use crate::error::AppError;
use crate::services::auth::get_api_key;
use crate::state::AppState;

/// 渡された router の全 route に API key 認証を掛ける。
/// `api::v1::routes()` は適用済みなので、そこに重ねて掛けないこと。
///
/// 例：
/// ```ignore
/// let v1 = middleware::auth::api_key::apply(Router::new().route("/whoami", get(whoami)));
/// app = app.nest("/api/v1", v1);
/// ```
pub fn apply(router: Router<AppState>) -> Router<AppState> {
    router.layer(middleware::from_fn(api_key_middleware))
}

async fn api_key_middleware(mut req: Request<Body>, next: Next) -> Result<Response, AppError> {
    let key = match get_api_key(req.headers()) {
        Ok(key) => key,
        Err(err) => {
            // header の値そのものは log に出さない
            tracing::warn!(
                kind = err.kind(),
                method = %req.method(),
                path = %req.uri().path(),
                "api key rejected"
            );
            return Err(err.into());
        }
    };

    let ctx = ApiKeyCtx::new(key);
    tracing::debug!(fingerprint = ctx.fingerprint(), "api key accepted");

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(ctx);

    Ok(next.run(req).await)
}
