/*
 * Responsibility
 * - GET /api/v1/whoami
 * - 提示された API key の fingerprint を返す (key 自体は返さない)
 */
use axum::Json;
use serde::Serialize;

use crate::api::v1::extractors::ApiKeyCtxExtractor;

#[derive(Debug, Serialize)]
pub struct WhoamiResponse {
    pub key_fingerprint: String,
}

pub async fn whoami(ApiKeyCtxExtractor(ctx): ApiKeyCtxExtractor) -> Json<WhoamiResponse> {
    Json(WhoamiResponse {
        key_fingerprint: ctx.fingerprint().to_string(),
    })
}
