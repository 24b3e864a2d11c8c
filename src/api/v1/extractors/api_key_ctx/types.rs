/*
 * Responsibility
 * - Handler から見える「API key を提示したリクエスト」のコンテキスト型
 * - middleware が header を parse して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - key が既知か・有効かの検証はここでは行わない (shape のみ)
 */
use std::fmt;

use crate::services::auth::key_fingerprint;

/// API key presented by the caller, as extracted from `Authorization: ApiKey <key>`.
#[derive(Clone)]
pub struct ApiKeyCtx {
    key: String,
    fingerprint: String,
}

impl ApiKeyCtx {
    pub fn new(key: String) -> Self {
        let fingerprint = key_fingerprint(&key);
        Self { key, fingerprint }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}

// key は Debug 出力に含めない (tracing の `?ctx` で漏れないように)
impl fmt::Debug for ApiKeyCtx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiKeyCtx")
            .field("fingerprint", &self.fingerprint)
            .finish_non_exhaustive()
    }
}
