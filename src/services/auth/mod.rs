/*
 * Responsibility
 * - Authorization ヘッダから API key を取り出す (shape の検証のみ)
 * - key そのものを露出させないための fingerprint
 */
pub mod api_key;
pub mod fingerprint;

pub use api_key::{API_KEY_SCHEME, ApiKeyError, get_api_key};
pub use fingerprint::key_fingerprint;
