/*
 * Responsibility
 * - middleware の公開インターフェース
 * - auth (API key), http (request id / trace / limits)
 */
pub mod auth;
pub mod http;
