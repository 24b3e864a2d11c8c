/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - v1 配下は全て API key 必須 (middleware::auth::api_key を route 全体に適用)
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::whoami::whoami;
use crate::middleware;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    let router = Router::new().route("/whoami", get(whoami));

    middleware::auth::api_key::apply(router)
}
