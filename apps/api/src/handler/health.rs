//! # ヘルスチェックハンドラ
//!
//! ```text
//! GET /health
//! ```
//!
//! データベースには接続せず、プロセスの稼働だけを返す。
//!
//! ```json
//! { "status": "healthy", "version": "0.1.0" }
//! ```

use axum::Json;
use biztime_shared::HealthResponse;

/// ヘルスチェックエンドポイント
///
/// 常に 200 OK を返す。`version` は `Cargo.toml` で定義されたバージョン。
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}
