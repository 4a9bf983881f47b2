//! # BizTime 共有ユーティリティ
//!
//! domain / infra / api の各クレートから利用される、ビジネスロジックを含まない
//! ユーティリティを提供する。
//!
//! - [`error_response`] - エラーレスポンスボディ
//! - [`health`] - ヘルスチェックレスポンス
//! - [`observability`] - トレーシング初期化とリクエスト追跡（`observability` feature）

pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::HealthResponse;
