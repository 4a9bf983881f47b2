//! # BizTime API サーバー
//!
//! 企業・請求書・業種を HTTP + JSON で公開する API のライブラリ部分。
//!
//! ## 構成
//!
//! ```text
//! HTTP ──▶ Request ID / Trace レイヤー ──▶ JsonBody 抽出 ──▶ ハンドラ ──▶ リポジトリ ──▶ PostgreSQL
//!                                                             │
//!                                                             └──▶ ApiError ──▶ {error, message}
//! ```
//!
//! ## モジュール構成
//!
//! - [`app_builder`] - ルーター構築
//! - [`config`] - アプリケーション設定（環境変数からの読み込み）
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`extract`] - リクエストボディ抽出
//! - [`handler`] - HTTP リクエストハンドラ
//!
//! ## 依存関係
//!
//! - `biztime_domain`: エンティティ、支払状態の遷移、Clock
//! - `biztime_infra`: 接続プール、リポジトリ
//! - `biztime_shared`: トレーシング初期化、共通レスポンス型
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use biztime_api::app_builder::{AppDependencies, build_app};
//!
//! let app = build_app(AppDependencies::postgres(pool, Arc::new(SystemClock)));
//! axum::serve(listener, app).await?;
//! ```

pub mod app_builder;
pub mod config;
pub mod error;
pub mod extract;
pub mod handler;
