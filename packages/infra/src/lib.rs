//! # BizTime インフラ層
//!
//! PostgreSQL との接続とリポジトリ実装を提供する。
//!
//! ## 責務
//!
//! - **データベース接続**: 接続プールの作成とマイグレーション適用
//! - **リポジトリ実装**: 企業・請求書・業種ごとのパラメータ化クエリ
//! - **エラー変換**: `sqlx::Error` を [`InfraError`] に包み、発生箇所のスパンを記録する
//!
//! ## モジュール構成
//!
//! - [`db`] - 接続プール作成・マイグレーション
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトと PostgreSQL 実装
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use biztime_infra::{db, repository::PostgresCompanyRepository};
//!
//! let pool = db::create_pool("postgres://localhost/biztime", 5).await?;
//! let companies = PostgresCompanyRepository::new(pool.clone());
//! ```

pub mod db;
pub mod error;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
