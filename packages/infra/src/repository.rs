//! # リポジトリ実装
//!
//! 企業・請求書・業種ごとのリポジトリトレイトと、その PostgreSQL 実装を提供する。
//!
//! ## 設計方針
//!
//! - **トレイト経由の注入**: ハンドラは `Arc<dyn XxxRepository>` を受け取り、
//!   テストではスタブ実装に差し替える
//! - **パラメータ化クエリ**: 値はすべて `$n` でバインドする
//! - **0 行は `None`**: 主キー検索・更新・削除で対象行がなかった場合は
//!   エラーではなく `Option` / `bool` で返し、404 への変換は API 層が行う

pub mod company_repository;
pub mod industry_repository;
pub mod invoice_repository;

pub use company_repository::{CompanyRepository, PostgresCompanyRepository};
pub use industry_repository::{IndustryRepository, PostgresIndustryRepository};
pub use invoice_repository::{InvoiceRepository, PostgresInvoiceRepository};
