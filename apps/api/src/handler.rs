//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各リソースのハンドラはサブモジュールに配置し、ここで re-export する
//! - ハンドラは「取得・検証・更新・応答」の 1 シーケンスだけを行い、
//!   SQL はリポジトリ、支払日の決定はドメインに委譲する
//! - 失敗は [`ApiError`](crate::error::ApiError) で返し、`?` で伝播する
//!
//! ## モジュール構成
//!
//! ```text
//! handler.rs            # 親モジュール（re-export）
//! └── handler/
//!     ├── company.rs    # /companies
//!     ├── health.rs     # /health
//!     ├── industry.rs   # /industries
//!     └── invoice.rs    # /invoices
//! ```

use serde::Serialize;

pub mod company;
pub mod health;
pub mod industry;
pub mod invoice;

pub use company::{
   CompanyState,
   add_company_industry,
   create_company,
   delete_company,
   get_company,
   list_companies,
   update_company,
};
pub use health::health_check;
pub use industry::{IndustryState, create_industry, list_industries};
pub use invoice::{
   InvoiceState,
   create_invoice,
   delete_invoice,
   get_invoice,
   list_invoices,
   update_invoice,
};

/// 削除成功レスポンス（`{"status": "deleted"}`）
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
   pub status: &'static str,
}

impl DeletedResponse {
   pub fn new() -> Self {
      Self { status: "deleted" }
   }
}

impl Default for DeletedResponse {
   fn default() -> Self {
      Self::new()
   }
}
