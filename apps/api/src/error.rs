//! # API エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換を行う。
//!
//! ## レスポンス形式
//!
//! すべてのエラーは同じ形のボディを返す:
//!
//! ```json
//! { "error": "Company not found", "message": "Company with code 'nope' not found" }
//! ```
//!
//! ## エラーの階層
//!
//! ```text
//! sqlx::Error ──▶ InfraError ──┐
//!                              ├──▶ ApiError ──▶ HTTP レスポンス (StatusCode + JSON)
//!                 DomainError ─┘
//! ```
//!
//! ## マッピング
//!
//! | ApiError | HTTP Status |
//! |----------|-------------|
//! | NotFound | 404 |
//! | RouteNotFound | 404 |
//! | BadRequest | 400 |
//! | Database | 500 |

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use biztime_domain::{DomainError, company::CompanyCode, invoice::InvoiceId};
use biztime_infra::InfraError;
use biztime_shared::ErrorResponse;
use thiserror::Error;

/// API 層で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// 主キーで検索した行が存在しない（404 Not Found）
   #[error("{message}")]
   NotFound {
      /// エンティティ名（`"Company"`, `"Invoice"`）
      entity:  &'static str,
      message: String,
   },

   /// どのルートにも一致しない（404 Not Found）
   #[error("Not Found")]
   RouteNotFound,

   /// リクエストボディやパスパラメータが不正（400 Bad Request）
   #[error("{0}")]
   BadRequest(String),

   /// データベースエラー（500 Internal Server Error）
   ///
   /// 制約違反も含め、DB のメッセージをそのまま返す。
   #[error("データベースエラー: {0}")]
   Database(#[from] InfraError),
}

impl ApiError {
   /// 企業が見つからない
   pub fn company_not_found(code: &CompanyCode) -> Self {
      Self::NotFound {
         entity:  "Company",
         message: format!("Company with code '{code}' not found"),
      }
   }

   /// 請求書が見つからない
   pub fn invoice_not_found(id: InvoiceId) -> Self {
      Self::NotFound {
         entity:  "Invoice",
         message: format!("Invoice with id '{id}' not found"),
      }
   }

   /// HTTP ステータスコード
   pub fn status(&self) -> StatusCode {
      match self {
         Self::NotFound { .. } | Self::RouteNotFound => StatusCode::NOT_FOUND,
         Self::BadRequest(_) => StatusCode::BAD_REQUEST,
         Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
      }
   }
}

impl From<DomainError> for ApiError {
   fn from(err: DomainError) -> Self {
      match err {
         DomainError::Validation(message) => Self::BadRequest(message),
      }
   }
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      let status = self.status();
      let body = match self {
         Self::NotFound { entity, message } => {
            ErrorResponse::new(format!("{entity} not found"), message)
         }
         Self::RouteNotFound => ErrorResponse::route_not_found(),
         Self::BadRequest(message) => ErrorResponse::bad_request(message),
         Self::Database(err) => {
            tracing::error!(
               error = %err,
               span_trace = %err.span_trace(),
               "データベースエラー"
            );
            ErrorResponse::internal_error(err.database_message())
         }
      };

      (status, Json(body)).into_response()
   }
}
