//! # 請求書ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /invoices` - 請求書一覧
//! - `GET /invoices/{id}` - 請求書詳細（発行先企業付き）
//! - `POST /invoices` - 請求書作成
//! - `PUT /invoices/{id}` - 金額・支払状態の更新
//! - `DELETE /invoices/{id}` - 請求書削除
//!
//! `{id}` が整数でない場合は 400 を返す。

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State},
   http::StatusCode,
   response::IntoResponse,
};
use biztime_domain::{
   clock::Clock,
   company::CompanyCode,
   invoice::{InvoiceChanges, InvoiceId, InvoiceSummary, NewInvoice},
};
use biztime_infra::repository::InvoiceRepository;
use serde::{Deserialize, Serialize};

use super::DeletedResponse;
use crate::{error::ApiError, extract::JsonBody};

/// 請求書 API の共有状態
pub struct InvoiceState {
   pub invoice_repository: Arc<dyn InvoiceRepository>,
   /// 支払日（今日）の取得元
   pub clock:              Arc<dyn Clock>,
}

// --- リクエスト/レスポンス型 ---

/// 請求書作成リクエスト
#[derive(Debug, Deserialize)]
pub struct CreateInvoiceRequest {
   pub comp_code: String,
   pub amt:       f64,
}

/// 請求書更新リクエスト
#[derive(Debug, Deserialize)]
pub struct UpdateInvoiceRequest {
   pub amt:  f64,
   pub paid: bool,
}

/// 請求書一覧レスポンス
#[derive(Debug, Serialize)]
pub struct InvoicesResponse {
   pub invoices: Vec<InvoiceSummary>,
}

/// 請求書単体レスポンス（`{"invoice": ...}`）
#[derive(Debug, Serialize)]
pub struct InvoiceResponse<T> {
   pub invoice: T,
}

// --- ハンドラ ---

/// GET /invoices
#[tracing::instrument(skip_all)]
pub async fn list_invoices(
   State(state): State<Arc<InvoiceState>>,
) -> Result<impl IntoResponse, ApiError> {
   let invoices = state.invoice_repository.find_all().await?;

   Ok(Json(InvoicesResponse { invoices }))
}

/// GET /invoices/{id}
///
/// ## レスポンス
///
/// - `200 OK`: 請求書 + `company`
/// - `400 Bad Request`: `id` が整数でない
/// - `404 Not Found`: 請求書が存在しない
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_invoice(
   State(state): State<Arc<InvoiceState>>,
   Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
   let id: InvoiceId = id.parse()?;
   let invoice = state
      .invoice_repository
      .find_detail(id)
      .await?
      .ok_or_else(|| ApiError::invoice_not_found(id))?;

   Ok(Json(InvoiceResponse { invoice }))
}

/// POST /invoices
///
/// `add_date` は支払日と同じ Clock の今日の日付。`paid`, `paid_date` は DB のデフォルト値になる。
/// `amt <= 0` や存在しない企業は DB の制約違反として 500 になる。
#[tracing::instrument(skip_all, fields(comp_code = %req.comp_code))]
pub async fn create_invoice(
   State(state): State<Arc<InvoiceState>>,
   JsonBody(req): JsonBody<CreateInvoiceRequest>,
) -> Result<impl IntoResponse, ApiError> {
   let new_invoice = NewInvoice {
      comp_code: CompanyCode::new(req.comp_code),
      amt:       req.amt,
      add_date:  state.clock.today(),
   };

   let invoice = state.invoice_repository.insert(&new_invoice).await?;
   tracing::info!(id = %invoice.id, "請求書を作成しました");

   Ok((StatusCode::CREATED, Json(InvoiceResponse { invoice })))
}

/// PUT /invoices/{id}
///
/// 支払日はリポジトリがトランザクション内で現在の状態から決める。
///
/// ## レスポンス
///
/// - `200 OK`: 更新後の請求書
/// - `400 Bad Request`: `id` が整数でない、ボディが不正
/// - `404 Not Found`: 請求書が存在しない
#[tracing::instrument(skip_all, fields(%id, paid = req.paid))]
pub async fn update_invoice(
   State(state): State<Arc<InvoiceState>>,
   Path(id): Path<String>,
   JsonBody(req): JsonBody<UpdateInvoiceRequest>,
) -> Result<impl IntoResponse, ApiError> {
   let id: InvoiceId = id.parse()?;
   let changes = InvoiceChanges {
      amt:  req.amt,
      paid: req.paid,
   };

   let invoice = state
      .invoice_repository
      .update(id, &changes, state.clock.today())
      .await?
      .ok_or_else(|| ApiError::invoice_not_found(id))?;

   Ok(Json(InvoiceResponse { invoice }))
}

/// DELETE /invoices/{id}
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_invoice(
   State(state): State<Arc<InvoiceState>>,
   Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
   let id: InvoiceId = id.parse()?;
   if !state.invoice_repository.delete(id).await? {
      return Err(ApiError::invoice_not_found(id));
   }
   tracing::info!(%id, "請求書を削除しました");

   Ok(Json(DeletedResponse::new()))
}
