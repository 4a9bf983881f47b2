//! # 企業ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /companies` - 企業一覧
//! - `GET /companies/{code}` - 企業詳細（請求書 ID と業種付き）
//! - `POST /companies` - 企業作成
//! - `PUT /companies/{code}` - 企業更新
//! - `DELETE /companies/{code}` - 企業削除（請求書・業種関連もカスケード削除）
//! - `POST /companies/{code}/industries` - 業種の関連付け

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State},
   http::StatusCode,
   response::IntoResponse,
};
use biztime_domain::{
   company::{CompanyChanges, CompanyCode, CompanySummary, NewCompany},
   industry::{CompanyIndustry, IndustryCode},
};
use biztime_infra::repository::CompanyRepository;
use serde::{Deserialize, Serialize};

use super::DeletedResponse;
use crate::{error::ApiError, extract::JsonBody};

/// 企業 API の共有状態
pub struct CompanyState {
   pub company_repository: Arc<dyn CompanyRepository>,
}

// --- リクエスト/レスポンス型 ---

/// 企業作成リクエスト
#[derive(Debug, Deserialize)]
pub struct CreateCompanyRequest {
   pub code:        String,
   pub name:        String,
   #[serde(default)]
   pub description: Option<String>,
}

/// 企業更新リクエスト
#[derive(Debug, Deserialize)]
pub struct UpdateCompanyRequest {
   pub name:        String,
   #[serde(default)]
   pub description: Option<String>,
}

/// 業種関連付けリクエスト
#[derive(Debug, Deserialize)]
pub struct AddIndustryRequest {
   pub industry_code: String,
}

/// 企業一覧レスポンス
#[derive(Debug, Serialize)]
pub struct CompaniesResponse {
   pub companies: Vec<CompanySummary>,
}

/// 企業単体レスポンス（`{"company": ...}`）
#[derive(Debug, Serialize)]
pub struct CompanyResponse<T> {
   pub company: T,
}

/// 業種関連付けレスポンス
#[derive(Debug, Serialize)]
pub struct AssociationResponse {
   pub association: CompanyIndustry,
}

// --- ハンドラ ---

/// GET /companies
#[tracing::instrument(skip_all)]
pub async fn list_companies(
   State(state): State<Arc<CompanyState>>,
) -> Result<impl IntoResponse, ApiError> {
   let companies = state.company_repository.find_all().await?;

   Ok(Json(CompaniesResponse { companies }))
}

/// GET /companies/{code}
///
/// ## レスポンス
///
/// - `200 OK`: 企業本体 + `invoices`（ID 昇順）+ `industries`（コード順）
/// - `404 Not Found`: 企業が存在しない
#[tracing::instrument(skip_all, fields(%code))]
pub async fn get_company(
   State(state): State<Arc<CompanyState>>,
   Path(code): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
   let code = CompanyCode::new(code);
   let company = state
      .company_repository
      .find_detail(&code)
      .await?
      .ok_or_else(|| ApiError::company_not_found(&code))?;

   Ok(Json(CompanyResponse { company }))
}

/// POST /companies
///
/// ## レスポンス
///
/// - `201 Created`: 作成した企業
/// - `400 Bad Request`: ボディが不正
/// - `500 Internal Server Error`: コード・名前の重複など
#[tracing::instrument(skip_all, fields(code = %req.code))]
pub async fn create_company(
   State(state): State<Arc<CompanyState>>,
   JsonBody(req): JsonBody<CreateCompanyRequest>,
) -> Result<impl IntoResponse, ApiError> {
   let new_company = NewCompany {
      code:        CompanyCode::new(req.code),
      name:        req.name,
      description: req.description,
   };

   let company = state.company_repository.insert(&new_company).await?;
   tracing::info!(code = %company.code, "企業を作成しました");

   Ok((StatusCode::CREATED, Json(CompanyResponse { company })))
}

/// PUT /companies/{code}
///
/// ## レスポンス
///
/// - `200 OK`: 更新後の企業
/// - `404 Not Found`: 企業が存在しない
#[tracing::instrument(skip_all, fields(%code))]
pub async fn update_company(
   State(state): State<Arc<CompanyState>>,
   Path(code): Path<String>,
   JsonBody(req): JsonBody<UpdateCompanyRequest>,
) -> Result<impl IntoResponse, ApiError> {
   let code = CompanyCode::new(code);
   let changes = CompanyChanges {
      name:        req.name,
      description: req.description,
   };

   let company = state
      .company_repository
      .update(&code, &changes)
      .await?
      .ok_or_else(|| ApiError::company_not_found(&code))?;

   Ok(Json(CompanyResponse { company }))
}

/// DELETE /companies/{code}
#[tracing::instrument(skip_all, fields(%code))]
pub async fn delete_company(
   State(state): State<Arc<CompanyState>>,
   Path(code): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
   let code = CompanyCode::new(code);
   if !state.company_repository.delete(&code).await? {
      return Err(ApiError::company_not_found(&code));
   }
   tracing::info!(%code, "企業を削除しました");

   Ok(Json(DeletedResponse::new()))
}

/// POST /companies/{code}/industries
///
/// 重複や存在しない業種は DB の制約違反として 500 になる。
#[tracing::instrument(skip_all, fields(%code, industry_code = %req.industry_code))]
pub async fn add_company_industry(
   State(state): State<Arc<CompanyState>>,
   Path(code): Path<String>,
   JsonBody(req): JsonBody<AddIndustryRequest>,
) -> Result<impl IntoResponse, ApiError> {
   let association = state
      .company_repository
      .add_industry(&CompanyCode::new(code), &IndustryCode::new(req.industry_code))
      .await?;

   Ok((StatusCode::CREATED, Json(AssociationResponse { association })))
}
