//! # 業種ハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /industries` - 業種一覧（関連企業コード付き）
//! - `POST /industries` - 業種作成

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use biztime_domain::industry::{Industry, IndustryCode, IndustryWithCompanies, NewIndustry};
use biztime_infra::repository::IndustryRepository;
use serde::{Deserialize, Serialize};

use crate::{error::ApiError, extract::JsonBody};

/// 業種 API の共有状態
pub struct IndustryState {
   pub industry_repository: Arc<dyn IndustryRepository>,
}

/// 業種作成リクエスト
#[derive(Debug, Deserialize)]
pub struct CreateIndustryRequest {
   pub code:     String,
   pub industry: String,
}

/// 業種一覧レスポンス
#[derive(Debug, Serialize)]
pub struct IndustriesResponse {
   pub industries: Vec<IndustryWithCompanies>,
}

/// 業種単体レスポンス
#[derive(Debug, Serialize)]
pub struct IndustryResponse {
   pub industry: Industry,
}

/// GET /industries
///
/// 関連企業のない業種は `companies: [null]` になる。
#[tracing::instrument(skip_all)]
pub async fn list_industries(
   State(state): State<Arc<IndustryState>>,
) -> Result<impl IntoResponse, ApiError> {
   let industries = state.industry_repository.find_all_with_companies().await?;

   Ok(Json(IndustriesResponse { industries }))
}

/// POST /industries
#[tracing::instrument(skip_all, fields(code = %req.code))]
pub async fn create_industry(
   State(state): State<Arc<IndustryState>>,
   JsonBody(req): JsonBody<CreateIndustryRequest>,
) -> Result<impl IntoResponse, ApiError> {
   let new_industry = NewIndustry {
      code:     IndustryCode::new(req.code),
      industry: req.industry,
   };

   let industry = state.industry_repository.insert(&new_industry).await?;

   Ok((StatusCode::CREATED, Json(IndustryResponse { industry })))
}
