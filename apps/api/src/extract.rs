//! # リクエスト抽出
//!
//! axum 標準の `Json` 抽出の失敗を [`ApiError::BadRequest`] に揃える。

use axum::{
   Json,
   extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON リクエストボディ
///
/// Content-Type 不一致・構文エラー・フィールド不足などは
/// `{error: "Bad Request", message}` の 400 になる。
///
/// ```rust,ignore
/// pub async fn create_company(
///    State(state): State<Arc<CompanyState>>,
///    JsonBody(req): JsonBody<CreateCompanyRequest>,
/// ) -> Result<impl IntoResponse, ApiError> { ... }
/// ```
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
   S: Send + Sync,
   T: DeserializeOwned,
{
   type Rejection = ApiError;

   async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
      match Json::<T>::from_request(req, state).await {
         Ok(Json(value)) => Ok(Self(value)),
         Err(rejection) => {
            tracing::debug!(error = %rejection, "リクエストボディを解釈できません");
            Err(ApiError::BadRequest(rejection.body_text()))
         }
      }
   }
}
