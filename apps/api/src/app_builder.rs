//! # ルーター構築
//!
//! ハンドラ・状態・ミドルウェアを 1 つの axum `Router` にまとめる。
//! サーバー起動（`bin/biztime.rs`）と統合テストの両方から使う。

use std::sync::Arc;

use axum::{
   Router,
   routing::{get, post},
};
use biztime_domain::clock::Clock;
use biztime_infra::repository::{
   CompanyRepository,
   IndustryRepository,
   InvoiceRepository,
   PostgresCompanyRepository,
   PostgresIndustryRepository,
   PostgresInvoiceRepository,
};
use biztime_shared::observability::{MakeRequestUuidV7, make_request_span};
use sqlx::PgPool;
use tower_http::{
   request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
   trace::TraceLayer,
};

use crate::{
   error::ApiError,
   handler::{
      CompanyState,
      IndustryState,
      InvoiceState,
      add_company_industry,
      create_company,
      create_industry,
      create_invoice,
      delete_company,
      delete_invoice,
      get_company,
      get_invoice,
      health_check,
      list_companies,
      list_industries,
      list_invoices,
      update_company,
      update_invoice,
   },
};

/// ルーターが依存するコンポーネント
pub struct AppDependencies {
   pub company_repository:  Arc<dyn CompanyRepository>,
   pub invoice_repository:  Arc<dyn InvoiceRepository>,
   pub industry_repository: Arc<dyn IndustryRepository>,
   pub clock:               Arc<dyn Clock>,
}

impl AppDependencies {
   /// 1 つの接続プールを共有する PostgreSQL 実装で構築する
   pub fn postgres(pool: PgPool, clock: Arc<dyn Clock>) -> Self {
      Self {
         company_repository: Arc::new(PostgresCompanyRepository::new(pool.clone())),
         invoice_repository: Arc::new(PostgresInvoiceRepository::new(pool.clone())),
         industry_repository: Arc::new(PostgresIndustryRepository::new(pool)),
         clock,
      }
   }
}

/// アプリケーション全体のルーターを構築する
///
/// どのルートにも一致しないリクエストは `{error: "Not Found", message: "Not Found"}` の 404 になる。
pub fn build_app(deps: AppDependencies) -> Router {
   let company_state = Arc::new(CompanyState {
      company_repository: deps.company_repository,
   });
   let invoice_state = Arc::new(InvoiceState {
      invoice_repository: deps.invoice_repository,
      clock:              deps.clock,
   });
   let industry_state = Arc::new(IndustryState {
      industry_repository: deps.industry_repository,
   });

   Router::new()
      .route("/health", get(health_check))
      .merge(
         Router::new()
            .route("/companies", get(list_companies).post(create_company))
            .route(
               "/companies/{code}",
               get(get_company).put(update_company).delete(delete_company),
            )
            .route("/companies/{code}/industries", post(add_company_industry))
            .with_state(company_state),
      )
      .merge(
         Router::new()
            .route("/invoices", get(list_invoices).post(create_invoice))
            .route(
               "/invoices/{id}",
               get(get_invoice).put(update_invoice).delete(delete_invoice),
            )
            .with_state(invoice_state),
      )
      .merge(
         Router::new()
            .route("/industries", get(list_industries).post(create_industry))
            .with_state(industry_state),
      )
      .fallback(route_not_found)
      // Request ID レイヤー（下に書いたものが外側）
      // 1. SetRequestIdLayer: X-Request-Id がなければ UUID v7 を発行
      // 2. TraceLayer: request_id を含むスパンを作成
      // 3. PropagateRequestIdLayer: レスポンスヘッダーに X-Request-Id をコピー
      .layer(PropagateRequestIdLayer::x_request_id())
      .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
      .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
}

async fn route_not_found() -> ApiError {
   ApiError::RouteNotFound
}
