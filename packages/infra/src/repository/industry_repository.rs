//! # IndustryRepository
//!
//! 業種の永続化を担当するリポジトリ。

use async_trait::async_trait;
use biztime_domain::{
   company::CompanyCode,
   industry::{Industry, IndustryCode, IndustryWithCompanies, NewIndustry},
};
use sqlx::PgPool;

use crate::error::InfraError;

/// 業種リポジトリトレイト
#[async_trait]
pub trait IndustryRepository: Send + Sync {
   /// 全業種を、関連企業コードの集約付きでコード順に取得する
   async fn find_all_with_companies(&self) -> Result<Vec<IndustryWithCompanies>, InfraError>;

   /// 業種を挿入する
   async fn insert(&self, industry: &NewIndustry) -> Result<Industry, InfraError>;
}

/// PostgreSQL 実装の IndustryRepository
#[derive(Debug, Clone)]
pub struct PostgresIndustryRepository {
   pool: PgPool,
}

impl PostgresIndustryRepository {
   /// 新しいリポジトリインスタンスを作成
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl IndustryRepository for PostgresIndustryRepository {
   #[tracing::instrument(skip_all, level = "debug")]
   async fn find_all_with_companies(&self) -> Result<Vec<IndustryWithCompanies>, InfraError> {
      // LEFT JOIN のため、関連企業のない業種は ARRAY[NULL] になる
      let rows: Vec<(String, String, Vec<Option<String>>)> = sqlx::query_as(
         r#"
         SELECT
            i.code,
            i.industry,
            ARRAY_AGG(ci.company_code ORDER BY ci.company_code) AS companies
         FROM industries i
         LEFT JOIN companies_industries ci ON i.code = ci.industry_code
         GROUP BY i.code, i.industry
         ORDER BY i.code
         "#,
      )
      .fetch_all(&self.pool)
      .await?;

      Ok(rows
         .into_iter()
         .map(|(code, industry, companies)| IndustryWithCompanies {
            code: IndustryCode::new(code),
            industry,
            companies: companies
               .into_iter()
               .map(|c| c.map(CompanyCode::new))
               .collect(),
         })
         .collect())
   }

   #[tracing::instrument(skip_all, level = "debug", fields(code = %industry.code))]
   async fn insert(&self, industry: &NewIndustry) -> Result<Industry, InfraError> {
      let (code, label): (String, String) = sqlx::query_as(
         r#"
         INSERT INTO industries (code, industry)
         VALUES ($1, $2)
         RETURNING code, industry
         "#,
      )
      .bind(industry.code.as_str())
      .bind(&industry.industry)
      .fetch_one(&self.pool)
      .await?;

      Ok(Industry {
         code:     IndustryCode::new(code),
         industry: label,
      })
   }
}
