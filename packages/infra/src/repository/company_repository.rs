//! # CompanyRepository
//!
//! 企業の永続化と、企業・業種の関連付けを担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **スラッグの保存**: 作成・更新時に企業名から導出した slug を `companies.slug` に書き込む
//! - **カスケード削除**: 企業削除時の請求書・業種関連の削除は DB の `ON DELETE CASCADE` に任せる

use async_trait::async_trait;
use biztime_domain::{
   company::{Company, CompanyChanges, CompanyCode, CompanyDetail, CompanySummary, NewCompany},
   industry::{CompanyIndustry, Industry, IndustryCode},
   invoice::InvoiceId,
};
use sqlx::PgPool;

use crate::error::InfraError;

/// 企業リポジトリトレイト
#[async_trait]
pub trait CompanyRepository: Send + Sync {
   /// 全企業をコード順で取得する
   async fn find_all(&self) -> Result<Vec<CompanySummary>, InfraError>;

   /// 企業を、請求書 ID 一覧と関連業種付きで取得する
   async fn find_detail(&self, code: &CompanyCode) -> Result<Option<CompanyDetail>, InfraError>;

   /// 企業を挿入する
   async fn insert(&self, company: &NewCompany) -> Result<Company, InfraError>;

   /// 企業の名前と説明を更新する
   ///
   /// 対象が存在しない場合は `None` を返す。
   async fn update(
      &self,
      code: &CompanyCode,
      changes: &CompanyChanges,
   ) -> Result<Option<Company>, InfraError>;

   /// 企業を削除する
   ///
   /// 削除した行があれば `true` を返す。
   async fn delete(&self, code: &CompanyCode) -> Result<bool, InfraError>;

   /// 企業と業種を関連付ける
   async fn add_industry(
      &self,
      code: &CompanyCode,
      industry_code: &IndustryCode,
   ) -> Result<CompanyIndustry, InfraError>;
}

#[derive(sqlx::FromRow)]
struct CompanyRow {
   code:        String,
   name:        String,
   description: Option<String>,
}

impl From<CompanyRow> for Company {
   fn from(row: CompanyRow) -> Self {
      Self {
         code:        CompanyCode::new(row.code),
         name:        row.name,
         description: row.description,
      }
   }
}

/// PostgreSQL 実装の CompanyRepository
#[derive(Debug, Clone)]
pub struct PostgresCompanyRepository {
   pool: PgPool,
}

impl PostgresCompanyRepository {
   /// 新しいリポジトリインスタンスを作成
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl CompanyRepository for PostgresCompanyRepository {
   #[tracing::instrument(skip_all, level = "debug")]
   async fn find_all(&self) -> Result<Vec<CompanySummary>, InfraError> {
      let rows: Vec<(String, String)> = sqlx::query_as(
         r#"
         SELECT code, name
         FROM companies
         ORDER BY code
         "#,
      )
      .fetch_all(&self.pool)
      .await?;

      Ok(rows
         .into_iter()
         .map(|(code, name)| CompanySummary {
            code: CompanyCode::new(code),
            name,
         })
         .collect())
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%code))]
   async fn find_detail(&self, code: &CompanyCode) -> Result<Option<CompanyDetail>, InfraError> {
      let row: Option<CompanyRow> = sqlx::query_as(
         r#"
         SELECT code, name, description
         FROM companies
         WHERE code = $1
         "#,
      )
      .bind(code.as_str())
      .fetch_optional(&self.pool)
      .await?;

      let Some(row) = row else {
         return Ok(None);
      };

      let invoices: Vec<i32> = sqlx::query_scalar(
         r#"
         SELECT id
         FROM invoices
         WHERE comp_code = $1
         ORDER BY id
         "#,
      )
      .bind(code.as_str())
      .fetch_all(&self.pool)
      .await?;

      let industries: Vec<(String, String)> = sqlx::query_as(
         r#"
         SELECT i.code, i.industry
         FROM industries i
         JOIN companies_industries ci ON i.code = ci.industry_code
         WHERE ci.company_code = $1
         ORDER BY i.code
         "#,
      )
      .bind(code.as_str())
      .fetch_all(&self.pool)
      .await?;

      Ok(Some(CompanyDetail {
         company:    row.into(),
         invoices:   invoices.into_iter().map(InvoiceId::new).collect(),
         industries: industries
            .into_iter()
            .map(|(code, industry)| Industry {
               code: IndustryCode::new(code),
               industry,
            })
            .collect(),
      }))
   }

   #[tracing::instrument(skip_all, level = "debug", fields(code = %company.code))]
   async fn insert(&self, company: &NewCompany) -> Result<Company, InfraError> {
      let row: CompanyRow = sqlx::query_as(
         r#"
         INSERT INTO companies (code, name, description, slug)
         VALUES ($1, $2, $3, $4)
         RETURNING code, name, description
         "#,
      )
      .bind(company.code.as_str())
      .bind(&company.name)
      .bind(company.description.as_deref())
      .bind(company.slug().as_str())
      .fetch_one(&self.pool)
      .await?;

      Ok(row.into())
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%code))]
   async fn update(
      &self,
      code: &CompanyCode,
      changes: &CompanyChanges,
   ) -> Result<Option<Company>, InfraError> {
      let row: Option<CompanyRow> = sqlx::query_as(
         r#"
         UPDATE companies
         SET name = $1, description = $2, slug = $3
         WHERE code = $4
         RETURNING code, name, description
         "#,
      )
      .bind(&changes.name)
      .bind(changes.description.as_deref())
      .bind(changes.slug().as_str())
      .bind(code.as_str())
      .fetch_optional(&self.pool)
      .await?;

      Ok(row.map(Company::from))
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%code))]
   async fn delete(&self, code: &CompanyCode) -> Result<bool, InfraError> {
      let result = sqlx::query("DELETE FROM companies WHERE code = $1")
         .bind(code.as_str())
         .execute(&self.pool)
         .await?;

      Ok(result.rows_affected() > 0)
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%code, %industry_code))]
   async fn add_industry(
      &self,
      code: &CompanyCode,
      industry_code: &IndustryCode,
   ) -> Result<CompanyIndustry, InfraError> {
      let (company, industry): (String, String) = sqlx::query_as(
         r#"
         INSERT INTO companies_industries (company_code, industry_code)
         VALUES ($1, $2)
         RETURNING company_code, industry_code
         "#,
      )
      .bind(code.as_str())
      .bind(industry_code.as_str())
      .fetch_one(&self.pool)
      .await?;

      Ok(CompanyIndustry {
         company_code:  CompanyCode::new(company),
         industry_code: IndustryCode::new(industry),
      })
   }
}
