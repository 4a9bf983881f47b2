//! # InvoiceRepository
//!
//! 請求書の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **更新はトランザクション内で行う**: 現在の支払状態の読み出し（`FOR UPDATE` で行ロック）から
//!   `UPDATE` までを 1 トランザクションにまとめ、同じ請求書への同時更新が
//!   互いの `paid_date` 判定を上書きしないようにする
//! - **支払日の決定はドメインに委譲**: [`PaymentState::transition`] を使う

use async_trait::async_trait;
use biztime_domain::{
   company::{Company, CompanyCode},
   invoice::{
      Invoice,
      InvoiceChanges,
      InvoiceDetail,
      InvoiceId,
      InvoiceSummary,
      NewInvoice,
      PaymentState,
   },
};
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::error::InfraError;

/// 請求書リポジトリトレイト
#[async_trait]
pub trait InvoiceRepository: Send + Sync {
   /// 全請求書を ID 順で取得する
   async fn find_all(&self) -> Result<Vec<InvoiceSummary>, InfraError>;

   /// 請求書を発行先企業付きで取得する
   async fn find_detail(&self, id: InvoiceId) -> Result<Option<InvoiceDetail>, InfraError>;

   /// 請求書を挿入する
   ///
   /// `add_date` は入力の値を使う。`paid`, `paid_date` は DB のデフォルト値になる。
   async fn insert(&self, invoice: &NewInvoice) -> Result<Invoice, InfraError>;

   /// 金額と支払状態を更新する
   ///
   /// `today` は未払い → 支払済みの遷移で `paid_date` に使う。
   /// 対象が存在しない場合は `None` を返す。
   async fn update(
      &self,
      id: InvoiceId,
      changes: &InvoiceChanges,
      today: NaiveDate,
   ) -> Result<Option<Invoice>, InfraError>;

   /// 請求書を削除する
   ///
   /// 削除した行があれば `true` を返す。
   async fn delete(&self, id: InvoiceId) -> Result<bool, InfraError>;
}

#[derive(sqlx::FromRow)]
struct InvoiceRow {
   id:        i32,
   comp_code: String,
   amt:       f64,
   paid:      bool,
   add_date:  NaiveDate,
   paid_date: Option<NaiveDate>,
}

impl From<InvoiceRow> for Invoice {
   fn from(row: InvoiceRow) -> Self {
      Self {
         id:        InvoiceId::new(row.id),
         comp_code: CompanyCode::new(row.comp_code),
         amt:       row.amt,
         paid:      row.paid,
         add_date:  row.add_date,
         paid_date: row.paid_date,
      }
   }
}

#[derive(sqlx::FromRow)]
struct InvoiceDetailRow {
   #[sqlx(flatten)]
   invoice:             InvoiceRow,
   company_name:        String,
   company_description: Option<String>,
}

/// PostgreSQL 実装の InvoiceRepository
#[derive(Debug, Clone)]
pub struct PostgresInvoiceRepository {
   pool: PgPool,
}

impl PostgresInvoiceRepository {
   /// 新しいリポジトリインスタンスを作成
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl InvoiceRepository for PostgresInvoiceRepository {
   #[tracing::instrument(skip_all, level = "debug")]
   async fn find_all(&self) -> Result<Vec<InvoiceSummary>, InfraError> {
      let rows: Vec<(i32, String)> = sqlx::query_as(
         r#"
         SELECT id, comp_code
         FROM invoices
         ORDER BY id
         "#,
      )
      .fetch_all(&self.pool)
      .await?;

      Ok(rows
         .into_iter()
         .map(|(id, comp_code)| InvoiceSummary {
            id:        InvoiceId::new(id),
            comp_code: CompanyCode::new(comp_code),
         })
         .collect())
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn find_detail(&self, id: InvoiceId) -> Result<Option<InvoiceDetail>, InfraError> {
      let row: Option<InvoiceDetailRow> = sqlx::query_as(
         r#"
         SELECT
            i.id,
            i.comp_code,
            i.amt,
            i.paid,
            i.add_date,
            i.paid_date,
            c.name AS company_name,
            c.description AS company_description
         FROM invoices i
         JOIN companies c ON c.code = i.comp_code
         WHERE i.id = $1
         "#,
      )
      .bind(id.as_i32())
      .fetch_optional(&self.pool)
      .await?;

      Ok(row.map(|row| {
         let company = Company {
            code:        CompanyCode::new(row.invoice.comp_code.clone()),
            name:        row.company_name,
            description: row.company_description,
         };
         InvoiceDetail {
            invoice: row.invoice.into(),
            company,
         }
      }))
   }

   #[tracing::instrument(skip_all, level = "debug", fields(comp_code = %invoice.comp_code))]
   async fn insert(&self, invoice: &NewInvoice) -> Result<Invoice, InfraError> {
      let row: InvoiceRow = sqlx::query_as(
         r#"
         INSERT INTO invoices (comp_code, amt, add_date)
         VALUES ($1, $2, $3)
         RETURNING id, comp_code, amt, paid, add_date, paid_date
         "#,
      )
      .bind(invoice.comp_code.as_str())
      .bind(invoice.amt)
      .bind(invoice.add_date)
      .fetch_one(&self.pool)
      .await?;

      Ok(row.into())
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id, paid = changes.paid))]
   async fn update(
      &self,
      id: InvoiceId,
      changes: &InvoiceChanges,
      today: NaiveDate,
   ) -> Result<Option<Invoice>, InfraError> {
      let mut tx = self.pool.begin().await?;

      let current: Option<(bool, Option<NaiveDate>)> = sqlx::query_as(
         r#"
         SELECT paid, paid_date
         FROM invoices
         WHERE id = $1
         FOR UPDATE
         "#,
      )
      .bind(id.as_i32())
      .fetch_optional(&mut *tx)
      .await?;

      let Some((paid, paid_date)) = current else {
         return Ok(None);
      };

      let next = PaymentState::from_db(paid, paid_date).transition(changes.paid, today);

      let row: Option<InvoiceRow> = sqlx::query_as(
         r#"
         UPDATE invoices
         SET amt = $1, paid = $2, paid_date = $3
         WHERE id = $4
         RETURNING id, comp_code, amt, paid, add_date, paid_date
         "#,
      )
      .bind(changes.amt)
      .bind(next.paid())
      .bind(next.paid_date())
      .bind(id.as_i32())
      .fetch_optional(&mut *tx)
      .await?;

      tx.commit().await?;

      Ok(row.map(Invoice::from))
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn delete(&self, id: InvoiceId) -> Result<bool, InfraError> {
      let result = sqlx::query("DELETE FROM invoices WHERE id = $1")
         .bind(id.as_i32())
         .execute(&self.pool)
         .await?;

      Ok(result.rows_affected() > 0)
   }
}
