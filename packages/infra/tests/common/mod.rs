//! テスト共通フィクスチャ
//!
//! DB を使用する統合テストで共通利用するシードデータ。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use chrono::NaiveDate;
use sqlx::PgPool;

/// シード済み請求書の ID
pub struct SeededInvoices {
   pub apple_unpaid:  i32,
   pub apple_unpaid2: i32,
   pub apple_paid:    i32,
   pub ibm_unpaid:    i32,
}

/// シード済み支払済み請求書の支払日
pub fn seeded_paid_date() -> NaiveDate {
   NaiveDate::from_ymd_opt(2018, 1, 1).unwrap()
}

/// テスト用の「今日」
pub fn test_today() -> NaiveDate {
   NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
}

/// 企業 `apple` / `ibm` と請求書 4 件を投入する
pub async fn seed_companies_and_invoices(pool: &PgPool) -> SeededInvoices {
   sqlx::query(
      r#"
      INSERT INTO companies (code, name, description, slug)
      VALUES ('apple', 'Apple Computer', 'Maker of OSX.', 'apple-computer'),
             ('ibm', 'IBM', 'Big blue.', 'ibm')
      "#,
   )
   .execute(pool)
   .await
   .unwrap();

   let mut ids: Vec<i32> = sqlx::query_scalar(
      r#"
      INSERT INTO invoices (comp_code, amt, paid, paid_date)
      VALUES ('apple', 100, false, null),
             ('apple', 200, false, null),
             ('apple', 300, true, '2018-01-01'),
             ('ibm', 400, false, null)
      RETURNING id
      "#,
   )
   .fetch_all(pool)
   .await
   .unwrap();
   ids.sort_unstable();

   SeededInvoices {
      apple_unpaid:  ids[0],
      apple_unpaid2: ids[1],
      apple_paid:    ids[2],
      ibm_unpaid:    ids[3],
   }
}

/// 業種 `acct` / `tech` を投入し、`apple` を `tech` に関連付ける
///
/// [`seed_companies_and_invoices`] の後に呼ぶこと。
pub async fn seed_industries(pool: &PgPool) {
   sqlx::query(
      r#"
      INSERT INTO industries (code, industry)
      VALUES ('acct', 'Accounting'),
             ('tech', 'Technology')
      "#,
   )
   .execute(pool)
   .await
   .unwrap();

   sqlx::query(
      r#"
      INSERT INTO companies_industries (company_code, industry_code)
      VALUES ('apple', 'tech')
      "#,
   )
   .execute(pool)
   .await
   .unwrap();
}

/// 請求書の件数
pub async fn count_invoices(pool: &PgPool) -> i64 {
   sqlx::query_scalar("SELECT COUNT(*) FROM invoices")
      .fetch_one(pool)
      .await
      .unwrap()
}
