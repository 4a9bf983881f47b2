//! # 請求書
//!
//! 企業に対して発行される請求書と、その支払状態を表現する。
//!
//! ## 支払状態の遷移
//!
//! 請求書更新時の `paid_date` は、現在の支払状態と要求された `paid` から決まる:
//!
//! | 現在 | 要求 | 結果の `paid_date` |
//! |------|------|--------------------|
//! | 未払い | 支払済み | 今日 |
//! | 支払済み | 未払い | `null` |
//! | 未払い | 未払い | 現在値を維持 |
//! | 支払済み | 支払済み | 現在値を維持 |
//!
//! この遷移は [`PaymentState::transition`] に集約する。
//! 同じ要求を 2 回適用しても結果は変わらない（冪等）。

use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
   DomainError,
   company::{Company, CompanyCode},
};

/// 請求書 ID（`serial` 主キー）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct InvoiceId(i32);

impl InvoiceId {
   pub fn new(id: i32) -> Self {
      Self(id)
   }

   pub fn as_i32(&self) -> i32 {
      self.0
   }
}

impl FromStr for InvoiceId {
   type Err = DomainError;

   /// パスパラメータ（`/invoices/{id}`）から変換する
   fn from_str(s: &str) -> Result<Self, Self::Err> {
      s.parse::<i32>()
         .map(Self)
         .map_err(|_| DomainError::Validation(format!("Invoice id '{s}' is not a valid integer")))
   }
}

impl fmt::Display for InvoiceId {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      write!(f, "{}", self.0)
   }
}

/// 請求書一覧の 1 行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceSummary {
   pub id:        InvoiceId,
   pub comp_code: CompanyCode,
}

/// 請求書
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Invoice {
   pub id:        InvoiceId,
   pub comp_code: CompanyCode,
   pub amt:       f64,
   pub paid:      bool,
   pub add_date:  NaiveDate,
   pub paid_date: Option<NaiveDate>,
}

/// 請求書詳細
///
/// 請求書本体に、発行先企業の情報を埋め込んだもの。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvoiceDetail {
   #[serde(flatten)]
   pub invoice: Invoice,
   pub company: Company,
}

/// 請求書作成の入力
///
/// `add_date` には `paid_date` と同じ [`Clock`](crate::clock::Clock) の日付を渡す。
/// `paid`, `paid_date` は DB のデフォルト値（未払い・`null`）に任せる。
/// `amt > 0` は DB の CHECK 制約が保証する。
#[derive(Debug, Clone)]
pub struct NewInvoice {
   pub comp_code: CompanyCode,
   pub amt:       f64,
   pub add_date:  NaiveDate,
}

/// 請求書更新の入力
#[derive(Debug, Clone)]
pub struct InvoiceChanges {
   pub amt:  f64,
   pub paid: bool,
}

/// 支払状態（`paid` と `paid_date` の組）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentState {
   paid:      bool,
   paid_date: Option<NaiveDate>,
}

impl PaymentState {
   /// DB から読み出した値で構築する
   pub fn from_db(paid: bool, paid_date: Option<NaiveDate>) -> Self {
      Self { paid, paid_date }
   }

   /// 新規請求書の状態（未払い・支払日なし）
   pub fn unpaid() -> Self {
      Self {
         paid:      false,
         paid_date: None,
      }
   }

   pub fn paid(&self) -> bool {
      self.paid
   }

   pub fn paid_date(&self) -> Option<NaiveDate> {
      self.paid_date
   }

   /// 要求された `paid` を適用した次の状態を返す
   ///
   /// - 未払い → 支払済み: `paid_date` を `today` にする
   /// - 支払済み → 未払い: `paid_date` を消す
   /// - それ以外: `paid_date` を維持する
   pub fn transition(self, paid: bool, today: NaiveDate) -> Self {
      let paid_date = match (self.paid, paid) {
         (false, true) => Some(today),
         (true, false) => None,
         _ => self.paid_date,
      };
      Self { paid, paid_date }
   }
}
