//! # 企業
//!
//! 請求書の発行先となる企業を表現する。
//!
//! ## 型の使い分け
//!
//! | 型 | 用途 |
//! |---|------|
//! | [`CompanySummary`] | 一覧表示（`code`, `name`） |
//! | [`Company`] | 単体取得・作成・更新の結果 |
//! | [`CompanyDetail`] | 単体取得時に請求書 ID と業種を付加したもの |
//! | [`NewCompany`] | 作成時の入力 |
//! | [`CompanyChanges`] | 更新時の入力 |
//!
//! ## スラッグ
//!
//! 企業名から [`Slug`] を導出し、作成・更新時に `companies.slug` に保存する。
//! API レスポンスには含めない。

use std::fmt;

use serde::Serialize;

use crate::{industry::Industry, invoice::InvoiceId};

/// 企業コード（主キー）
///
/// `apple`, `ibm` のような短い識別子。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CompanyCode(String);

impl CompanyCode {
   pub fn new(code: impl Into<String>) -> Self {
      Self(code.into())
   }

   pub fn as_str(&self) -> &str {
      &self.0
   }
}

impl fmt::Display for CompanyCode {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str(&self.0)
   }
}

/// 企業名から導出した URL セーフな識別子
///
/// # 導出ルール
///
/// 1. 非 ASCII 文字を ASCII に音訳する（`é` → `e`、漢字・かなはローマ字読み）
/// 2. 小文字化する
/// 3. ASCII 英数字以外の連続は 1 つのハイフンにまとめる
/// 4. 先頭・末尾のハイフンは除去する
///
/// ```rust
/// use biztime_domain::company::Slug;
///
/// assert_eq!(Slug::from_name("Apple Computer").as_str(), "apple-computer");
/// assert_eq!(Slug::from_name("Société Générale").as_str(), "societe-generale");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slug(String);

impl Slug {
   pub fn from_name(name: &str) -> Self {
      let ascii = deunicode::deunicode(name);
      let mut slug = String::with_capacity(ascii.len());
      let mut pending_hyphen = false;

      for c in ascii.chars().map(|c| c.to_ascii_lowercase()) {
         if c.is_ascii_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
               slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
         } else {
            pending_hyphen = true;
         }
      }

      Self(slug)
   }

   pub fn as_str(&self) -> &str {
      &self.0
   }
}

/// 企業一覧の 1 行
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanySummary {
   pub code: CompanyCode,
   pub name: String,
}

/// 企業
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Company {
   pub code:        CompanyCode,
   pub name:        String,
   pub description: Option<String>,
}

/// 企業詳細
///
/// 企業本体に、その企業の請求書 ID 一覧と関連業種を付加したもの。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyDetail {
   #[serde(flatten)]
   pub company:    Company,
   pub invoices:   Vec<InvoiceId>,
   pub industries: Vec<Industry>,
}

/// 企業作成の入力
#[derive(Debug, Clone)]
pub struct NewCompany {
   pub code:        CompanyCode,
   pub name:        String,
   pub description: Option<String>,
}

impl NewCompany {
   pub fn slug(&self) -> Slug {
      Slug::from_name(&self.name)
   }
}

/// 企業更新の入力
///
/// `code` は変更できない。
#[derive(Debug, Clone)]
pub struct CompanyChanges {
   pub name:        String,
   pub description: Option<String>,
}

impl CompanyChanges {
   pub fn slug(&self) -> Slug {
      Slug::from_name(&self.name)
   }
}
