//! # 業種
//!
//! 企業を分類する業種と、企業との多対多の関連を表現する。

use std::fmt;

use serde::Serialize;

use crate::company::CompanyCode;

/// 業種コード（主キー）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct IndustryCode(String);

impl IndustryCode {
   pub fn new(code: impl Into<String>) -> Self {
      Self(code.into())
   }

   pub fn as_str(&self) -> &str {
      &self.0
   }
}

impl fmt::Display for IndustryCode {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str(&self.0)
   }
}

/// 業種
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Industry {
   pub code:     IndustryCode,
   pub industry: String,
}

/// 業種一覧の 1 行
///
/// `companies` は LEFT JOIN + `ARRAY_AGG` の結果をそのまま保持する。
/// 関連企業がない業種は `[null]` になる。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndustryWithCompanies {
   pub code:      IndustryCode,
   pub industry:  String,
   pub companies: Vec<Option<CompanyCode>>,
}

/// 業種作成の入力
#[derive(Debug, Clone)]
pub struct NewIndustry {
   pub code:     IndustryCode,
   pub industry: String,
}

/// 企業と業種の関連（`companies_industries` の 1 行）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompanyIndustry {
   pub company_code:  CompanyCode,
   pub industry_code: IndustryCode,
}
