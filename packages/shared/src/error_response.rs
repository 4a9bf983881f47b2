//! # エラーレスポンス
//!
//! API が返す全てのエラーで共通のレスポンスボディ。
//!
//! ```json
//! { "error": "Company not found", "message": "Company with code 'nope' not found" }
//! ```
//!
//! axum の `IntoResponse` 変換は API 層の責務（shared に axum 依存を入れない）。

use serde::{Deserialize, Serialize};

/// エラーレスポンス
///
/// `error` は短い要約、`message` は詳細。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
   pub error:   String,
   pub message: String,
}

impl ErrorResponse {
   /// 汎用コンストラクタ
   pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
      Self {
         error:   error.into(),
         message: message.into(),
      }
   }

   /// 400 Bad Request
   pub fn bad_request(message: impl Into<String>) -> Self {
      Self::new("Bad Request", message)
   }

   /// 404 Not Found（ルート不一致）
   ///
   /// 要約と詳細はどちらも `"Not Found"` になる。
   pub fn route_not_found() -> Self {
      Self::new("Not Found", "Not Found")
   }

   /// 500 Internal Server Error
   pub fn internal_error(message: impl Into<String>) -> Self {
      Self::new("Internal Server Error", message)
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   #[test]
   fn test_serializeでerrorとmessageの2フィールドになる() {
      let response = ErrorResponse::new("Company not found", "Company with code 'nope' not found");

      let json = serde_json::to_value(&response).unwrap();

      assert_eq!(
         json,
         serde_json::json!({
            "error": "Company not found",
            "message": "Company with code 'nope' not found"
         })
      );
   }

   #[test]
   fn test_route_not_foundは要約と詳細が同じ() {
      let response = ErrorResponse::route_not_found();

      assert_eq!(response.error, "Not Found");
      assert_eq!(response.message, "Not Found");
   }

   #[test]
   fn test_internal_errorは詳細をそのまま保持する() {
      let response = ErrorResponse::internal_error("connection refused");

      assert_eq!(response.error, "Internal Server Error");
      assert_eq!(response.message, "connection refused");
   }
}
