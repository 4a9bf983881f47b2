//! # インフラ層エラー定義
//!
//! データベースとの通信で発生するエラーを表現する。
//!
//! ## 構造
//!
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別
//!
//! `From<sqlx::Error>` による変換時に、その時点のスパン（リポジトリメソッドの
//! `#[tracing::instrument]`）が記録される。API 層はこれをログに出力する。

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
   kind:       InfraErrorKind,
   span_trace: SpanTrace,
}

/// インフラ層エラーの種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
   /// データベースエラー
   ///
   /// 接続失敗、一意制約・外部キー制約・CHECK 制約違反など。
   /// 制約違反はドメイン固有のエラーに変換せず、そのまま上位へ伝播する。
   #[error("データベースエラー: {0}")]
   Database(#[source] sqlx::Error),
}

impl InfraError {
   /// エラー種別を取得する
   pub fn kind(&self) -> &InfraErrorKind {
      &self.kind
   }

   /// SpanTrace を取得する
   pub fn span_trace(&self) -> &SpanTrace {
      &self.span_trace
   }

   /// データベースが返した生のエラーメッセージ
   ///
   /// PostgreSQL がエラーを返した場合はそのメッセージ
   /// （例: `duplicate key value violates unique constraint "companies_pkey"`）、
   /// それ以外（接続エラー等）は sqlx のエラー表示を返す。
   pub fn database_message(&self) -> String {
      match &self.kind {
         InfraErrorKind::Database(sqlx::Error::Database(e)) => e.message().to_string(),
         InfraErrorKind::Database(e) => e.to_string(),
      }
   }
}

impl fmt::Debug for InfraError {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_struct("InfraError")
         .field("kind", &self.kind)
         .field("span_trace", &self.span_trace)
         .finish()
   }
}

impl std::error::Error for InfraError {
   fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
      self.kind.source()
   }
}

impl From<sqlx::Error> for InfraError {
   fn from(source: sqlx::Error) -> Self {
      Self {
         kind:       InfraErrorKind::Database(source),
         span_trace: SpanTrace::capture(),
      }
   }
}
