//! # ドメイン層エラー定義
//!
//! 入力値がドメインの前提を満たさない場合のエラー。
//! API 層で 400 Bad Request に変換される。

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
   /// バリデーションエラー
   ///
   /// パスパラメータなど、外部から受け取った値が型の不変条件を満たさない場合に使用する。
   #[error("{0}")]
   Validation(String),
}
