//! # BizTime ドメイン層
//!
//! 企業・請求書・業種のエンティティと、それらに付随するビジネスルールを定義する。
//!
//! ## 設計方針
//!
//! - **永続化非依存**: sqlx や axum には依存しない。行データからの変換はインフラ層の責務
//! - **Newtype パターン**: 企業コード・請求書 ID などを型で区別し、引数の取り違えを防ぐ
//! - **シリアライズ形状 = API 形状**: `Serialize` の出力がそのまま HTTP レスポンスの
//!   JSON になるよう、フィールド名は DB カラム名に揃える
//!
//! ## モジュール構成
//!
//! - [`company`] - 企業エンティティとスラッグ導出
//! - [`invoice`] - 請求書エンティティと支払状態の遷移ルール
//! - [`industry`] - 業種エンティティと企業との関連
//! - [`clock`] - 現在時刻の抽象化（支払日の決定に使用）
//! - [`error`] - ドメイン層エラー
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//!   ↘           ↗
//!     ─────────
//! ```
//!
//! ## 使用例
//!
//! ```rust
//! use biztime_domain::invoice::PaymentState;
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
//! let unpaid = PaymentState::unpaid();
//!
//! let paid = unpaid.transition(true, today);
//! assert_eq!(paid.paid_date(), Some(today));
//! ```

pub mod clock;
pub mod company;
pub mod error;
pub mod industry;
pub mod invoice;

pub use error::DomainError;
