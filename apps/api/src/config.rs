//! # アプリケーション設定
//!
//! 環境変数からアプリケーション設定を読み込む。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `BIZTIME_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `BIZTIME_PORT` | No | `3000` | ポート番号 |
//! | `BIZTIME_ENV` | No | `development` | 実行環境。`test` でテスト用 DB に接続する |
//! | `DATABASE_URL` | No | `postgres://localhost/biztime` | PostgreSQL 接続 URL |
//! | `DATABASE_TEST_URL` | No | `postgres://localhost/biztime_test` | `BIZTIME_ENV=test` 時の接続 URL |
//! | `DATABASE_MAX_CONNECTIONS` | No | `5` | 接続プールの最大接続数 |
//!
//! ログ出力形式（`LOG_FORMAT`）は `biztime_shared::observability` が読む。
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use biztime_api::config::AppConfig;
//!
//! dotenvy::dotenv().ok();
//! let config = AppConfig::from_env()?;
//!
//! println!("サーバー: {}:{}", config.server.host, config.server.port);
//! ```

use std::env;

use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/biztime";
const DEFAULT_DATABASE_TEST_URL: &str = "postgres://localhost/biztime_test";

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
   /// 数値として解釈できない値
   #[error("環境変数 {name} の値 {value:?} は不正です: {reason}")]
   InvalidNumber {
      name:   &'static str,
      value:  String,
      reason: String,
   },
}

/// 実行環境
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
   Development,
   Test,
   /// `development` / `test` 以外の値（`production` など）
   Other(String),
}

impl Environment {
   fn parse(s: &str) -> Self {
      match s {
         "development" => Self::Development,
         "test" => Self::Test,
         other => Self::Other(other.to_string()),
      }
   }
}

/// HTTP サーバー設定
#[derive(Debug, Clone)]
pub struct ServerConfig {
   /// バインドアドレス（例: `0.0.0.0`, `127.0.0.1`）
   pub host: String,
   /// ポート番号
   pub port: u16,
}

/// データベース接続設定
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
   /// 接続 URL
   pub url:             String,
   /// 接続プールの最大接続数
   pub max_connections: u32,
}

/// アプリケーション全体の設定
///
/// 起動時に一度だけ構築し、各コンポーネントに渡す。
#[derive(Debug, Clone)]
pub struct AppConfig {
   pub server:      ServerConfig,
   pub database:    DatabaseConfig,
   pub environment: Environment,
}

impl AppConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|name| env::var(name).ok())
   }

   /// 任意の参照関数から設定を読み込む
   ///
   /// `lookup` は変数名を受け取り、未設定なら `None` を返す。
   pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
      let environment = lookup("BIZTIME_ENV")
         .map(|v| Environment::parse(&v))
         .unwrap_or(Environment::Development);

      // テスト環境では本番・開発用 DB に触れない
      let url = match environment {
         Environment::Test => lookup("DATABASE_TEST_URL")
            .unwrap_or_else(|| DEFAULT_DATABASE_TEST_URL.to_string()),
         _ => lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
      };

      Ok(Self {
         server: ServerConfig {
            host: lookup("BIZTIME_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_number(&lookup, "BIZTIME_PORT", 3000)?,
         },
         database: DatabaseConfig {
            url,
            max_connections: parse_number(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
         },
         environment,
      })
   }
}

fn parse_number<T>(
   lookup: &impl Fn(&str) -> Option<String>,
   name: &'static str,
   default: T,
) -> Result<T, ConfigError>
where
   T: std::str::FromStr,
   T::Err: std::fmt::Display,
{
   match lookup(name) {
      None => Ok(default),
      Some(value) => value.parse().map_err(|e: T::Err| ConfigError::InvalidNumber {
         name,
         reason: e.to_string(),
         value,
      }),
   }
}
