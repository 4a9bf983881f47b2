//! # BizTime サーバー
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境
//! cargo run --bin biztime
//!
//! # JSON ログで起動
//! LOG_FORMAT=json cargo run --bin biztime --release
//! ```
//!
//! 環境変数は [`biztime_api::config`] を参照。

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context as _;
use biztime_api::{
   app_builder::{AppDependencies, build_app},
   config::AppConfig,
};
use biztime_domain::clock::SystemClock;
use biztime_infra::db;
use biztime_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   init_tracing(TracingConfig::from_env("biztime"));

   let config = AppConfig::from_env().context("設定の読み込みに失敗しました")?;
   tracing::info!(
      environment = ?config.environment,
      "BizTime サーバーを起動します: {}:{}",
      config.server.host,
      config.server.port
   );

   let pool = db::create_pool(&config.database.url, config.database.max_connections)
      .await
      .context("データベースへの接続に失敗しました")?;
   db::run_migrations(&pool)
      .await
      .context("マイグレーションの適用に失敗しました")?;
   tracing::info!("データベースに接続しました");

   let app = build_app(AppDependencies::postgres(pool, Arc::new(SystemClock)));

   let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
      .parse()
      .context("バインドアドレスが不正です")?;

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("BizTime サーバーが起動しました: {addr}");

   axum::serve(listener, app).await?;

   Ok(())
}
