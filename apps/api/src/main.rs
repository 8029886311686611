//! # VenTrack API サーバー
//!
//! ACH（換気回数）レコードの CRUD を提供する HTTP サービス。
//!
//! ## エンドポイント
//!
//! | Method | Path | 説明 |
//! |--------|------|------|
//! | GET | `/ach` | 全レコード一覧 |
//! | POST | `/ach` | レコード作成 |
//! | GET | `/ach/{id}` | レコード取得 |
//! | PUT | `/ach/{id}` | レコード更新 |
//! | DELETE | `/ach/{id}` | レコード削除 |
//! | GET | `/health` | Liveness Check |
//! | GET | `/health/ready` | Readiness Check（DB 接続確認） |
//! | GET | `/api-docs/openapi.json` | OpenAPI ドキュメント |
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `PORT` | No | ポート番号（デフォルト: `5000`） |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//!
//! ## 起動方法
//!
//! ```bash
//! DATABASE_URL=postgres://... cargo run -p ventrack-api
//! ```

use std::{net::SocketAddr, sync::Arc};

use axum::{
   Router,
   routing::get,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ventrack_api::{
   config::ApiConfig,
   handler::{
      AchState,
      ReadinessState,
      create_ach,
      delete_ach,
      get_ach,
      health_check,
      list_ach,
      readiness_check,
      update_ach,
   },
   openapi::openapi_json,
};
use ventrack_infra::{db, repository::PostgresAchRepository};

/// API サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. データベース接続プールの作成とマイグレーション
/// 5. ルーターの構築と HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   // トレーシング初期化
   tracing_subscriber::registry()
      .with(
         tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "info,ventrack=debug".into()),
      )
      .with(tracing_subscriber::fmt::layer())
      .init();

   // 設定読み込み（DATABASE_URL 未設定ならここで起動失敗）
   let config = ApiConfig::from_env().expect("設定の読み込みに失敗しました（DATABASE_URL を確認してください）");

   tracing::info!("API サーバーを起動します: {}:{}", config.host, config.port);

   // データベース接続プールを作成
   let pool = db::create_pool(&config.database_url)
      .await
      .expect("データベース接続に失敗しました");
   db::run_migrations(&pool)
      .await
      .expect("マイグレーションの適用に失敗しました");
   tracing::info!("データベースに接続しました");

   // 依存コンポーネントを初期化
   let repository = PostgresAchRepository::new(pool.clone());
   let ach_state = Arc::new(AchState {
      repository: Arc::new(repository),
   });
   let readiness_state = Arc::new(ReadinessState { pool });

   // ルーター構築
   let app = Router::new()
      .route("/ach", get(list_ach).post(create_ach))
      .route("/ach/{id}", get(get_ach).put(update_ach).delete(delete_ach))
      .with_state(ach_state)
      .route("/health/ready", get(readiness_check))
      .with_state(readiness_state)
      .route("/health", get(health_check))
      .route("/api-docs/openapi.json", get(openapi_json))
      .layer(CorsLayer::permissive())
      .layer(TraceLayer::new_for_http());

   // サーバー起動
   let addr: SocketAddr = format!("{}:{}", config.host, config.port)
      .parse()
      .expect("アドレスのパースに失敗しました");

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("API サーバーが起動しました: {}", addr);

   axum::serve(listener, app).await?;

   Ok(())
}
