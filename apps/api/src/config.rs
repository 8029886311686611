//! # API サーバー設定
//!
//! 環境変数から API サーバーの設定を読み込む。
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `PORT` | No | ポート番号（デフォルト: `5000`） |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL。未設定の場合は起動に失敗する |

use std::env;

/// デフォルトのリッスンポート
const DEFAULT_PORT: u16 = 5000;

/// API サーバーの設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
   /// バインドアドレス
   pub host: String,
   /// ポート番号
   pub port: u16,
   /// データベース接続 URL
   pub database_url: String,
}

impl ApiConfig {
   /// 環境変数から設定を読み込む
   ///
   /// `DATABASE_URL` が未設定の場合は `Err` を返し、プロセスは起動しない。
   pub fn from_env() -> Result<Self, env::VarError> {
      Ok(Self {
         host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
         port: env::var("PORT").map_or(DEFAULT_PORT, |value| {
            value
               .parse()
               .expect("PORT は有効なポート番号である必要があります")
         }),
         database_url: env::var("DATABASE_URL")?,
      })
   }
}
