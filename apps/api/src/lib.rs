//! # VenTrack API ライブラリ
//!
//! ACH（換気回数）レコード CRUD サービスのコアモジュール。
//!
//! ## モジュール構成
//!
//! - `config`: 環境変数からの設定読み込み
//! - `error`: API エラーと HTTP レスポンスへの変換
//! - `handler`: HTTP ハンドラ
//! - `openapi`: OpenAPI 仕様定義（utoipa）

pub mod config;
pub mod error;
pub mod handler;
pub mod openapi;
