//! # API エラー定義
//!
//! API で発生するエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## エラー分類
//!
//! | 種別 | HTTP ステータス | クライアントへの detail |
//! |------|----------------|------------------------|
//! | `Validation` | 400 | 静的メッセージ（フィールド名を含む） |
//! | `NotFound` | 404 | 静的メッセージ |
//! | `Database` | 500 | 固定文言のみ。原因はサーバーログにだけ出力 |

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use thiserror::Error;
use ventrack_shared::ErrorResponse;

/// API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// バリデーションエラー（必須フィールドの欠落・不正値）
   #[error("バリデーションエラー: {0}")]
   Validation(String),

   /// リソースが見つからない
   #[error("リソースが見つかりません: {0}")]
   NotFound(String),

   /// データベースエラー
   ///
   /// リトライは行わず、一時的・恒久的の区別もしない。
   #[error("データベースエラー: {0}")]
   Database(#[from] ventrack_infra::InfraError),
}

impl From<ventrack_domain::DomainError> for ApiError {
   fn from(source: ventrack_domain::DomainError) -> Self {
      let ventrack_domain::DomainError::Validation(msg) = source;
      Self::Validation(msg)
   }
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      let (status, body) = match &self {
         Self::Validation(msg) => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::validation_error(msg.clone()),
         ),
         Self::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::not_found(msg.clone())),
         Self::Database(e) => {
            // 原因と呼び出し経路はサーバーログにのみ残し、呼び出し元には返さない
            tracing::error!(error = %e, span_trace = %e.span_trace(), "データベースエラー");
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               ErrorResponse::internal_error(),
            )
         }
      };

      (status, Json(body)).into_response()
   }
}
