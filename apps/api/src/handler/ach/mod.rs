//! # ACH レコード API ハンドラ
//!
//! ACH（換気回数）レコードの CRUD エンドポイントを提供する。
//!
//! ## エンドポイント
//!
//! - `GET /ach` - 全レコード一覧
//! - `POST /ach` - レコード作成
//! - `GET /ach/{id}` - レコード取得
//! - `PUT /ach/{id}` - レコード更新（4 フィールド一括上書き）
//! - `DELETE /ach/{id}` - レコード削除
//!
//! ## 入力検証
//!
//! リクエストボディの 4 フィールドはすべて必須。欠落・`null` はこの層で
//! 400 として弾き、値のルール（空文字・非正値）はドメイン層の
//! 値オブジェクトが検証する。パスの `id` は axum の `Path<i64>` が
//! パースし、数値でない場合はクエリを発行せず 400 になる。

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State},
   http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use ventrack_domain::{AchRecord, AchRecordId, NewAchRecord, RoomName};
use ventrack_infra::repository::AchRepository;

use crate::error::ApiError;

/// 存在しないレコードへのアクセス時の detail（静的メッセージ）
const NOT_FOUND_DETAIL: &str = "ACH レコードが見つかりません";

/// ACH API の共有状態
pub struct AchState {
   pub repository: Arc<dyn AchRepository>,
}

// --- リクエスト/レスポンス型 ---

/// レコード作成・更新リクエスト
///
/// 全フィールドが必須。`Option` なのはハンドラ側で欠落を検出し、
/// ボディパーサのデフォルト（422）ではなく 400 を返すため。
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertAchRequest {
   /// 部屋名
   pub room_name:    Option<String>,
   /// 部屋の体積（m³）
   pub room_volume:  Option<f64>,
   /// 風量（m³/h）
   pub airflow_rate: Option<f64>,
   /// 換気回数（回/h）。呼び出し側が算出した値をそのまま保存する
   pub ach:          Option<f64>,
}

/// ACH レコードレスポンス
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AchResponse {
   /// レコード ID（ストレージ採番）
   pub id:           i64,
   /// 部屋名
   pub room_name:    String,
   /// 部屋の体積（m³）
   pub room_volume:  f64,
   /// 風量（m³/h）
   pub airflow_rate: f64,
   /// 換気回数（回/h）
   pub ach:          f64,
}

impl From<&AchRecord> for AchResponse {
   fn from(record: &AchRecord) -> Self {
      Self {
         id:           record.id().as_i64(),
         room_name:    record.room_name().as_str().to_string(),
         room_volume:  record.room_volume(),
         airflow_rate: record.airflow_rate(),
         ach:          record.ach(),
      }
   }
}

/// 必須フィールドの存在を検証する
fn require<T>(field: &str, value: Option<T>) -> Result<T, ApiError> {
   value.ok_or_else(|| ApiError::Validation(format!("{field} は必須です")))
}

/// リクエストを検証済みの書き込みペイロードへ変換する
fn parse_payload(request: UpsertAchRequest) -> Result<NewAchRecord, ApiError> {
   let room_name = RoomName::new(require("roomName", request.room_name)?)?;
   let room_volume = require("roomVolume", request.room_volume)?;
   let airflow_rate = require("airflowRate", request.airflow_rate)?;
   let ach = require("ach", request.ach)?;

   Ok(NewAchRecord::new(room_name, room_volume, airflow_rate, ach)?)
}

// --- ハンドラ ---

/// GET /ach
///
/// 全レコードを取得する。並び順は保証しない。
#[utoipa::path(
   get,
   path = "/ach",
   tag = "ach",
   responses(
      (status = 200, description = "レコード一覧", body = Vec<AchResponse>),
      (status = 500, description = "データベースエラー", body = ventrack_shared::ErrorResponse)
   )
)]
pub async fn list_ach(
   State(state): State<Arc<AchState>>,
) -> Result<Json<Vec<AchResponse>>, ApiError> {
   let records = state.repository.find_all().await?;
   let items = records.iter().map(AchResponse::from).collect();

   Ok(Json(items))
}

/// GET /ach/{id}
///
/// ID でレコードを取得する。
#[utoipa::path(
   get,
   path = "/ach/{id}",
   tag = "ach",
   params(
      ("id" = i64, Path, description = "レコード ID")
   ),
   responses(
      (status = 200, description = "レコード", body = AchResponse),
      (status = 400, description = "id が数値でない"),
      (status = 404, description = "レコードが存在しない", body = ventrack_shared::ErrorResponse),
      (status = 500, description = "データベースエラー", body = ventrack_shared::ErrorResponse)
   )
)]
pub async fn get_ach(
   State(state): State<Arc<AchState>>,
   Path(id): Path<i64>,
) -> Result<Json<AchResponse>, ApiError> {
   let record = state
      .repository
      .find_by_id(AchRecordId::from_i64(id))
      .await?
      .ok_or_else(|| ApiError::NotFound(NOT_FOUND_DETAIL.to_string()))?;

   Ok(Json(AchResponse::from(&record)))
}

/// POST /ach
///
/// レコードを作成し、採番済み ID を含むレコードを返す。
#[utoipa::path(
   post,
   path = "/ach",
   tag = "ach",
   request_body = UpsertAchRequest,
   responses(
      (status = 201, description = "作成されたレコード", body = AchResponse),
      (status = 400, description = "必須フィールドの欠落・不正値", body = ventrack_shared::ErrorResponse),
      (status = 500, description = "データベースエラー", body = ventrack_shared::ErrorResponse)
   )
)]
pub async fn create_ach(
   State(state): State<Arc<AchState>>,
   Json(request): Json<UpsertAchRequest>,
) -> Result<(StatusCode, Json<AchResponse>), ApiError> {
   let payload = parse_payload(request)?;
   let record = state.repository.insert(&payload).await?;

   Ok((StatusCode::CREATED, Json(AchResponse::from(&record))))
}

/// PUT /ach/{id}
///
/// レコードの 4 フィールドを一括で上書きする。
/// 対象行が存在しない場合は 404 を返す（部分更新はサポートしない）。
#[utoipa::path(
   put,
   path = "/ach/{id}",
   tag = "ach",
   params(
      ("id" = i64, Path, description = "レコード ID")
   ),
   request_body = UpsertAchRequest,
   responses(
      (status = 200, description = "更新されたレコード", body = AchResponse),
      (status = 400, description = "必須フィールドの欠落・不正値", body = ventrack_shared::ErrorResponse),
      (status = 404, description = "レコードが存在しない", body = ventrack_shared::ErrorResponse),
      (status = 500, description = "データベースエラー", body = ventrack_shared::ErrorResponse)
   )
)]
pub async fn update_ach(
   State(state): State<Arc<AchState>>,
   Path(id): Path<i64>,
   Json(request): Json<UpsertAchRequest>,
) -> Result<Json<AchResponse>, ApiError> {
   let payload = parse_payload(request)?;
   let record = state
      .repository
      .update(AchRecordId::from_i64(id), &payload)
      .await?
      .ok_or_else(|| ApiError::NotFound(NOT_FOUND_DETAIL.to_string()))?;

   Ok(Json(AchResponse::from(&record)))
}

/// DELETE /ach/{id}
///
/// レコードを削除する。成功時はボディなしの 204 を返す。
#[utoipa::path(
   delete,
   path = "/ach/{id}",
   tag = "ach",
   params(
      ("id" = i64, Path, description = "レコード ID")
   ),
   responses(
      (status = 204, description = "削除成功（ボディなし）"),
      (status = 400, description = "id が数値でない"),
      (status = 404, description = "レコードが存在しない", body = ventrack_shared::ErrorResponse),
      (status = 500, description = "データベースエラー", body = ventrack_shared::ErrorResponse)
   )
)]
pub async fn delete_ach(
   State(state): State<Arc<AchState>>,
   Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
   let deleted = state.repository.delete(AchRecordId::from_i64(id)).await?;

   if !deleted {
      return Err(ApiError::NotFound(NOT_FOUND_DETAIL.to_string()));
   }

   Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests;
