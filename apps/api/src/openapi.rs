//! # OpenAPI 仕様定義
//!
//! utoipa を使用して API の OpenAPI 仕様を Rust の型から自動生成する。
//! `ApiDoc::openapi()` で OpenAPI ドキュメントを取得でき、
//! `GET /api-docs/openapi.json` で同じドキュメントを配信する。

use axum::Json;
use utoipa::OpenApi;

use crate::handler::{ach, health};

#[derive(OpenApi)]
#[openapi(
   info(
      title = "VenTrack API",
      version = "0.1.0",
      description = "ACH（換気回数）レコード管理サービスの API"
   ),
   paths(
      // health
      health::health_check,
      health::readiness_check,
      // ach
      ach::list_ach,
      ach::get_ach,
      ach::create_ach,
      ach::update_ach,
      ach::delete_ach,
   ),
   components(schemas(
      ach::AchResponse,
      ach::UpsertAchRequest,
      ventrack_shared::ErrorResponse,
      ventrack_shared::HealthResponse,
      ventrack_shared::ReadinessResponse,
      ventrack_shared::CheckStatus,
      ventrack_shared::ReadinessStatus,
   )),
   tags(
      (name = "health", description = "ヘルスチェック"),
      (name = "ach", description = "ACH レコード管理"),
   )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
///
/// OpenAPI ドキュメントを JSON で配信する。
/// ルーティングの本体には関与しない、純粋に記述的なエンドポイント。
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
   Json(ApiDoc::openapi())
}
