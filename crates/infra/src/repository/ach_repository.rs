//! # AchRepository
//!
//! ACH レコードの永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **パラメータバインディング**: すべてのクエリで位置パラメータ（`$1`…）を使用
//! - **RETURNING 句**: 書き込み後のレコードを追加クエリなしで取得
//! - **トランザクションなし**: 単一行操作のみのため、整合性は PostgreSQL の
//!   行単位の一貫性に委譲する

use async_trait::async_trait;
use sqlx::PgPool;
use ventrack_domain::{AchRecord, AchRecordId, NewAchRecord, RoomName};

use crate::error::InfraError;

/// ACH レコードリポジトリトレイト
///
/// ACH レコードの永続化操作を定義する。
/// インフラ層で具体的な実装を提供し、API 層から trait オブジェクト経由で利用する。
#[async_trait]
pub trait AchRepository: Send + Sync {
   /// 全レコードを取得する
   ///
   /// 並び順は指定しない（ストレージの自然順）。
   async fn find_all(&self) -> Result<Vec<AchRecord>, InfraError>;

   /// ID でレコードを検索する
   ///
   /// # 戻り値
   ///
   /// - `Ok(Some(record))`: レコードが見つかった場合
   /// - `Ok(None)`: レコードが見つからない場合
   /// - `Err(_)`: データベースエラー
   async fn find_by_id(&self, id: AchRecordId) -> Result<Option<AchRecord>, InfraError>;

   /// レコードを挿入し、採番済み ID を含むレコードを返す
   async fn insert(&self, payload: &NewAchRecord) -> Result<AchRecord, InfraError>;

   /// レコードの 4 つのビジネスフィールドを一括で上書きする
   ///
   /// 対象行が存在しない場合は `Ok(None)` を返す（エラーにはしない）。
   async fn update(
      &self,
      id: AchRecordId,
      payload: &NewAchRecord,
   ) -> Result<Option<AchRecord>, InfraError>;

   /// レコードを削除する
   ///
   /// 行が削除された場合は `true`、対象行が存在しなかった場合は `false` を返す。
   async fn delete(&self, id: AchRecordId) -> Result<bool, InfraError>;
}

/// `ach_data` テーブルの行
///
/// sqlx の `FromRow` でカラムをそのまま受け取り、
/// [`into_record`](AchRow::into_record) でドメインエンティティへ変換する。
#[derive(Debug, sqlx::FromRow)]
struct AchRow {
   id:           i64,
   room_name:    String,
   room_volume:  f64,
   airflow_rate: f64,
   ach:          f64,
}

impl AchRow {
   /// 行をドメインエンティティへ変換する
   ///
   /// 保存済みデータが値オブジェクトの制約を満たさない場合
   /// （手動変更されたレコードなど）は `Unexpected` エラーになる。
   fn into_record(self) -> Result<AchRecord, InfraError> {
      let room_name =
         RoomName::new(self.room_name).map_err(|e| InfraError::unexpected(e.to_string()))?;

      Ok(AchRecord::from_db(
         AchRecordId::from_i64(self.id),
         room_name,
         self.room_volume,
         self.airflow_rate,
         self.ach,
      ))
   }
}

/// PostgreSQL 実装の AchRepository
#[derive(Debug, Clone)]
pub struct PostgresAchRepository {
   pool: PgPool,
}

impl PostgresAchRepository {
   /// 新しいリポジトリインスタンスを作成
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl AchRepository for PostgresAchRepository {
   async fn find_all(&self) -> Result<Vec<AchRecord>, InfraError> {
      let rows = sqlx::query_as::<_, AchRow>(
         r#"
            SELECT id, room_name, room_volume, airflow_rate, ach
            FROM ach_data
            "#,
      )
      .fetch_all(&self.pool)
      .await?;

      rows.into_iter().map(AchRow::into_record).collect()
   }

   async fn find_by_id(&self, id: AchRecordId) -> Result<Option<AchRecord>, InfraError> {
      let row = sqlx::query_as::<_, AchRow>(
         r#"
            SELECT id, room_name, room_volume, airflow_rate, ach
            FROM ach_data
            WHERE id = $1
            "#,
      )
      .bind(id.as_i64())
      .fetch_optional(&self.pool)
      .await?;

      row.map(AchRow::into_record).transpose()
   }

   async fn insert(&self, payload: &NewAchRecord) -> Result<AchRecord, InfraError> {
      let row = sqlx::query_as::<_, AchRow>(
         r#"
            INSERT INTO ach_data (room_name, room_volume, airflow_rate, ach)
            VALUES ($1, $2, $3, $4)
            RETURNING id, room_name, room_volume, airflow_rate, ach
            "#,
      )
      .bind(payload.room_name().as_str())
      .bind(payload.room_volume())
      .bind(payload.airflow_rate())
      .bind(payload.ach())
      .fetch_one(&self.pool)
      .await?;

      row.into_record()
   }

   async fn update(
      &self,
      id: AchRecordId,
      payload: &NewAchRecord,
   ) -> Result<Option<AchRecord>, InfraError> {
      let row = sqlx::query_as::<_, AchRow>(
         r#"
            UPDATE ach_data
            SET room_name = $2, room_volume = $3, airflow_rate = $4, ach = $5
            WHERE id = $1
            RETURNING id, room_name, room_volume, airflow_rate, ach
            "#,
      )
      .bind(id.as_i64())
      .bind(payload.room_name().as_str())
      .bind(payload.room_volume())
      .bind(payload.airflow_rate())
      .bind(payload.ach())
      .fetch_optional(&self.pool)
      .await?;

      row.map(AchRow::into_record).transpose()
   }

   async fn delete(&self, id: AchRecordId) -> Result<bool, InfraError> {
      let result = sqlx::query(
         r#"
            DELETE FROM ach_data
            WHERE id = $1
            "#,
      )
      .bind(id.as_i64())
      .execute(&self.pool)
      .await?;

      Ok(result.rows_affected() > 0)
   }
}
