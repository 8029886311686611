//! # ACH レコード
//!
//! ACH（Air Changes per Hour, 換気回数）レコードのエンティティと
//! 関連する値オブジェクトを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 説明 |
//! |---|------------|------|
//! | [`AchRecord`] | ACH レコード | 部屋ごとの換気測定値（保存対象の唯一のエンティティ） |
//! | [`RoomName`] | 部屋名 | 非空・255 文字以内 |
//! | [`NewAchRecord`] | 書き込みペイロード | 作成・更新時の検証済み 4 フィールド |
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: `AchRecordId` は `i64` をラップし、型安全性を確保
//! - **バリデーション**: 値オブジェクトの生成時に検証ロジックを実行
//! - **ach は保存値**: 名前に反して、換気回数をこのシステムが計算することはない。
//!   呼び出し側が算出済みの値をそのまま保存する
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use ventrack_domain::{NewAchRecord, RoomName};
//!
//! let payload = NewAchRecord::new(RoomName::new("Lab A")?, 100.0, 2000.0, 20.0)?;
//! assert_eq!(payload.room_name().as_str(), "Lab A");
//! # Ok(())
//! # }
//! ```

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// 部屋名の最大文字数
const ROOM_NAME_MAX_CHARS: usize = 255;

/// ACH レコード ID（一意識別子）
///
/// データベースの BIGSERIAL が採番する値をラップする。
/// 採番後の変更は行わない（作成時に一度だけ割り当て）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct AchRecordId(i64);

impl AchRecordId {
   /// 既存の i64 からレコード ID を作成する
   pub fn from_i64(value: i64) -> Self {
      Self(value)
   }

   /// 内部の i64 値を取得する
   pub fn as_i64(self) -> i64 {
      self.0
   }
}

/// 部屋名（値オブジェクト）
///
/// 生成時にバリデーションを実行し、不正な値の作成を防ぐ。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomName(String);

impl RoomName {
   /// 部屋名を作成する
   ///
   /// # バリデーション
   ///
   /// - 空文字列・空白のみではない
   /// - 最大 255 文字
   ///
   /// # エラー
   ///
   /// バリデーションに失敗した場合は `DomainError::Validation` を返す。
   pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
      let value = value.into();

      if value.trim().is_empty() {
         return Err(DomainError::Validation("roomName は必須です".to_string()));
      }

      if value.chars().count() > ROOM_NAME_MAX_CHARS {
         return Err(DomainError::Validation(
            "roomName は 255 文字以内である必要があります".to_string(),
         ));
      }

      Ok(Self(value))
   }

   /// 内部の文字列参照を取得する
   pub fn as_str(&self) -> &str {
      &self.0
   }
}

/// 数値フィールドが有限かつ正であることを検証する
///
/// 元システムは truthiness 判定で 0 を欠損として弾いていた。
/// 本実装では「体積・風量・換気回数が 0 以下の測定値は意味を持たない」
/// という明示的なルールとして同じ契約を維持する。
fn require_positive(field: &str, value: f64) -> Result<f64, DomainError> {
   if !value.is_finite() || value <= 0.0 {
      return Err(DomainError::Validation(format!(
         "{field} は正の数値である必要があります"
      )));
   }
   Ok(value)
}

/// 書き込みペイロード（値オブジェクト）
///
/// 作成・更新時に必須となる 4 つのビジネスフィールドを保持する。
/// 生成時にすべてのフィールドを検証するため、この型の値は常に妥当。
#[derive(Debug, Clone, PartialEq)]
pub struct NewAchRecord {
   room_name:    RoomName,
   room_volume:  f64,
   airflow_rate: f64,
   ach:          f64,
}

impl NewAchRecord {
   /// 書き込みペイロードを作成する
   ///
   /// # バリデーション
   ///
   /// - `room_volume`（m³）: 有限かつ正
   /// - `airflow_rate`（m³/h）: 有限かつ正
   /// - `ach`（回/h）: 有限かつ正
   ///
   /// # エラー
   ///
   /// いずれかの数値が検証に失敗した場合は `DomainError::Validation` を返す。
   pub fn new(
      room_name: RoomName,
      room_volume: f64,
      airflow_rate: f64,
      ach: f64,
   ) -> Result<Self, DomainError> {
      Ok(Self {
         room_name,
         room_volume: require_positive("roomVolume", room_volume)?,
         airflow_rate: require_positive("airflowRate", airflow_rate)?,
         ach: require_positive("ach", ach)?,
      })
   }

   /// 部屋名を取得する
   pub fn room_name(&self) -> &RoomName {
      &self.room_name
   }

   /// 部屋の体積（m³）を取得する
   pub fn room_volume(&self) -> f64 {
      self.room_volume
   }

   /// 風量（m³/h）を取得する
   pub fn airflow_rate(&self) -> f64 {
      self.airflow_rate
   }

   /// 換気回数（回/h）を取得する
   pub fn ach(&self) -> f64 {
      self.ach
   }
}

/// ACH レコード（エンティティ）
///
/// データベースに保存された換気測定値。`id` は BIGSERIAL が採番する。
#[derive(Debug, Clone, PartialEq)]
pub struct AchRecord {
   id:           AchRecordId,
   room_name:    RoomName,
   room_volume:  f64,
   airflow_rate: f64,
   ach:          f64,
}

impl AchRecord {
   /// データベースのレコードからエンティティを再構築する
   ///
   /// 保存済みデータは作成時に検証済みのため、ここでは再検証しない。
   pub fn from_db(
      id: AchRecordId,
      room_name: RoomName,
      room_volume: f64,
      airflow_rate: f64,
      ach: f64,
   ) -> Self {
      Self {
         id,
         room_name,
         room_volume,
         airflow_rate,
         ach,
      }
   }

   /// レコード ID を取得する
   pub fn id(&self) -> AchRecordId {
      self.id
   }

   /// 部屋名を取得する
   pub fn room_name(&self) -> &RoomName {
      &self.room_name
   }

   /// 部屋の体積（m³）を取得する
   pub fn room_volume(&self) -> f64 {
      self.room_volume
   }

   /// 風量（m³/h）を取得する
   pub fn airflow_rate(&self) -> f64 {
      self.airflow_rate
   }

   /// 換気回数（回/h）を取得する
   pub fn ach(&self) -> f64 {
      self.ach
   }
}
