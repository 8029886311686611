//! # VenTrack ドメイン層
//!
//! ACH（Air Changes per Hour, 換気回数）レコードのドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: ID や名前をラップし、型安全性を確保
//! - **値オブジェクト**: 生成時にバリデーションを実行し、不正な値の作成を防ぐ
//! - **不変性**: エンティティフィールドは不変、再構築は `from_db` 経由
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、外部サービス）に一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`ach`] - ACH レコードエンティティと値オブジェクト
//! - [`error`] - ドメイン層で発生するエラーの定義

pub mod ach;
pub mod error;

pub use ach::{AchRecord, AchRecordId, NewAchRecord, RoomName};
pub use error::DomainError;
