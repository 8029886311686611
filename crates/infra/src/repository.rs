//! # リポジトリ実装
//!
//! ドメインエンティティの永続化操作を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: trait を定義し、API 層は trait オブジェクト経由で利用
//! - **データベース抽象化**: sqlx を使用し、PostgreSQL 固有の処理をカプセル化
//! - **テスタビリティ**: trait 経由でスタブ実装に差し替え可能な設計

pub mod ach_repository;

pub use ach_repository::{AchRepository, PostgresAchRepository};
