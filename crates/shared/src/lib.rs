//! # VenTrack 共有ユーティリティ
//!
//! ワークスペース全体で使用される共通型を提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（domain, infra, api）から依存されうる
//! - ビジネスロジックを含まない純粋なデータ型のみを配置
//! - 外部クレートへの依存は最小限に抑える（axum への依存は持たない）

pub mod error_response;
pub mod health;

pub use error_response::ErrorResponse;
pub use health::{CheckStatus, HealthResponse, ReadinessResponse, ReadinessStatus};
