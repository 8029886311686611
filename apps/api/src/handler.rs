//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュール（この `handler.rs`）で re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、値の検証はドメイン層に委譲

pub mod ach;
pub mod health;

pub use ach::{AchState, create_ach, delete_ach, get_ach, list_ach, update_ach};
pub use health::{ReadinessState, health_check, readiness_check};
