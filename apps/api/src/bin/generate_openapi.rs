//! # OpenAPI YAML 生成ツール
//!
//! Rust の型から OpenAPI 仕様を YAML 形式で標準出力に出力する。
//!
//! ## 使い方
//!
//! ```bash
//! cargo run --bin generate-openapi -p ventrack-api > openapi/openapi.yaml
//! ```

use utoipa::OpenApi;
use ventrack_api::openapi::ApiDoc;

fn main() {
   let openapi = ApiDoc::openapi();
   let yaml = openapi.to_yaml().expect("OpenAPI YAML 生成に失敗しました");
   print!("{yaml}");
}
