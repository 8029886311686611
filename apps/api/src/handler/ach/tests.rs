use std::sync::{
   Arc, Mutex,
   atomic::{AtomicI64, Ordering},
};

use async_trait::async_trait;
use axum::{
   Router,
   body::Body,
   http::{Method, Request, StatusCode, header::CONTENT_TYPE},
   routing::get,
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt;
use ventrack_infra::InfraError;

use super::*;

// テスト用のスタブ実装

/// インメモリの AchRepository スタブ
///
/// `failing()` で作成すると全操作がデータベースエラーを返す。
struct StubAchRepository {
   records: Mutex<Vec<AchRecord>>,
   next_id: AtomicI64,
   fail:    bool,
}

impl StubAchRepository {
   fn empty() -> Self {
      Self {
         records: Mutex::new(Vec::new()),
         next_id: AtomicI64::new(1),
         fail:    false,
      }
   }

   fn failing() -> Self {
      Self {
         records: Mutex::new(Vec::new()),
         next_id: AtomicI64::new(1),
         fail:    true,
      }
   }

   fn check_failure(&self) -> Result<(), InfraError> {
      if self.fail {
         return Err(InfraError::unexpected("スタブ障害"));
      }
      Ok(())
   }
}

#[async_trait]
impl AchRepository for StubAchRepository {
   async fn find_all(&self) -> Result<Vec<AchRecord>, InfraError> {
      self.check_failure()?;
      Ok(self.records.lock().unwrap().clone())
   }

   async fn find_by_id(&self, id: AchRecordId) -> Result<Option<AchRecord>, InfraError> {
      self.check_failure()?;
      let records = self.records.lock().unwrap();
      Ok(records.iter().find(|r| r.id() == id).cloned())
   }

   async fn insert(&self, payload: &NewAchRecord) -> Result<AchRecord, InfraError> {
      self.check_failure()?;
      let id = self.next_id.fetch_add(1, Ordering::SeqCst);
      let record = AchRecord::from_db(
         AchRecordId::from_i64(id),
         payload.room_name().clone(),
         payload.room_volume(),
         payload.airflow_rate(),
         payload.ach(),
      );
      self.records.lock().unwrap().push(record.clone());
      Ok(record)
   }

   async fn update(
      &self,
      id: AchRecordId,
      payload: &NewAchRecord,
   ) -> Result<Option<AchRecord>, InfraError> {
      self.check_failure()?;
      let mut records = self.records.lock().unwrap();
      let Some(existing) = records.iter_mut().find(|r| r.id() == id) else {
         return Ok(None);
      };
      *existing = AchRecord::from_db(
         id,
         payload.room_name().clone(),
         payload.room_volume(),
         payload.airflow_rate(),
         payload.ach(),
      );
      Ok(Some(existing.clone()))
   }

   async fn delete(&self, id: AchRecordId) -> Result<bool, InfraError> {
      self.check_failure()?;
      let mut records = self.records.lock().unwrap();
      let before = records.len();
      records.retain(|r| r.id() != id);
      Ok(records.len() < before)
   }
}

// テストヘルパー

fn create_test_app(repository: StubAchRepository) -> Router {
   let state = Arc::new(AchState {
      repository: Arc::new(repository),
   });

   Router::new()
      .route("/ach", get(list_ach).post(create_ach))
      .route("/ach/{id}", get(get_ach).put(update_ach).delete(delete_ach))
      .with_state(state)
}

fn json_request(method: Method, uri: &str, body: &Value) -> Request<Body> {
   Request::builder()
      .method(method)
      .uri(uri)
      .header(CONTENT_TYPE, "application/json")
      .body(Body::from(body.to_string()))
      .unwrap()
}

fn empty_request(method: Method, uri: &str) -> Request<Body> {
   Request::builder()
      .method(method)
      .uri(uri)
      .body(Body::empty())
      .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
   let response = app.clone().oneshot(request).await.unwrap();
   let status = response.status();
   let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
      .await
      .unwrap();
   let body = if bytes.is_empty() {
      Value::Null
   } else {
      serde_json::from_slice(&bytes).unwrap()
   };
   (status, body)
}

fn valid_body() -> Value {
   json!({
      "roomName": "Lab A",
      "roomVolume": 100.0,
      "airflowRate": 2000.0,
      "ach": 20.0,
   })
}

// テストケース

#[tokio::test]
async fn test_一覧は空のとき空配列を返す() {
   let sut = create_test_app(StubAchRepository::empty());

   let (status, body) = send(&sut, empty_request(Method::GET, "/ach")).await;

   assert_eq!(status, StatusCode::OK);
   assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_作成は201と採番済みidを返す() {
   let sut = create_test_app(StubAchRepository::empty());

   let (status, body) = send(&sut, json_request(Method::POST, "/ach", &valid_body())).await;

   assert_eq!(status, StatusCode::CREATED);
   assert_eq!(
      body,
      json!({
         "id": 1,
         "roomName": "Lab A",
         "roomVolume": 100.0,
         "airflowRate": 2000.0,
         "ach": 20.0,
      })
   );
}

#[tokio::test]
async fn test_作成後にidで取得すると同じ内容が返る() {
   let sut = create_test_app(StubAchRepository::empty());

   let (_, created) = send(&sut, json_request(Method::POST, "/ach", &valid_body())).await;
   let id = created["id"].as_i64().unwrap();

   let (status, body) = send(&sut, empty_request(Method::GET, &format!("/ach/{id}"))).await;

   assert_eq!(status, StatusCode::OK);
   assert_eq!(body, created);
}

#[tokio::test]
async fn test_並行作成は異なるidを採番する() {
   let sut = create_test_app(StubAchRepository::empty());

   // 2 つの作成リクエストを並行して発行しても、採番される id は重複しない
   let ((first_status, first), (second_status, second)) = tokio::join!(
      send(&sut, json_request(Method::POST, "/ach", &valid_body())),
      send(&sut, json_request(Method::POST, "/ach", &valid_body())),
   );

   assert_eq!(first_status, StatusCode::CREATED);
   assert_eq!(second_status, StatusCode::CREATED);
   assert_ne!(first["id"], second["id"]);
}

#[tokio::test]
async fn test_一覧は作成済みレコードを全フィールド付きで返す() {
   let sut = create_test_app(StubAchRepository::empty());

   let (_, first) = send(&sut, json_request(Method::POST, "/ach", &valid_body())).await;
   let second_body = json!({
      "roomName": "Lab B",
      "roomVolume": 50.0,
      "airflowRate": 500.0,
      "ach": 10.0,
   });
   let (_, second) = send(&sut, json_request(Method::POST, "/ach", &second_body)).await;

   let (status, body) = send(&sut, empty_request(Method::GET, "/ach")).await;

   assert_eq!(status, StatusCode::OK);
   assert_eq!(body, json!([first, second]));
}

#[tokio::test]
async fn test_存在しないidの取得は404() {
   let sut = create_test_app(StubAchRepository::empty());

   let (status, body) = send(&sut, empty_request(Method::GET, "/ach/999")).await;

   assert_eq!(status, StatusCode::NOT_FOUND);
   assert_eq!(body["detail"], "ACH レコードが見つかりません");
}

#[tokio::test]
async fn test_数値でないidはリポジトリに触れず400() {
   // failing スタブ: リポジトリが呼ばれたら 500 になるはず
   let sut = create_test_app(StubAchRepository::failing());

   let response = sut
      .clone()
      .oneshot(empty_request(Method::GET, "/ach/abc"))
      .await
      .unwrap();

   assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_必須フィールドの欠落は400() {
   let sut = create_test_app(StubAchRepository::empty());

   for field in ["roomName", "roomVolume", "airflowRate", "ach"] {
      let mut body = valid_body();
      body.as_object_mut().unwrap().remove(field);

      let (status, response) = send(&sut, json_request(Method::POST, "/ach", &body)).await;

      assert_eq!(status, StatusCode::BAD_REQUEST, "欠落フィールド: {field}");
      assert_eq!(response["detail"], format!("{field} は必須です"));
   }
}

#[tokio::test]
async fn test_nullフィールドは400() {
   let sut = create_test_app(StubAchRepository::empty());

   for field in ["roomName", "roomVolume", "airflowRate", "ach"] {
      let mut body = valid_body();
      body[field] = Value::Null;

      let (status, _) = send(&sut, json_request(Method::POST, "/ach", &body)).await;

      assert_eq!(status, StatusCode::BAD_REQUEST, "null フィールド: {field}");
   }
}

#[tokio::test]
async fn test_ゼロの数値フィールドは400() {
   let sut = create_test_app(StubAchRepository::empty());

   for field in ["roomVolume", "airflowRate", "ach"] {
      let mut body = valid_body();
      body[field] = json!(0);

      let (status, _) = send(&sut, json_request(Method::POST, "/ach", &body)).await;

      assert_eq!(status, StatusCode::BAD_REQUEST, "ゼロ値フィールド: {field}");
   }
}

#[tokio::test]
async fn test_空のroom_nameは400() {
   let sut = create_test_app(StubAchRepository::empty());
   let mut body = valid_body();
   body["roomName"] = json!("");

   let (status, response) = send(&sut, json_request(Method::POST, "/ach", &body)).await;

   assert_eq!(status, StatusCode::BAD_REQUEST);
   assert_eq!(response["detail"], "roomName は必須です");
}

#[tokio::test]
async fn test_更新は全フィールドを上書きする() {
   let sut = create_test_app(StubAchRepository::empty());
   let (_, created) = send(&sut, json_request(Method::POST, "/ach", &valid_body())).await;
   let id = created["id"].as_i64().unwrap();

   let update_body = json!({
      "roomName": "Lab B",
      "roomVolume": 80.0,
      "airflowRate": 1600.0,
      "ach": 20.0,
   });
   let (status, updated) = send(
      &sut,
      json_request(Method::PUT, &format!("/ach/{id}"), &update_body),
   )
   .await;

   assert_eq!(status, StatusCode::OK);
   assert_eq!(
      updated,
      json!({
         "id": id,
         "roomName": "Lab B",
         "roomVolume": 80.0,
         "airflowRate": 1600.0,
         "ach": 20.0,
      })
   );

   // 取得しても更新後の内容が返る
   let (_, fetched) = send(&sut, empty_request(Method::GET, &format!("/ach/{id}"))).await;
   assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_存在しないidの更新は404() {
   let sut = create_test_app(StubAchRepository::empty());

   let (status, body) = send(
      &sut,
      json_request(Method::PUT, "/ach/999", &valid_body()),
   )
   .await;

   assert_eq!(status, StatusCode::NOT_FOUND);
   assert_eq!(body["detail"], "ACH レコードが見つかりません");
}

#[tokio::test]
async fn test_更新もフィールド欠落を400で弾く() {
   let sut = create_test_app(StubAchRepository::empty());
   let (_, created) = send(&sut, json_request(Method::POST, "/ach", &valid_body())).await;
   let id = created["id"].as_i64().unwrap();

   let mut body = valid_body();
   body.as_object_mut().unwrap().remove("ach");

   let (status, _) = send(
      &sut,
      json_request(Method::PUT, &format!("/ach/{id}"), &body),
   )
   .await;

   assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_削除は204でボディなし() {
   let sut = create_test_app(StubAchRepository::empty());
   let (_, created) = send(&sut, json_request(Method::POST, "/ach", &valid_body())).await;
   let id = created["id"].as_i64().unwrap();

   let (status, body) = send(&sut, empty_request(Method::DELETE, &format!("/ach/{id}"))).await;

   assert_eq!(status, StatusCode::NO_CONTENT);
   assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn test_削除後の取得は404() {
   let sut = create_test_app(StubAchRepository::empty());
   let (_, created) = send(&sut, json_request(Method::POST, "/ach", &valid_body())).await;
   let id = created["id"].as_i64().unwrap();

   send(&sut, empty_request(Method::DELETE, &format!("/ach/{id}"))).await;
   let (status, _) = send(&sut, empty_request(Method::GET, &format!("/ach/{id}"))).await;

   assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_存在しないidの削除は404() {
   let sut = create_test_app(StubAchRepository::empty());

   let (status, _) = send(&sut, empty_request(Method::DELETE, "/ach/999")).await;

   assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_リポジトリ障害は500で固定文言を返す() {
   let sut = create_test_app(StubAchRepository::failing());

   let (status, body) = send(&sut, empty_request(Method::GET, "/ach")).await;

   assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
   // detail は固定文言であり、スタブのエラー内容を含まない
   assert_eq!(body["detail"], "内部エラーが発生しました");
}

#[tokio::test]
async fn test_作成時のリポジトリ障害も500になる() {
   let sut = create_test_app(StubAchRepository::failing());

   let (status, body) = send(&sut, json_request(Method::POST, "/ach", &valid_body())).await;

   assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
   assert_eq!(body["status"], 500);
}
