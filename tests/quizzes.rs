mod common;

use common::{create_quiz, spawn_app};
use uuid::Uuid;

#[tokio::test]
async fn create_quiz_returns_created_quiz_with_fresh_identity() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .post(format!("{}/quizzes", app.address))
        .json(&serde_json::json!({ "title": "Geo", "description": "Geography" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(201, response.status().as_u16());
    let json: serde_json::Value = response.json().await.expect("Failed to read JSON");
    assert_eq!(json["statusCode"], 201);
    assert_eq!(json["isError"], false);
    assert_eq!(json["data"]["title"], "Geo");
    assert_eq!(json["data"]["description"], "Geography");
    assert!(json["data"]["id"].as_str().unwrap().parse::<Uuid>().is_ok());
    assert!(!json["data"]["createdOn"].is_null());
    assert!(json["data"]["updatedOn"].is_null());
}

#[tokio::test]
async fn create_quiz_with_empty_title_returns_400() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .post(format!("{}/quizzes", app.address))
        .json(&serde_json::json!({ "title": "", "description": "Geography" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(400, response.status().as_u16());
    let json: serde_json::Value = response.json().await.expect("Failed to read JSON");
    assert_eq!(json["isError"], true);
}

#[tokio::test]
async fn create_quiz_with_missing_title_returns_400() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .post(format!("{}/quizzes", app.address))
        .json(&serde_json::json!({ "description": "Geography" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn get_quizzes_returns_created_quizzes() {
    let app = spawn_app().await;
    let quiz_id = create_quiz(&app, "Geo", "Geography").await;

    let response = app
        .api_client
        .get(format!("{}/quizzes", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(200, response.status().as_u16());
    let json: serde_json::Value = response.json().await.expect("Failed to read JSON");
    let items = json["data"].as_array().expect("Expected a list");
    assert!(
        items
            .iter()
            .any(|quiz| quiz["id"] == quiz_id.to_string().as_str())
    );
}

#[tokio::test]
async fn get_missing_quiz_returns_404_envelope() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .get(format!("{}/quizzes/{}", app.address, Uuid::new_v4()))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(404, response.status().as_u16());
    let json: serde_json::Value = response.json().await.expect("Failed to read JSON");
    assert_eq!(json["statusCode"], 404);
    assert_eq!(json["isError"], true);
    assert!(json["data"].is_null());
}

#[tokio::test]
async fn update_quiz_is_idempotent_on_mutable_fields() {
    let app = spawn_app().await;
    let quiz_id = create_quiz(&app, "Geo", "Geography").await;
    let payload = serde_json::json!({ "title": "World Geo", "description": "All countries" });

    let mut first_updated_on = serde_json::Value::Null;
    for round in 0..2 {
        let response = app
            .api_client
            .put(format!("{}/quizzes/{}", app.address, quiz_id))
            .json(&payload)
            .send()
            .await
            .expect("Failed to execute request");

        assert_eq!(200, response.status().as_u16());
        let json: serde_json::Value = response.json().await.expect("Failed to read JSON");
        assert_eq!(json["data"]["title"], "World Geo");
        assert_eq!(json["data"]["description"], "All countries");
        assert!(!json["data"]["updatedOn"].is_null());

        if round == 0 {
            first_updated_on = json["data"]["updatedOn"].clone();
        }
    }

    // The second write advances updated_on but leaves the fields unchanged.
    let response = app
        .api_client
        .get(format!("{}/quizzes/{}", app.address, quiz_id))
        .send()
        .await
        .expect("Failed to execute request");
    let json: serde_json::Value = response.json().await.expect("Failed to read JSON");
    assert_eq!(json["data"]["title"], "World Geo");
    assert!(!first_updated_on.is_null());
}

#[tokio::test]
async fn update_missing_quiz_returns_404() {
    let app = spawn_app().await;

    let response = app
        .api_client
        .put(format!("{}/quizzes/{}", app.address, Uuid::new_v4()))
        .json(&serde_json::json!({ "title": "Geo", "description": "Geography" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(404, response.status().as_u16());
}

#[tokio::test]
async fn delete_quiz_is_terminal() {
    let app = spawn_app().await;
    let quiz_id = create_quiz(&app, "Geo", "Geography").await;

    let response = app
        .api_client
        .delete(format!("{}/quizzes/{}", app.address, quiz_id))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(200, response.status().as_u16());
    let json: serde_json::Value = response.json().await.expect("Failed to read JSON");
    assert!(json["data"].is_null());

    let get = app
        .api_client
        .get(format!("{}/quizzes/{}", app.address, quiz_id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(404, get.status().as_u16());

    let update = app
        .api_client
        .put(format!("{}/quizzes/{}", app.address, quiz_id))
        .json(&serde_json::json!({ "title": "Geo", "description": "Geography" }))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(404, update.status().as_u16());

    let delete = app
        .api_client
        .delete(format!("{}/quizzes/{}", app.address, quiz_id))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(404, delete.status().as_u16());
}
