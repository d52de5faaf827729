use quiz_platform::{app, server::app_state::AppState};
use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
};
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    pub api_client: reqwest::Client,
}

pub async fn spawn_app() -> TestApp {
    dotenv::dotenv().ok();

    let pool = configure_database().await;
    let state = AppState::from_pool(pool.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let address = format!("http://{}", listener.local_addr().unwrap());

    tokio::spawn(async move {
        axum::serve(listener, app(state))
            .await
            .expect("Server crashed");
    });

    TestApp {
        address,
        db_pool: pool,
        api_client: reqwest::Client::new(),
    }
}

async fn configure_database() -> PgPool {
    let options = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set")
        .parse::<PgConnectOptions>()
        .expect("Failed to parse DATABASE_URL");

    let connection = PgPoolOptions::new()
        .connect_with(options.clone().database("postgres"))
        .await
        .expect("Failed to connect to Postgres");

    let database_name = format!("test_{}", Uuid::new_v4().to_string().replace('-', ""));

    sqlx::query(&format!("CREATE DATABASE \"{}\"", database_name))
        .execute(&connection)
        .await
        .expect("Failed to create database");

    let pool = PgPoolOptions::new()
        .connect_with(options.database(&database_name))
        .await
        .expect("Failed to connect to new database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to migrate database");

    pool
}

#[allow(dead_code)]
pub async fn create_quiz(app: &TestApp, title: &str, description: &str) -> Uuid {
    let response = app
        .api_client
        .post(format!("{}/quizzes", app.address))
        .json(&serde_json::json!({ "title": title, "description": description }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(201, response.status().as_u16());
    let json: serde_json::Value = response.json().await.expect("Failed to read JSON");
    json["data"]["id"]
        .as_str()
        .expect("Missing quiz id")
        .parse()
        .expect("Invalid quiz id")
}

#[allow(dead_code)]
pub async fn create_question(app: &TestApp, quiz_id: Uuid, text: &str, is_mandatory: bool) -> Uuid {
    let response = app
        .api_client
        .post(format!("{}/quizzes/{}/questions", app.address, quiz_id))
        .json(&serde_json::json!({ "text": text, "isMandatory": is_mandatory }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(201, response.status().as_u16());
    let json: serde_json::Value = response.json().await.expect("Failed to read JSON");
    json["data"]["id"]
        .as_str()
        .expect("Missing question id")
        .parse()
        .expect("Invalid question id")
}

#[allow(dead_code)]
pub async fn create_question_option(
    app: &TestApp,
    quiz_id: Uuid,
    question_id: Uuid,
    text: &str,
    is_answer: bool,
) -> Uuid {
    let response = app
        .api_client
        .post(format!(
            "{}/quizzes/{}/questions/{}/questionOptions",
            app.address, quiz_id, question_id
        ))
        .json(&serde_json::json!({ "text": text, "isAnswer": is_answer }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(201, response.status().as_u16());
    let json: serde_json::Value = response.json().await.expect("Failed to read JSON");
    json["data"]["id"]
        .as_str()
        .expect("Missing option id")
        .parse()
        .expect("Invalid option id")
}
