mod common;

use axum_test::TestServer;
use linkhub::application::services::LinkService;
use linkhub::domain::entities::User;
use linkhub::infrastructure::persistence::{PgLabelRepository, PgLikeRepository, PgLinkRepository};
use linkhub::web::routes::page_routes;
use sqlx::PgPool;
use std::sync::Arc;

fn server(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = page_routes().with_state(state);

    TestServer::new(app).unwrap()
}

async fn seed_link(pool: &PgPool) -> i64 {
    let user_id = common::create_test_user(pool, "owner@example.com", "Owner").await;
    let pool = Arc::new(pool.clone());
    let service = LinkService::new(
        Arc::new(PgLinkRepository::new(pool.clone())),
        Arc::new(PgLabelRepository::new(pool.clone())),
        Arc::new(PgLikeRepository::new(pool)),
    );
    let owner = User::new(
        user_id,
        "owner@example.com".to_string(),
        "Owner".to_string(),
        "hash".to_string(),
        false,
        chrono::Utc::now(),
    );

    service
        .create_link(
            common::submission("Tokio Tutorial", "Rust", &["async", "tokio"]),
            &owner,
        )
        .await
        .unwrap()
        .id
}

#[sqlx::test]
async fn test_index_lists_links(pool: PgPool) {
    let id = seed_link(&pool).await;
    let server = server(pool);

    let response = server.get("/").await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("Tokio Tutorial"));
    assert!(body.contains("Rust"));
    assert!(body.contains("tokio"));
    assert!(body.contains(&format!("/update-link/{id}")));
}

#[sqlx::test]
async fn test_index_empty(pool: PgPool) {
    let server = server(pool);

    let response = server.get("/").await;

    response.assert_status_ok();
    assert!(response.text().contains("No links yet"));
}

#[sqlx::test]
async fn test_update_page_prefills_form(pool: PgPool) {
    let id = seed_link(&pool).await;
    let server = server(pool);

    let response = server.get(&format!("/update-link/{id}")).await;

    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("value=\"Tokio Tutorial\""));
    assert!(body.contains("value=\"async,tokio\""));
    assert!(body.contains("/api/links/"));
}

#[sqlx::test]
async fn test_update_page_unknown_link(pool: PgPool) {
    let server = server(pool);

    let response = server.get("/update-link/404").await;

    response.assert_status_not_found();
    assert!(response.text().contains("Link not found"));
}
