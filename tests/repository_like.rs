mod common;

use linkhub::domain::repositories::{LikeRepository, LinkRepository};
use linkhub::error::AppError;
use linkhub::infrastructure::persistence::{PgLikeRepository, PgLinkRepository};
use sqlx::PgPool;
use std::sync::Arc;

async fn setup(pool: &PgPool) -> (i64, i64) {
    let user_id = common::create_test_user(pool, "liker@example.com", "Liker").await;
    let new_link = common::new_link(pool, user_id, &[]).await;
    let link = PgLinkRepository::new(Arc::new(pool.clone()))
        .create(new_link)
        .await
        .unwrap();
    (user_id, link.id)
}

async fn likes_for(pool: &PgPool, link_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE link_id = $1")
        .bind(link_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[sqlx::test]
async fn test_add_like_once(pool: PgPool) {
    let (user_id, link_id) = setup(&pool).await;
    let repo = PgLikeRepository::new(Arc::new(pool.clone()));

    assert!(repo.add(user_id, link_id).await.unwrap());
    assert!(!repo.add(user_id, link_id).await.unwrap());

    assert_eq!(likes_for(&pool, link_id).await, 1);
    assert_eq!(common::count_rows(&pool, "likes").await, 1);
}

#[sqlx::test]
async fn test_likes_from_different_users_count_separately(pool: PgPool) {
    let (user_id, link_id) = setup(&pool).await;
    let other = common::create_test_user(&pool, "other@example.com", "Other").await;
    let repo = PgLikeRepository::new(Arc::new(pool.clone()));

    repo.add(user_id, link_id).await.unwrap();
    repo.add(other, link_id).await.unwrap();

    assert_eq!(likes_for(&pool, link_id).await, 2);
}

#[sqlx::test]
async fn test_like_shows_in_link_count(pool: PgPool) {
    let (user_id, link_id) = setup(&pool).await;
    let links = PgLinkRepository::new(Arc::new(pool.clone()));
    let repo = PgLikeRepository::new(Arc::new(pool));

    repo.add(user_id, link_id).await.unwrap();

    let link = links.find_by_id(link_id).await.unwrap().unwrap();
    assert_eq!(link.likes, 1);
}

#[sqlx::test]
async fn test_like_deleted_link_is_not_found(pool: PgPool) {
    let (user_id, link_id) = setup(&pool).await;
    let links = PgLinkRepository::new(Arc::new(pool.clone()));
    let repo = PgLikeRepository::new(Arc::new(pool));

    assert!(links.delete(link_id).await.unwrap());

    match repo.add(user_id, link_id).await {
        Err(AppError::NotFound { message, details }) => {
            assert_eq!(message, "Link not found");
            assert_eq!(details["id"], link_id);
        }
        other => panic!("expected not found, got {other:?}"),
    }
}

#[sqlx::test]
async fn test_like_by_unknown_user_is_not_found(pool: PgPool) {
    let (_, link_id) = setup(&pool).await;
    let repo = PgLikeRepository::new(Arc::new(pool));

    let result = repo.add(9999, link_id).await;

    assert!(matches!(
        result,
        Err(AppError::NotFound { ref message, .. }) if message == "User not found"
    ));
}
