//! Shared application state injected into every handler.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{LinkService, UserService};
use crate::infrastructure::persistence::{
    PgLabelRepository, PgLikeRepository, PgLinkRepository, PgUserRepository,
};

pub type AppLinkService = LinkService<PgLinkRepository, PgLabelRepository, PgLikeRepository>;
pub type AppUserService = UserService<PgUserRepository>;

/// Services wired to the PostgreSQL repositories.
///
/// Cloning is cheap; every field is an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<PgPool>,
    pub link_service: Arc<AppLinkService>,
    pub user_service: Arc<AppUserService>,
}

impl AppState {
    /// Builds repositories and services over one connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        let link_repository = Arc::new(PgLinkRepository::new(pool.clone()));
        let label_repository = Arc::new(PgLabelRepository::new(pool.clone()));
        let like_repository = Arc::new(PgLikeRepository::new(pool.clone()));
        let user_repository = Arc::new(PgUserRepository::new(pool.clone()));

        Self {
            link_service: Arc::new(LinkService::new(
                link_repository,
                label_repository,
                like_repository,
            )),
            user_service: Arc::new(UserService::new(user_repository)),
            pool,
        }
    }
}
