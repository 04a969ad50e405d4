//! Quran Router

use crate::application::config::QuranConfig;
use crate::domain::repository::AyahRepository;
use crate::infra::postgres::PgQuranRepository;
use crate::presentation::handlers::{self, QuranAppState};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Create the quran router with PostgreSQL repository
pub fn quran_router(repo: PgQuranRepository, config: QuranConfig) -> Router {
    quran_router_generic(repo, config)
}

/// Create a generic quran router for any repository implementation
pub fn quran_router_generic<R>(repo: R, config: QuranConfig) -> Router
where
    R: AyahRepository + Clone + Send + Sync + 'static,
{
    let state = QuranAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/structure", get(handlers::structure::<R>))
        .route("/surahs", get(handlers::surahs::<R>))
        .with_state(state)
}
