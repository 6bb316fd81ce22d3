use axum::routing::get;
use axum::Router;

use crate::state::AppState;

mod health;
mod relay;

pub fn router() -> Router<AppState> {
    // The relay is mounted at both `/` and `/api`; the latter mirrors the
    // original deployment path.
    Router::new()
        .route("/healthz", get(health::healthz))
        .route("/", get(relay::relay).options(relay::preflight))
        .route("/api", get(relay::relay).options(relay::preflight))
}
