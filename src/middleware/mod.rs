use axum::Router;
use tower_http::trace::TraceLayer;

mod request_id;

pub fn wrap(router: Router) -> Router {
    router
        .layer(request_id::propagate())
        .layer(TraceLayer::new_for_http())
        .layer(request_id::set())
}
