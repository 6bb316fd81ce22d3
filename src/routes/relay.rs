use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use tracing::{info, warn};

use crate::dto::requests::RelayQuery;
use crate::error::{RelayError, RelayResult};
use crate::state::AppState;
use crate::upstream::DEFAULT_CONTENT_TYPE;

/// GET with `owner`, `repository`, `tag`, `filename` query parameters:
/// validate, check the allowlist, fetch the release asset, relay it.
pub async fn relay(
    State(state): State<AppState>,
    query: Result<Query<RelayQuery>, QueryRejection>,
) -> RelayResult<impl IntoResponse> {
    // A query string that fails to deserialize (e.g. a duplicated key) gets
    // the same 400 shape as absent parameters; nothing but the four error
    // bodies ever reaches the caller.
    let Query(query) = query.map_err(|_| RelayError::MissingParameters)?;
    let req = query.validate()?;

    if !state.allowlist.contains(&req.owner, &req.repo) {
        warn!(owner = %req.owner, repo = %req.repo, "repository not in allowlist");
        return Err(RelayError::RepositoryNotAllowed);
    }

    let asset = state.upstream.fetch_asset(&req).await?;

    info!(
        owner = %req.owner,
        repo = %req.repo,
        tag = %req.tag,
        filename = %req.filename,
        bytes = asset.body.len(),
        "relaying release asset"
    );

    let mut headers = cors_headers();

    let content_type = asset.content_type.as_deref().unwrap_or(DEFAULT_CONTENT_TYPE);
    match HeaderValue::from_str(content_type) {
        Ok(v) => headers.insert(header::CONTENT_TYPE, v),
        Err(_) => headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(DEFAULT_CONTENT_TYPE),
        ),
    };

    // The filename is interpolated unescaped; a double-quote in it corrupts
    // the header. Known limitation carried over from the original contract.
    let disposition = format!("attachment; filename=\"{}\"", req.filename);
    if let Ok(v) = HeaderValue::from_str(&disposition) {
        headers.insert(header::CONTENT_DISPOSITION, v);
    }

    Ok((headers, asset.body))
}

pub async fn preflight() -> impl IntoResponse {
    (StatusCode::NO_CONTENT, cors_headers())
}

fn cors_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("GET, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("*"),
    );
    headers
}
