//! Request handlers.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use serde::Deserialize;

use credo_verify::VerificationState;

use crate::pages;
use crate::server::AppState;

#[derive(Deserialize)]
pub struct VerifyParams {
    /// The secret token from the QR link's query string.
    pub token: Option<String>,
}

/// `GET /verify/:public_id?token=...` — run one verification attempt and
/// render its terminal state.
///
/// Status mapping: `Verified` 200, `InvalidRequest` 400, `Unverified` 404.
/// The 404 body is identical for a genuine no-match and a store failure.
/// The query extractor is optional: a query string that fails to
/// deserialize (e.g. a repeated `token` parameter) is a malformed link and
/// renders the same generic invalid-link page, never a framework
/// diagnostic. If the client disconnects first, axum drops this future and
/// the in-flight lookup result is discarded without updating anything.
pub async fn verify(
    State(state): State<Arc<AppState>>,
    Path(public_id): Path<String>,
    params: Option<Query<VerifyParams>>,
) -> (StatusCode, Html<String>) {
    let token = params.as_ref().and_then(|Query(p)| p.token.as_deref());
    let outcome = state.flow.run(Some(public_id.as_str()), token).await;
    let status = match &outcome {
        VerificationState::Verified(_) => StatusCode::OK,
        VerificationState::InvalidRequest => StatusCode::BAD_REQUEST,
        VerificationState::Unverified => StatusCode::NOT_FOUND,
        VerificationState::Pending => StatusCode::OK,
    };
    (status, Html(pages::render(&outcome)))
}

/// `GET /` — landing page.
pub async fn landing() -> Html<String> {
    Html(pages::render_landing())
}

/// `GET /health` — liveness probe.
pub async fn health() -> &'static str {
    "ok"
}
