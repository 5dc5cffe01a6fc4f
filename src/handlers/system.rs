use axum::{extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::cookie::CookieJar;

use crate::models::AppState;
use crate::templates::NotFoundTemplate;

use super::helpers::{build_template_globals, render_template, TemplateGlobals};

/// Catch-all for unmatched paths, rendered the same for anonymous and
/// authenticated visitors.
pub async fn not_found(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let TemplateGlobals {
        current_user,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(&state, &jar);
    let page = render_template(NotFoundTemplate {
        current_user,
        base_url,
        flash_messages,
        has_flash_messages,
    });
    (StatusCode::NOT_FOUND, page)
}
