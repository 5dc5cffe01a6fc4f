use axum::{extract::State, response::IntoResponse};
use axum_extra::extract::cookie::CookieJar;

use crate::models::{AppState, Role};
use crate::templates::StudentPageTemplate;

use super::helpers::{
    build_template_globals, current_user_record, ensure_role, format_created, render_template,
    TemplateGlobals,
};

/// Read-only self-view of the logged-in student's own record.
pub async fn student_get(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(r) = ensure_role(&state, &jar, Role::Student) {
        return r.into_response();
    }
    // The guard above guarantees a resolvable student record.
    let Some(record) = current_user_record(&state, &jar) else {
        return axum::response::Redirect::to("/login").into_response();
    };

    let TemplateGlobals {
        current_user,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(&state, &jar);
    render_template(StudentPageTemplate {
        current_user,
        base_url,
        flash_messages,
        has_flash_messages,
        user_id: record.id,
        username: record.username.clone(),
        role_label: record.role.label().to_string(),
        dept: record.dept.clone().unwrap_or_else(|| "Not Assigned".to_string()),
        member_since: format_created(&record.created_at),
    })
}
