use axum::{
    extract::{Form, State},
    response::IntoResponse,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::auth::{departments, username_exists};
use crate::models::{AppState, NewUser, Role};
use crate::templates::RegisterTemplate;

use super::helpers::{build_template_globals, ensure_anonymous, render_template, TemplateGlobals};

#[derive(Deserialize)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub dept: String,
}

pub async fn register_get(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(r) = ensure_anonymous(&state, &jar) {
        return r.into_response();
    }
    render_register_page(&state, &jar, None, None)
}

pub async fn register_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<RegisterForm>,
) -> axum::response::Response {
    if let Some(r) = ensure_anonymous(&state, &jar) {
        return r.into_response();
    }
    let username = form.username.trim().to_string();
    let password = form.password.trim().to_string();
    let dept = form.dept.trim().to_string();

    if username.is_empty() || password.is_empty() || dept.is_empty() {
        return render_register_page(&state, &jar, Some("All fields are required".into()), None);
    }
    if username_exists(&state.store, &username) {
        return render_register_page(&state, &jar, Some("Username already exists".into()), None);
    }

    let new_user = NewUser {
        username,
        password,
        role: Role::Student,
        dept: Some(dept),
    };
    match state.store.add_user(new_user) {
        Ok(_) => render_register_page(
            &state,
            &jar,
            None,
            Some("Account created! You can now sign in.".into()),
        ),
        Err(e) => {
            tracing::error!(%e, "Failed to persist new user");
            render_register_page(&state, &jar, Some("Failed to create account".into()), None)
        }
    }
}

fn render_register_page(
    state: &AppState,
    jar: &CookieJar,
    error: Option<String>,
    success: Option<String>,
) -> axum::response::Response {
    let TemplateGlobals {
        current_user,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(state, jar);
    render_template(RegisterTemplate {
        current_user,
        base_url,
        flash_messages,
        has_flash_messages,
        departments: departments().iter().map(|d| d.to_string()).collect(),
        error,
        success,
    })
}
