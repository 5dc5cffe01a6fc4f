use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;

use crate::auth::{authenticate, random_session_id};
use crate::models::AppState;
use crate::templates::{IntroTemplate, LoginTemplate};

use super::helpers::{
    build_template_globals, current_user_record, ensure_anonymous, render_template,
    session_id_from_jar, TemplateGlobals,
};

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

pub async fn root_get(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if current_user_record(&state, &jar).is_some() {
        return Redirect::to("/dashboard").into_response();
    }
    let TemplateGlobals {
        current_user,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(&state, &jar);
    render_template(IntroTemplate {
        current_user,
        base_url,
        flash_messages,
        has_flash_messages,
    })
}

pub async fn login_get(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(r) = ensure_anonymous(&state, &jar) {
        return r.into_response();
    }
    render_login_page(&state, &jar, None)
}

pub async fn login_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> axum::response::Response {
    if let Some(r) = ensure_anonymous(&state, &jar) {
        return r.into_response();
    }
    let username = form.username.trim();
    let password = form.password.trim();
    if username.is_empty() || password.is_empty() {
        return render_login_page(&state, &jar, Some("Please fill in all fields".into()));
    }

    match authenticate(&state.store, username, password) {
        Some(user) => {
            if let Err(e) = state.store.set_session(&user) {
                tracing::error!(%e, "Failed to persist session");
                return render_login_page(
                    &state,
                    &jar,
                    Some("Something went wrong, please try again".into()),
                );
            }
            let sid = random_session_id();
            state.sessions.lock().unwrap().insert(sid.clone(), user.id);
            let mut cookie = Cookie::new("session_id", sid);
            cookie.set_path("/");
            cookie.set_http_only(true);
            (jar.add(cookie), Redirect::to("/dashboard")).into_response()
        }
        None => render_login_page(&state, &jar, Some("Invalid username or password".into())),
    }
}

pub async fn logout_post(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(sid) = session_id_from_jar(&jar) {
        state.sessions.lock().unwrap().remove(&sid);
        state.flash_store.lock().unwrap().remove(&sid);
    }
    if let Err(e) = state.store.clear_session() {
        tracing::error!(%e, "Failed to clear session slot");
    }
    let cleared = jar.remove(Cookie::new("session_id", ""));
    (cleared, Redirect::to("/login")).into_response()
}

/// Role dispatcher: `/dashboard` sends each role to its own page.
pub async fn dashboard_get(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    match current_user_record(&state, &jar) {
        Some(user) => Redirect::to(user.role.dashboard_path()),
        None => Redirect::to("/login"),
    }
}

fn render_login_page(state: &AppState, jar: &CookieJar, error: Option<String>) -> axum::response::Response {
    let TemplateGlobals {
        current_user,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(state, jar);
    render_template(LoginTemplate {
        current_user,
        base_url,
        flash_messages,
        has_flash_messages,
        error,
    })
}
