use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use crate::models::{AppState, CurrentUser, Role, UserRecord, UserRow};

pub fn session_id_from_jar(jar: &CookieJar) -> Option<String> {
    jar.get("session_id").map(|c| c.value().to_string())
}

/// Resolve the logged-in user's full record, revalidating the session
/// against the store: a session whose backing record was deleted is treated
/// as logged out and its persisted snapshot is cleared.
///
/// A session id the in-memory map does not know (e.g. after a restart) falls
/// back to the persisted session slot, so a login survives the process.
pub fn current_user_record(state: &AppState, jar: &CookieJar) -> Option<UserRecord> {
    let sid = session_id_from_jar(jar)?;
    let user_id = state.sessions.lock().unwrap().get(&sid).copied();

    let user_id = match user_id {
        Some(id) => id,
        None => {
            let snapshot = state.store.get_session().ok().flatten()?;
            state.sessions.lock().unwrap().insert(sid.clone(), snapshot.id);
            snapshot.id
        }
    };

    let users = state.store.list_users().unwrap_or_default();
    match users.into_iter().find(|u| u.id == user_id) {
        Some(record) => Some(record),
        None => {
            state.sessions.lock().unwrap().remove(&sid);
            if let Err(e) = state.store.clear_session() {
                tracing::warn!(%e, "Failed to clear stale session slot");
            }
            None
        }
    }
}

pub fn build_current_user(state: &AppState, jar: &CookieJar) -> Option<CurrentUser> {
    let record = current_user_record(state, jar)?;
    Some(CurrentUser {
        username: record.username,
        role: record.role,
    })
}

pub fn take_flash_messages(state: &AppState, jar: &CookieJar) -> Vec<String> {
    let Some(sid) = session_id_from_jar(jar) else {
        return vec![];
    };
    let mut fs = state.flash_store.lock().unwrap();
    fs.remove(&sid).unwrap_or_default()
}

pub fn push_flash(state: &AppState, jar: &CookieJar, message: impl Into<String>) {
    if let Some(sid) = session_id_from_jar(jar) {
        state
            .flash_store
            .lock()
            .unwrap()
            .entry(sid)
            .or_default()
            .push(message.into());
    }
}

#[derive(Default)]
pub struct TemplateGlobals {
    pub current_user: Option<CurrentUser>,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
}

pub fn build_template_globals(state: &AppState, jar: &CookieJar) -> TemplateGlobals {
    let current_user = build_current_user(state, jar);
    let flash_messages = take_flash_messages(state, jar);
    let has_flash_messages = !flash_messages.is_empty();
    TemplateGlobals {
        current_user,
        base_url: state.public_base_url.clone(),
        flash_messages,
        has_flash_messages,
    }
}

/// Guard for a role-restricted page: anonymous visitors go to the login
/// view, a logged-in user with the wrong role goes back to `/dashboard`.
pub fn ensure_role(state: &AppState, jar: &CookieJar, role: Role) -> Option<Redirect> {
    match build_current_user(state, jar) {
        None => Some(Redirect::to("/login")),
        Some(user) if user.role != role => Some(Redirect::to("/dashboard")),
        Some(_) => None,
    }
}

/// Guard for login/register: already-authenticated users are sent to their
/// dashboard dispatcher instead.
pub fn ensure_anonymous(state: &AppState, jar: &CookieJar) -> Option<Redirect> {
    if build_current_user(state, jar).is_some() {
        return Some(Redirect::to("/dashboard"));
    }
    None
}

/// Render an ISO-8601 creation stamp as a short date; anything unparsable
/// falls through unchanged.
pub fn format_created(created_at: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(created_at) {
        Ok(dt) => dt.format("%b %-d, %Y").to_string(),
        Err(_) => created_at.to_string(),
    }
}

pub fn user_row(user: &UserRecord) -> UserRow {
    UserRow {
        id: user.id,
        username: user.username.clone(),
        role_label: user.role.label().to_string(),
        is_student: user.role == Role::Student,
        dept: user.dept.clone().unwrap_or_else(|| "N/A".to_string()),
        created: format_created(&user.created_at),
    }
}

pub fn render_template<T: askama::Template>(t: T) -> Response {
    match t.render() {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(%e, "Template render error");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
