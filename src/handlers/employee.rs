use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::cookie::CookieJar;

use crate::models::{AppState, DeptSummary, Role, UserRow};
use crate::templates::{ConfirmDeleteTemplate, EmployeePageTemplate};

use super::helpers::{
    build_template_globals, ensure_role, push_flash, render_template, user_row, TemplateGlobals,
};

pub async fn employee_get(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(r) = ensure_role(&state, &jar, Role::Employee) {
        return r.into_response();
    }
    let users = state.store.list_users().unwrap_or_else(|e| {
        tracing::error!(%e, "Failed to read user list");
        vec![]
    });

    let rows: Vec<UserRow> = users.iter().map(user_row).collect();

    let mut dept_summaries: Vec<DeptSummary> = vec![];
    for user in users.iter() {
        if let Some(dept) = &user.dept {
            let idx = match dept_summaries.iter().position(|c| &c.name == dept) {
                Some(i) => i,
                None => {
                    dept_summaries.push(DeptSummary {
                        name: dept.clone(),
                        total: 0,
                        students: 0,
                        employees: 0,
                    });
                    dept_summaries.len() - 1
                }
            };
            let entry = &mut dept_summaries[idx];
            entry.total += 1;
            match user.role {
                Role::Student => entry.students += 1,
                Role::Employee => entry.employees += 1,
                Role::Admin => {}
            }
        }
    }

    let TemplateGlobals {
        current_user,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(&state, &jar);
    render_template(EmployeePageTemplate {
        current_user,
        base_url,
        flash_messages,
        has_flash_messages,
        rows,
        dept_summaries,
    })
}

/// First step of the two-step delete: show a confirmation page for the
/// targeted student. Anything that is not an existing student account skips
/// straight back to the dashboard.
pub async fn confirm_delete_get(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<u64>,
) -> impl IntoResponse {
    if let Some(r) = ensure_role(&state, &jar, Role::Employee) {
        return r.into_response();
    }
    let users = state.store.list_users().unwrap_or_default();
    let Some(target) = users.iter().find(|u| u.id == id && u.role == Role::Student) else {
        return Redirect::to("/employee").into_response();
    };

    let TemplateGlobals {
        current_user,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(&state, &jar);
    render_template(ConfirmDeleteTemplate {
        current_user,
        base_url,
        flash_messages,
        has_flash_messages,
        target_id: target.id,
        target_username: target.username.clone(),
    })
}

pub async fn delete_student_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Path(id): Path<u64>,
) -> impl IntoResponse {
    if let Some(r) = ensure_role(&state, &jar, Role::Employee) {
        return r.into_response();
    }
    let users = state.store.list_users().unwrap_or_default();
    match users.iter().find(|u| u.id == id) {
        Some(target) if target.role == Role::Student => {
            let username = target.username.clone();
            match state.store.delete_user(id) {
                Ok(()) => push_flash(&state, &jar, format!("Student {username} deleted successfully!")),
                Err(e) => {
                    tracing::error!(%e, "Failed to delete user");
                    push_flash(&state, &jar, "Failed to delete user");
                }
            }
        }
        Some(_) => push_flash(&state, &jar, "Only student accounts can be deleted"),
        None => push_flash(&state, &jar, "User not found"),
    }
    Redirect::to("/employee").into_response()
}
