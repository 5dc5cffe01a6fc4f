use axum::{
    extract::{Form, Query, State},
    response::{IntoResponse, Redirect},
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use crate::auth::{departments, username_exists};
use crate::models::{AppState, DeptSummary, NewUser, Role, UserRow};
use crate::templates::AdminPageTemplate;

use super::helpers::{
    build_template_globals, ensure_role, push_flash, render_template, user_row, TemplateGlobals,
};

#[derive(Deserialize)]
pub struct AdminQuery {
    pub dept: Option<String>,
}

pub async fn admin_get(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(query): Query<AdminQuery>,
) -> impl IntoResponse {
    if let Some(r) = ensure_role(&state, &jar, Role::Admin) {
        return r.into_response();
    }
    let users = state.store.list_users().unwrap_or_else(|e| {
        tracing::error!(%e, "Failed to read user list");
        vec![]
    });

    let total_students = users.iter().filter(|u| u.role == Role::Student).count();
    let total_employees = users.iter().filter(|u| u.role == Role::Employee).count();

    // Student head-count per department, for the stats cards.
    let mut student_counts: Vec<DeptSummary> = vec![];
    for user in users.iter().filter(|u| u.role == Role::Student) {
        if let Some(dept) = &user.dept {
            match student_counts.iter().position(|c| &c.name == dept) {
                Some(i) => student_counts[i].students += 1,
                None => student_counts.push(DeptSummary {
                    name: dept.clone(),
                    total: 0,
                    students: 1,
                    employees: 0,
                }),
            }
        }
    }

    let selected_dept = query.dept.unwrap_or_default();
    let visible = users
        .iter()
        .filter(|u| selected_dept.is_empty() || u.dept.as_deref() == Some(selected_dept.as_str()));
    let mut employees: Vec<UserRow> = vec![];
    let mut students: Vec<UserRow> = vec![];
    for user in visible {
        match user.role {
            Role::Employee => employees.push(user_row(user)),
            Role::Student => students.push(user_row(user)),
            Role::Admin => {}
        }
    }

    let TemplateGlobals {
        current_user,
        base_url,
        flash_messages,
        has_flash_messages,
    } = build_template_globals(&state, &jar);
    render_template(AdminPageTemplate {
        current_user,
        base_url,
        flash_messages,
        has_flash_messages,
        total_students,
        total_employees,
        student_counts,
        departments: departments().iter().map(|d| d.to_string()).collect(),
        selected_dept,
        employees,
        students,
    })
}

#[derive(Deserialize)]
pub struct CreateEmployeeForm {
    pub username: String,
    pub password: String,
    pub dept: String,
}

pub async fn create_employee(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<CreateEmployeeForm>,
) -> axum::response::Response {
    if let Some(r) = ensure_role(&state, &jar, Role::Admin) {
        return r.into_response();
    }
    let username = form.username.trim().to_string();
    let password = form.password.trim().to_string();
    let dept = form.dept.trim().to_string();

    if username.is_empty() || password.is_empty() || dept.is_empty() {
        push_flash(&state, &jar, "All fields are required");
        return Redirect::to("/admin").into_response();
    }
    if username_exists(&state.store, &username) {
        push_flash(&state, &jar, "Username already exists");
        return Redirect::to("/admin").into_response();
    }

    let new_user = NewUser {
        username,
        password,
        role: Role::Employee,
        dept: Some(dept),
    };
    match state.store.add_user(new_user) {
        Ok(_) => push_flash(&state, &jar, "Employee added successfully!"),
        Err(e) => {
            tracing::error!(%e, "Failed to persist new employee");
            push_flash(&state, &jar, "Failed to add employee");
        }
    }
    Redirect::to("/admin").into_response()
}
