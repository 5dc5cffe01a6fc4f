use axum::http::header::CACHE_CONTROL;
use axum::http::HeaderValue;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::models::AppState;

// Embed the default stylesheet in the binary
const DEFAULT_STYLESHEET: &str = include_str!("../static/styles.css");

pub fn build_router(state: AppState) -> Router {
    // Always serve styles.css - use custom if provided, otherwise the
    // embedded default.
    let stylesheet_content = state
        .custom_css
        .clone()
        .unwrap_or_else(|| DEFAULT_STYLESHEET.to_string());

    Router::new()
        .route("/", get(handlers::auth::root_get))
        .route("/login", get(handlers::auth::login_get).post(handlers::auth::login_post))
        .route("/register", get(handlers::register::register_get).post(handlers::register::register_post))
        .route("/logout", post(handlers::auth::logout_post))
        .route("/dashboard", get(handlers::auth::dashboard_get))
        .route("/admin", get(handlers::admin::admin_get))
        .route("/admin/employees", post(handlers::admin::create_employee))
        .route("/employee", get(handlers::employee::employee_get))
        .route("/confirm/delete-student/:id", get(handlers::employee::confirm_delete_get))
        .route("/employee/students/:id/delete", post(handlers::employee::delete_student_post))
        .route("/student", get(handlers::student::student_get))
        .route(
            "/static/styles.css",
            get(move || {
                let css = stylesheet_content.clone();
                async move { ([(axum::http::header::CONTENT_TYPE, "text/css")], css) }
            }),
        )
        // Serve any extra static files with a long-lived cache header
        .nest_service(
            "/static",
            ServiceBuilder::new()
                .layer(SetResponseHeaderLayer::if_not_present(
                    CACHE_CONTROL,
                    HeaderValue::from_static("public, max-age=31536000, immutable"),
                ))
                .service(ServeDir::new("static")),
        )
        .fallback(handlers::system::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
