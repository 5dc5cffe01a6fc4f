use askama::Template;

use super::base_template::BaseTemplate;
use crate::models::{CurrentUser, DeptSummary, UserRow};

#[derive(Template)]
#[template(path = "admin.html")]
pub struct AdminPageTemplate {
    pub current_user: Option<CurrentUser>,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub total_students: usize,
    pub total_employees: usize,
    /// Student head-counts per department (stats cards).
    pub student_counts: Vec<DeptSummary>,
    pub departments: Vec<String>,
    /// Currently applied department filter, empty for "all".
    pub selected_dept: String,
    pub employees: Vec<UserRow>,
    pub students: Vec<UserRow>,
}

crate::impl_base_template!(AdminPageTemplate);
