use askama::Template;

use super::base_template::BaseTemplate;
use crate::models::{CurrentUser, DeptSummary, UserRow};

#[derive(Template)]
#[template(path = "employee.html")]
pub struct EmployeePageTemplate {
    pub current_user: Option<CurrentUser>,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub rows: Vec<UserRow>,
    pub dept_summaries: Vec<DeptSummary>,
}

crate::impl_base_template!(EmployeePageTemplate);
