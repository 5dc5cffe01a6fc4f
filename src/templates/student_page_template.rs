use askama::Template;

use super::base_template::BaseTemplate;
use crate::models::CurrentUser;

#[derive(Template)]
#[template(path = "student.html")]
pub struct StudentPageTemplate {
    pub current_user: Option<CurrentUser>,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub user_id: u64,
    pub username: String,
    pub role_label: String,
    pub dept: String,
    pub member_since: String,
}

crate::impl_base_template!(StudentPageTemplate);
