use askama::Template;

use super::base_template::BaseTemplate;
use crate::models::CurrentUser;

/// Confirmation step shown before a student record is deleted.
#[derive(Template)]
#[template(path = "confirm_delete.html")]
pub struct ConfirmDeleteTemplate {
    pub current_user: Option<CurrentUser>,
    pub base_url: String,
    pub flash_messages: Vec<String>,
    pub has_flash_messages: bool,
    pub target_id: u64,
    pub target_username: String,
}

crate::impl_base_template!(ConfirmDeleteTemplate);
