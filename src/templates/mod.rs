// Base template trait for inheritance
pub mod base_template;
pub use base_template::BaseTemplate;

// Individual template files
pub mod admin_page_template;
pub mod confirm_delete_template;
pub mod employee_page_template;
pub mod intro_template;
pub mod login_template;
pub mod not_found_template;
pub mod register_template;
pub mod student_page_template;

// Re-export all templates
pub use admin_page_template::AdminPageTemplate;
pub use confirm_delete_template::ConfirmDeleteTemplate;
pub use employee_page_template::EmployeePageTemplate;
pub use intro_template::IntroTemplate;
pub use login_template::LoginTemplate;
pub use not_found_template::NotFoundTemplate;
pub use register_template::RegisterTemplate;
pub use student_page_template::StudentPageTemplate;
