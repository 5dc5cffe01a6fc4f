pub mod app_state;
pub mod current_user;
pub mod dept_summary;
pub mod role;
pub mod user_record;
pub mod user_row;

pub use app_state::AppState;
pub use current_user::CurrentUser;
pub use dept_summary::DeptSummary;
pub use role::Role;
pub use user_record::{NewUser, UserRecord};
pub use user_row::UserRow;
