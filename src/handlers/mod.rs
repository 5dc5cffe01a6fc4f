pub mod admin;
pub mod auth;
pub mod employee;
pub mod helpers;
pub mod register;
pub mod student;
pub mod system;
