//! User lookup routes

pub mod get_user;

pub use get_user::get_user;
