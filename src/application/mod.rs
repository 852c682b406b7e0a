pub mod credential;
pub mod handler;
pub mod validate;
