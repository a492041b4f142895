pub mod auth;
pub mod operations;
pub mod sync;
