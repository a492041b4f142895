pub mod add;
pub mod init;
pub mod list;
pub mod pull;
pub mod push;
pub mod save;
pub mod status;
pub mod undo;
