pub mod config;
pub mod init;
pub mod seats;
pub mod show;
pub mod summary;
