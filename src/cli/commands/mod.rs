pub mod config;
pub mod export;
pub mod init;
pub mod status;
pub mod update;
pub mod weekly;
