pub mod clear;
pub mod export;
pub mod init;
pub mod resolve;
