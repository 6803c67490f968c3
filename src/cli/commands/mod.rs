pub mod init;
pub mod prettify;
