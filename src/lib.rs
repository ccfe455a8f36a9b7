pub mod config;
pub mod error;
pub mod process;
pub mod server;
pub mod verify;
