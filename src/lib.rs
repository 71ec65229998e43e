//! FTP control-connection engine: statement parsing, verb dispatch,
//! per-connection session state and virtual path mapping.

pub mod channel;
pub mod config;
pub mod constants;
pub mod core_auth;
pub mod core_cli;
pub mod core_ftpcommand;
pub mod core_log;
pub mod core_network;
pub mod core_path;
pub mod helpers;
pub mod server;

pub use channel::{Channel, TransferType};
pub use config::Config;
pub use core_network::Dispatcher;
