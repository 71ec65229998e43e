// Engine plumbing
pub mod context;
pub mod error;
pub mod ftpcommand;
pub mod handlers;
pub mod statement;

// Here's the list of the FTP commands implemented
pub mod allo;
pub mod cdup;
pub mod cwd;
pub mod dele;
pub mod feat;
pub mod help;
pub mod mdtm;
pub mod mfmt;
pub mod mkd;
pub mod noop;
pub mod opts;
pub mod pass;
pub mod pwd;
pub mod quit;
pub mod rmd;
pub mod rnfr;
pub mod rnto;
pub mod size;
pub mod syst;
pub mod type_;
pub mod user;

// The utils and common functions are here
mod utils;

#[cfg(test)]
mod test_support;

pub use context::CommandContext;
pub use error::FtpError;
pub use ftpcommand::FtpCommand;
pub use handlers::{initialize_command_handlers, CommandRegistry};
pub use statement::Statement;
