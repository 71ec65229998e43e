pub mod core_auth;
pub mod helper;

pub use core_auth::PasswdEntry;
pub use helper::PasswdAuthenticator;

/// Principal/credential provider consulted by `PASS`.
pub trait Authenticator: Send + Sync {
    fn authenticate(&self, username: &str, password: &str) -> bool;
}
