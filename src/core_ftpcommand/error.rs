// Failures raised by command handlers and translated by the dispatcher
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FtpError {
    #[error("syntax error in parameters or arguments")]
    Syntax,

    #[error("login required")]
    NotLoggedIn,

    #[error("login rejected for user {0}")]
    LoginFailed(String),

    #[error("path not found or not of the expected kind: {0}")]
    NotFound(String),

    #[error("path already exists: {0}")]
    AlreadyExists(String),

    #[error("bad sequence of commands")]
    BadSequence,

    #[error("parameter not implemented: {0}")]
    ParameterNotImplemented(String),

    #[error("internal failure during {0}")]
    Internal(String),

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),
}

impl FtpError {
    /// Reply line sent to the client for this failure.
    ///
    /// The text never carries the failure's own payload, so paths and OS
    /// error details stay in the server log.
    pub fn to_ftp_response(&self) -> &'static str {
        match self {
            FtpError::Syntax => "501 Syntax error in parameters or arguments.",
            FtpError::NotLoggedIn => "530 Not logged in.",
            FtpError::LoginFailed(_) => "530 Login incorrect.",
            FtpError::NotFound(_) => "550 Requested action not taken. File unavailable.",
            FtpError::AlreadyExists(_) => "550 Requested action not taken. File exists.",
            FtpError::BadSequence => "503 Bad sequence of commands.",
            FtpError::ParameterNotImplemented(_) => "504 Command not implemented for that parameter.",
            FtpError::Internal(_) | FtpError::Io(_) => {
                "451 Requested action aborted. Local error in processing."
            }
        }
    }

    /// Whether the failure is attributable to the client's request.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, FtpError::Internal(_) | FtpError::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_not_found_hides_the_path() {
        let err = FtpError::NotFound("/srv/ftp/secret".to_string());
        assert!(!err.to_ftp_response().contains("secret"));
        assert!(err.to_ftp_response().starts_with("550 "));
    }

    #[test]
    fn test_io_maps_to_internal_reply() {
        let err = FtpError::from(io::Error::new(io::ErrorKind::Other, "disk on fire"));
        assert_eq!(
            err.to_ftp_response(),
            FtpError::Internal("delete file".to_string()).to_ftp_response()
        );
        assert!(!err.to_ftp_response().contains("disk on fire"));
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_reply_codes() {
        assert!(FtpError::Syntax.to_ftp_response().starts_with("501 "));
        assert!(FtpError::NotLoggedIn.to_ftp_response().starts_with("530 "));
        assert!(FtpError::BadSequence.to_ftp_response().starts_with("503 "));
        assert!(FtpError::ParameterNotImplemented("E".into())
            .to_ftp_response()
            .starts_with("504 "));
        assert!(FtpError::Syntax.is_client_error());
    }
}
