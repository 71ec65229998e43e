use crate::core_auth::Authenticator;
use crate::core_ftpcommand::error::FtpError;
use crate::core_path::{join_under_root, resolve_virtual_path};
use crate::helpers::to_wire;
use log::{trace, warn};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::{AsyncWrite, AsyncWriteExt};

pub type ControlWriter = Box<dyn AsyncWrite + Send + Unpin>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransferType {
    Ascii,
    #[default]
    Binary,
}

/// Session state and reply surface of one control connection.
pub struct Channel {
    peer: String,
    writer: ControlWriter,
    authenticator: Arc<dyn Authenticator>,
    virtual_root: PathBuf,
    working_directory: String,
    transfer_type: TransferType,
    username: Option<String>,
    is_authenticated: bool,
    rename_from: Option<PathBuf>,
    closed: bool,
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("peer", &self.peer)
            .field("virtual_root", &self.virtual_root)
            .field("working_directory", &self.working_directory)
            .field("transfer_type", &self.transfer_type)
            .field("username", &self.username)
            .field("is_authenticated", &self.is_authenticated)
            .field("closed", &self.closed)
            .finish()
    }
}

impl Channel {
    pub fn new(
        peer: impl Into<String>,
        writer: ControlWriter,
        virtual_root: PathBuf,
        authenticator: Arc<dyn Authenticator>,
    ) -> Self {
        Self {
            peer: peer.into(),
            writer,
            authenticator,
            virtual_root,
            working_directory: String::from("/"),
            transfer_type: TransferType::default(),
            username: None,
            is_authenticated: false,
            rename_from: None,
            closed: false,
        }
    }

    /// Writes `text` as CRLF-terminated reply line(s) and flushes.
    pub async fn send(&mut self, text: &str) -> Result<(), FtpError> {
        let wire = to_wire(text);
        trace!("[{}] <- {}", self.peer, wire.trim_end());
        self.writer.write_all(wire.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }

    pub fn check_login(&self) -> Result<(), FtpError> {
        if self.is_authenticated {
            Ok(())
        } else {
            Err(FtpError::NotLoggedIn)
        }
    }

    /// Absolute virtual path for a client-supplied path.
    pub fn resolve_virtual_path(&self, path: &str) -> Result<String, FtpError> {
        resolve_virtual_path(&self.working_directory, path)
    }

    /// Maps a client path (absolute or relative to the working directory)
    /// onto the real filesystem, never leaving `virtual_root`.
    pub fn map_virtual_path_to_local_path(&self, path: &str) -> Result<PathBuf, FtpError> {
        let virtual_path = self.resolve_virtual_path(path)?;
        self.map_resolved_path(&virtual_path)
    }

    /// Same as [`Channel::map_virtual_path_to_local_path`] for a path that
    /// is already normalized.
    pub fn map_resolved_path(&self, virtual_path: &str) -> Result<PathBuf, FtpError> {
        let local_path = join_under_root(&self.virtual_root, virtual_path)?;
        self.ensure_within_root(&local_path, virtual_path)?;
        Ok(local_path)
    }

    // Symlinks inside the root may still point outside of it. A target that
    // does not exist yet is judged by its nearest existing ancestor.
    fn ensure_within_root(&self, local_path: &Path, virtual_path: &str) -> Result<(), FtpError> {
        let root = self
            .virtual_root
            .canonicalize()
            .unwrap_or_else(|_| self.virtual_root.clone());

        for ancestor in local_path.ancestors() {
            match ancestor.canonicalize() {
                Ok(canonical) if canonical.starts_with(&root) => return Ok(()),
                Ok(canonical) => {
                    warn!(
                        "[{}] {} resolves outside of the virtual root: {:?}",
                        self.peer, virtual_path, canonical
                    );
                    return Err(FtpError::NotFound(virtual_path.to_string()));
                }
                // dangling symlink or unreadable entry
                Err(_) if ancestor.symlink_metadata().is_ok() => {
                    warn!(
                        "[{}] {} cannot be resolved at {:?}",
                        self.peer, virtual_path, ancestor
                    );
                    return Err(FtpError::NotFound(virtual_path.to_string()));
                }
                Err(_) => {}
            }
            if ancestor == self.virtual_root.as_path() {
                break;
            }
        }
        Ok(())
    }

    pub fn peer(&self) -> &str {
        &self.peer
    }

    pub fn authenticator(&self) -> &dyn Authenticator {
        self.authenticator.as_ref()
    }

    pub fn virtual_root(&self) -> &Path {
        &self.virtual_root
    }

    pub fn working_directory(&self) -> &str {
        &self.working_directory
    }

    /// Only accepts normalized absolute virtual paths.
    pub fn set_working_directory(&mut self, virtual_path: String) {
        debug_assert!(virtual_path.starts_with('/'));
        if virtual_path.starts_with('/') {
            self.working_directory = virtual_path;
        }
    }

    pub fn transfer_type(&self) -> TransferType {
        self.transfer_type
    }

    pub fn set_transfer_type(&mut self, transfer_type: TransferType) {
        self.transfer_type = transfer_type;
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Starts a new login sequence; any previous login is dropped.
    pub fn begin_login(&mut self, username: &str) {
        self.username = Some(username.to_string());
        self.is_authenticated = false;
    }

    pub fn complete_login(&mut self) {
        self.is_authenticated = true;
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    pub fn set_rename_from(&mut self, path: PathBuf) {
        self.rename_from = Some(path);
    }

    pub fn take_rename_from(&mut self) -> Option<PathBuf> {
        self.rename_from.take()
    }

    /// Marks the session as ended; the dispatcher stops reading afterwards.
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub async fn shutdown(&mut self) {
        if let Err(e) = self.writer.shutdown().await {
            trace!("[{}] shutdown of control writer failed: {}", self.peer, e);
        }
    }
}
