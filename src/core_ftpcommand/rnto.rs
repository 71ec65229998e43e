use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::error::FtpError;
use crate::core_ftpcommand::ftpcommand::FtpCommand;
use async_trait::async_trait;
use log::{error, info};
use std::io::ErrorKind;
use tokio::fs;

/// Handles the RNTO (Rename To) FTP command.
pub struct RntoCommand;

#[async_trait]
impl FtpCommand for RntoCommand {
    /// Renames the source remembered by RNFR.
    ///
    /// # Arguments
    ///
    /// * `context` - The invocation context; its argument is the new name. The
    ///   source comes from the preceding RNFR and is consumed either way.
    ///
    /// # Returns
    ///
    /// Result<(), FtpError> indicating the success or failure of the operation.
    async fn run(&self, context: &mut CommandContext<'_>) -> Result<(), FtpError> {
        context.channel.check_login()?;
        let Some(old_path) = context.channel.take_rename_from() else {
            return Err(FtpError::BadSequence);
        };
        let path = context.required_argument()?;

        let virtual_path = context.channel.resolve_virtual_path(&path)?;
        let new_path = context.channel.map_resolved_path(&virtual_path)?;
        context.statement.set_result(new_path.to_string_lossy());

        match fs::rename(&old_path, &new_path).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(FtpError::NotFound(virtual_path)),
            Err(e) => {
                error!("Failed to rename {:?} to {:?}: {}", old_path, new_path, e);
                return Err(FtpError::Internal("rename".to_string()));
            }
        }

        info!("[{}] Renamed {:?} to {:?}", context.channel.peer(), old_path, new_path);
        context.channel.send("250 Rename successful.").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_ftpcommand::rnfr::RnfrCommand;
    use crate::core_ftpcommand::test_support::harness;

    #[tokio::test]
    async fn test_rename_sequence() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("old.txt"), b"data").unwrap();

        let mut h = harness(root.path(), true);
        assert!(h.run(&RnfrCommand, "RNFR old.txt").await.0.is_ok());
        assert!(h.run(&RntoCommand, "RNTO new.txt").await.0.is_ok());
        assert!(root.path().join("new.txt").exists());
        assert!(!root.path().join("old.txt").exists());
        assert_eq!(h.output().await, "350 Ready for RNTO.\r\n250 Rename successful.\r\n");
    }

    #[tokio::test]
    async fn test_rnto_without_rnfr() {
        let root = tempfile::tempdir().unwrap();
        let mut h = harness(root.path(), true);
        assert!(matches!(h.run(&RntoCommand, "RNTO new.txt").await.0, Err(FtpError::BadSequence)));
    }

    #[tokio::test]
    async fn test_rnfr_missing_source() {
        let root = tempfile::tempdir().unwrap();
        let mut h = harness(root.path(), true);
        assert!(matches!(h.run(&RnfrCommand, "RNFR ghost").await.0, Err(FtpError::NotFound(_))));
        assert!(matches!(h.run(&RntoCommand, "RNTO new").await.0, Err(FtpError::BadSequence)));
    }
}
