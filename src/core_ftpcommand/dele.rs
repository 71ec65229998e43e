use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::error::FtpError;
use crate::core_ftpcommand::ftpcommand::FtpCommand;
use async_trait::async_trait;
use log::{error, info};
use std::io::ErrorKind;
use tokio::fs;

/// Handles the DELE (Delete File) FTP command.
pub struct DeleCommand;

#[async_trait]
impl FtpCommand for DeleCommand {
    /// Deletes a file on the server. The argument is mapped through the
    /// channel's virtual root, so it can never name anything outside of it.
    /// A directory is reported exactly like a missing file, and OS-level
    /// failure detail is only logged.
    ///
    /// # Arguments
    ///
    /// * `context` - The invocation context; its argument is the file to delete.
    ///
    /// # Returns
    ///
    /// Result<(), FtpError> indicating the success or failure of the operation.
    async fn run(&self, context: &mut CommandContext<'_>) -> Result<(), FtpError> {
        context.channel.check_login()?;
        let path = context.required_argument()?;

        let local_path = context.channel.map_virtual_path_to_local_path(&path)?;
        context.statement.set_result(local_path.to_string_lossy());

        match fs::metadata(&local_path).await {
            Ok(metadata) if metadata.is_dir() => return Err(FtpError::NotFound(path)),
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(FtpError::NotFound(path)),
            Err(e) => {
                error!("Failed to stat {:?}: {}", local_path, e);
                return Err(FtpError::Internal("delete file".to_string()));
            }
        }

        if let Err(e) = fs::remove_file(&local_path).await {
            error!("Failed to delete file {:?}: {}", local_path, e);
            return Err(FtpError::Internal("delete file".to_string()));
        }

        info!("[{}] File deleted: {:?}", context.channel.peer(), local_path);
        context.channel.send("250 Deleted file successfully").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_ftpcommand::test_support::harness;

    #[tokio::test]
    async fn test_dele_removes_file() {
        let root = tempfile::tempdir().unwrap();
        let file = root.path().join("report.txt");
        std::fs::write(&file, b"q3").unwrap();

        let mut h = harness(root.path(), true);
        let (result, statement) = h.run(&DeleCommand, "DELE report.txt").await;
        assert!(result.is_ok());
        assert!(!file.exists());
        assert_eq!(statement.result.as_deref(), Some(file.to_string_lossy().as_ref()));
        assert_eq!(h.output().await, "250 Deleted file successfully\r\n");
    }

    #[tokio::test]
    async fn test_dele_directory_is_not_found() {
        let root = tempfile::tempdir().unwrap();
        std::fs::create_dir(root.path().join("report.txt")).unwrap();

        let mut h = harness(root.path(), true);
        let (result, _) = h.run(&DeleCommand, "DELE report.txt").await;
        assert!(matches!(result, Err(FtpError::NotFound(_))));
        assert!(root.path().join("report.txt").is_dir());
        assert_eq!(h.output().await, "");
    }

    #[tokio::test]
    async fn test_dele_missing_file_is_not_found_every_time() {
        let root = tempfile::tempdir().unwrap();
        let mut h = harness(root.path(), true);

        for _ in 0..3 {
            let (result, _) = h.run(&DeleCommand, "DELE ghost.txt").await;
            assert!(matches!(result, Err(FtpError::NotFound(_))));
        }
    }

    #[tokio::test]
    async fn test_dele_requires_login_and_argument() {
        let root = tempfile::tempdir().unwrap();
        let file = root.path().join("report.txt");
        std::fs::write(&file, b"q3").unwrap();

        let mut h = harness(root.path(), false);
        assert!(matches!(h.run(&DeleCommand, "DELE report.txt").await.0, Err(FtpError::NotLoggedIn)));
        assert!(file.exists());

        h.channel.begin_login("alice");
        h.channel.complete_login();
        assert!(matches!(h.run(&DeleCommand, "DELE").await.0, Err(FtpError::Syntax)));
        assert!(file.exists());
    }

    #[tokio::test]
    async fn test_dele_cannot_escape_root() {
        let outer = tempfile::tempdir().unwrap();
        let root = outer.path().join("root");
        std::fs::create_dir(&root).unwrap();
        let victim = outer.path().join("victim.txt");
        std::fs::write(&victim, b"keep").unwrap();

        let mut h = harness(&root, true);
        let (result, _) = h.run(&DeleCommand, "DELE ../victim.txt").await;
        assert!(matches!(result, Err(FtpError::NotFound(_))));
        assert!(victim.exists());
    }
}
