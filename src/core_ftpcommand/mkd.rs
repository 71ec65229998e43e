use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::error::FtpError;
use crate::core_ftpcommand::ftpcommand::FtpCommand;
use crate::helpers::quote_path;
use async_trait::async_trait;
use log::{error, info};
use std::io::ErrorKind;
use tokio::fs;

/// Handles the MKD (Make Directory) FTP command. Creates exactly one
/// directory; the parent must already exist.
pub struct MkdCommand;

#[async_trait]
impl FtpCommand for MkdCommand {
    async fn run(&self, context: &mut CommandContext<'_>) -> Result<(), FtpError> {
        context.channel.check_login()?;
        let path = context.required_argument()?;

        let virtual_path = context.channel.resolve_virtual_path(&path)?;
        let local_path = context.channel.map_resolved_path(&virtual_path)?;
        context.statement.set_result(local_path.to_string_lossy());

        match fs::create_dir(&local_path).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(FtpError::AlreadyExists(virtual_path))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(FtpError::NotFound(virtual_path)),
            Err(e) => {
                error!("Failed to create directory: {:?}, error: {}", local_path, e);
                return Err(FtpError::Internal("create directory".to_string()));
            }
        }

        info!("[{}] Directory created: {:?}", context.channel.peer(), local_path);
        let response = format!("257 {} directory created.", quote_path(&virtual_path));
        context.channel.send(&response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_ftpcommand::test_support::harness;

    #[tokio::test]
    async fn test_mkd() {
        let root = tempfile::tempdir().unwrap();
        let mut h = harness(root.path(), true);

        assert!(h.run(&MkdCommand, "MKD photos").await.0.is_ok());
        assert!(root.path().join("photos").is_dir());
        assert!(matches!(h.run(&MkdCommand, "MKD photos").await.0, Err(FtpError::AlreadyExists(_))));
        assert!(matches!(h.run(&MkdCommand, "MKD a/b/c").await.0, Err(FtpError::NotFound(_))));
        assert_eq!(h.output().await, "257 \"/photos\" directory created.\r\n");
    }
}
