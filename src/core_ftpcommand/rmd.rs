use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::error::FtpError;
use crate::core_ftpcommand::ftpcommand::FtpCommand;
use async_trait::async_trait;
use log::{error, info};
use tokio::fs;

/// Handles the RMD (Remove Directory) FTP command.
///
/// Only empty directories are removed, and never the virtual root itself.
pub struct RmdCommand;

#[async_trait]
impl FtpCommand for RmdCommand {
    async fn run(&self, context: &mut CommandContext<'_>) -> Result<(), FtpError> {
        context.channel.check_login()?;
        let path = context.required_argument()?;

        let virtual_path = context.channel.resolve_virtual_path(&path)?;
        if virtual_path == "/" {
            return Err(FtpError::NotFound(virtual_path));
        }

        let local_path = context.channel.map_resolved_path(&virtual_path)?;
        context.statement.set_result(local_path.to_string_lossy());

        match fs::symlink_metadata(&local_path).await {
            Ok(metadata) if metadata.is_dir() => {}
            _ => return Err(FtpError::NotFound(virtual_path)),
        }

        if let Err(e) = fs::remove_dir(&local_path).await {
            error!("Failed to remove directory: {:?}, error: {}", local_path, e);
            return Err(FtpError::Internal("remove directory".to_string()));
        }

        info!("[{}] Directory removed: {:?}", context.channel.peer(), local_path);
        context.channel.send("250 Directory removed.").await
    }
}
