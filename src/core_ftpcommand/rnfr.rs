use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::error::FtpError;
use crate::core_ftpcommand::ftpcommand::FtpCommand;
use async_trait::async_trait;
use tokio::fs;

/// Handles the RNFR (Rename From) FTP command.
///
/// Remembers the mapped source on the channel for the following RNTO.
pub struct RnfrCommand;

#[async_trait]
impl FtpCommand for RnfrCommand {
    async fn run(&self, context: &mut CommandContext<'_>) -> Result<(), FtpError> {
        context.channel.check_login()?;
        let path = context.required_argument()?;

        let virtual_path = context.channel.resolve_virtual_path(&path)?;
        if virtual_path == "/" {
            return Err(FtpError::NotFound(virtual_path));
        }

        let local_path = context.channel.map_resolved_path(&virtual_path)?;
        context.statement.set_result(local_path.to_string_lossy());

        if fs::symlink_metadata(&local_path).await.is_err() {
            return Err(FtpError::NotFound(virtual_path));
        }

        context.channel.set_rename_from(local_path);
        context.channel.send("350 Ready for RNTO.").await
    }
}
