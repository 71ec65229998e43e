use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::cwd::change_directory;
use crate::core_ftpcommand::error::FtpError;
use crate::core_ftpcommand::ftpcommand::FtpCommand;
use crate::core_path::parent_virtual_path;
use async_trait::async_trait;

/// Handles the CDUP FTP command; the parent of `/` is `/`.
pub struct CdupCommand;

#[async_trait]
impl FtpCommand for CdupCommand {
    async fn run(&self, context: &mut CommandContext<'_>) -> Result<(), FtpError> {
        context.channel.check_login()?;

        let parent = parent_virtual_path(context.channel.working_directory());
        change_directory(context, parent).await
    }
}
