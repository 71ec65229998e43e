use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::error::FtpError;
use crate::core_ftpcommand::ftpcommand::FtpCommand;
use crate::helpers::quote_path;
use async_trait::async_trait;

/// Handles the PWD FTP command. Reports the virtual working directory, never
/// the real path behind it.
pub struct PwdCommand;

#[async_trait]
impl FtpCommand for PwdCommand {
    async fn run(&self, context: &mut CommandContext<'_>) -> Result<(), FtpError> {
        context.channel.check_login()?;

        let response = format!(
            "257 {} is the current directory.",
            quote_path(context.channel.working_directory())
        );
        context.channel.send(&response).await
    }
}
