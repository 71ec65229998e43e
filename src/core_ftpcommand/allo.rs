use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::error::FtpError;
use crate::core_ftpcommand::ftpcommand::FtpCommand;
use async_trait::async_trait;
use log::debug;

/// Handles the ALLO (Allocate) FTP command.
///
/// Nothing needs to be reserved ahead of an upload, so the request is only
/// acknowledged.
pub struct AlloCommand;

#[async_trait]
impl FtpCommand for AlloCommand {
    async fn run(&self, context: &mut CommandContext<'_>) -> Result<(), FtpError> {
        debug!(
            "[{}] Received ALLO command with argument: {}",
            context.channel.peer(),
            context.statement.argument()
        );
        context.channel.send("202 No storage allocation necessary.").await
    }
}
