use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::error::FtpError;
use crate::core_ftpcommand::ftpcommand::FtpCommand;
use async_trait::async_trait;
use log::info;

/// Handles the QUIT FTP command.
///
/// Sends the farewell and marks the channel closed so the dispatcher stops
/// reading from the connection.
pub struct QuitCommand;

#[async_trait]
impl FtpCommand for QuitCommand {
    async fn run(&self, context: &mut CommandContext<'_>) -> Result<(), FtpError> {
        info!("[{}] Received QUIT command. Closing connection.", context.channel.peer());
        let sent = context.channel.send("221 Goodbye.").await;
        context.channel.close();
        sent
    }
}
