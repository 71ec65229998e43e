use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::error::FtpError;
use crate::core_ftpcommand::ftpcommand::FtpCommand;
use async_trait::async_trait;
use log::info;

/// Handles the SYST (System) FTP command.
///
/// Always reports a UNIX-like system with 8-bit bytes, which is what clients
/// expect for listing formats regardless of the host OS.
pub struct SystCommand;

#[async_trait]
impl FtpCommand for SystCommand {
    async fn run(&self, context: &mut CommandContext<'_>) -> Result<(), FtpError> {
        info!("[{}] Responding to SYST command with system type.", context.channel.peer());
        context.channel.send("215 UNIX Type: L8").await
    }
}
