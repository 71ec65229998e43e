use crate::channel::TransferType;
use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::error::FtpError;
use crate::core_ftpcommand::ftpcommand::FtpCommand;
use async_trait::async_trait;
use log::info;

/// Handles the TYPE FTP command.
///
/// Accepts `A` (optionally with the `N` format control), `I`, and `L 8`, which
/// is the same as image. EBCDIC and other byte sizes are refused.
pub struct TypeCommand;

#[async_trait]
impl FtpCommand for TypeCommand {
    async fn run(&self, context: &mut CommandContext<'_>) -> Result<(), FtpError> {
        context.channel.check_login()?;
        let argument = context.required_argument()?;

        let parts: Vec<String> = argument
            .split_whitespace()
            .map(str::to_ascii_uppercase)
            .collect();
        let parts: Vec<&str> = parts.iter().map(String::as_str).collect();

        let (transfer_type, reply) = match parts.as_slice() {
            ["A"] | ["A", "N"] => (TransferType::Ascii, "200 Type set to A."),
            ["I"] | ["L", "8"] => (TransferType::Binary, "200 Type set to I."),
            ["A", _] | ["E", ..] | ["L", _] => {
                return Err(FtpError::ParameterNotImplemented(argument))
            }
            _ => return Err(FtpError::Syntax),
        };

        info!("[{}] Transfer type set to {:?}", context.channel.peer(), transfer_type);
        context.channel.set_transfer_type(transfer_type);
        context.channel.send(reply).await
    }
}
