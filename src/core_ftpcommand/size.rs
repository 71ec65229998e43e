use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::error::FtpError;
use crate::core_ftpcommand::ftpcommand::FtpCommand;
use crate::core_ftpcommand::utils::regular_file;
use async_trait::async_trait;
use log::info;

/// Handles the SIZE (File Size) FTP command.
///
/// Replies with the size in bytes of a regular file.
pub struct SizeCommand;

#[async_trait]
impl FtpCommand for SizeCommand {
    async fn run(&self, context: &mut CommandContext<'_>) -> Result<(), FtpError> {
        context.channel.check_login()?;
        let path = context.required_argument()?;

        let (local_path, metadata) = regular_file(context, &path).await?;
        info!("File size for {:?} is {}", local_path, metadata.len());

        context.channel.send(&format!("213 {}", metadata.len())).await
    }
}
