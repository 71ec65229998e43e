use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::error::FtpError;
use crate::core_ftpcommand::ftpcommand::FtpCommand;
use async_trait::async_trait;
use log::info;
use tokio::fs;

/// Moves the channel to `virtual_path` if it names a directory.
pub(crate) async fn change_directory(
    context: &mut CommandContext<'_>,
    virtual_path: String,
) -> Result<(), FtpError> {
    let local_path = context.channel.map_resolved_path(&virtual_path)?;
    context.statement.set_result(local_path.to_string_lossy());

    match fs::metadata(&local_path).await {
        Ok(metadata) if metadata.is_dir() => {}
        _ => return Err(FtpError::NotFound(virtual_path)),
    }

    info!("[{}] Directory changed to: {}", context.channel.peer(), virtual_path);
    context.channel.set_working_directory(virtual_path);
    context.channel.send("250 Directory successfully changed.").await
}

/// Handles the CWD (Change Working Directory) FTP command.
pub struct CwdCommand;

#[async_trait]
impl FtpCommand for CwdCommand {
    async fn run(&self, context: &mut CommandContext<'_>) -> Result<(), FtpError> {
        context.channel.check_login()?;
        let path = context.required_argument()?;

        let virtual_path = context.channel.resolve_virtual_path(&path)?;
        change_directory(context, virtual_path).await
    }
}
