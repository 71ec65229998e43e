use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::error::FtpError;
use crate::core_ftpcommand::ftpcommand::FtpCommand;
use async_trait::async_trait;
use log::{info, warn};

/// Handles the PASS FTP command.
///
/// Completes the login sequence started by USER. A rejected password leaves
/// the channel unauthenticated.
pub struct PassCommand;

#[async_trait]
impl FtpCommand for PassCommand {
    async fn run(&self, context: &mut CommandContext<'_>) -> Result<(), FtpError> {
        let Some(username) = context.channel.username().map(str::to_string) else {
            return Err(FtpError::BadSequence);
        };

        if context.channel.is_authenticated() {
            return context.channel.send("230 Already logged in.").await;
        }

        let password = context.statement.argument();
        if !context.channel.authenticator().authenticate(&username, password) {
            warn!("[{}] Login failed for user {}", context.channel.peer(), username);
            return Err(FtpError::LoginFailed(username));
        }

        info!("[{}] User {} logged in", context.channel.peer(), username);
        context.channel.complete_login();
        context.statement.set_result(username);

        context.channel.send("230 User logged in, proceed.").await
    }
}
