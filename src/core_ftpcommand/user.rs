use crate::constants::USERNAME_REGEX;
use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::error::FtpError;
use crate::core_ftpcommand::ftpcommand::FtpCommand;
use async_trait::async_trait;
use log::info;
use regex::Regex;
use std::sync::LazyLock;

static USERNAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(USERNAME_REGEX).expect("USERNAME_REGEX is a valid pattern"));

/// Handles the USER FTP command.
///
/// Starts a new login sequence: the username is remembered on the channel and
/// any earlier login is dropped until PASS succeeds again.
pub struct UserCommand;

#[async_trait]
impl FtpCommand for UserCommand {
    async fn run(&self, context: &mut CommandContext<'_>) -> Result<(), FtpError> {
        let username = context.required_argument()?;
        if !USERNAME.is_match(&username) {
            return Err(FtpError::Syntax);
        }

        info!("[{}] Received USER command with username: {}", context.channel.peer(), username);
        context.channel.begin_login(&username);
        context.statement.set_result(username);

        context.channel.send("331 User name okay, need password.").await
    }
}
