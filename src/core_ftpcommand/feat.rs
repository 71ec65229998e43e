use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::error::FtpError;
use crate::core_ftpcommand::ftpcommand::FtpCommand;
use crate::helpers::format_multiline;
use async_trait::async_trait;
use log::info;
use std::sync::LazyLock;

const FEATURES: [&str; 11] = [
    "MDTM",
    "SIZE",
    "PASV",
    "UTF8",
    "HELP",
    "MFMT",
    "MLST size*;type*;perm*;create*;modify*;",
    "MLSD",
    "REST",
    "OPTS",
    "NOOP",
];

static FEAT_REPLY: LazyLock<String> =
    LazyLock::new(|| format_multiline(211, "Features:", &FEATURES, "End"));

/// Handles the FEAT (Feature) FTP command.
///
/// Needs no login and ignores its argument. The reply body is fixed, so every
/// invocation sends byte-identical output and the channel is left untouched.
pub struct FeatCommand;

#[async_trait]
impl FtpCommand for FeatCommand {
    async fn run(&self, context: &mut CommandContext<'_>) -> Result<(), FtpError> {
        info!("[{}] Responding to FEAT command with supported features.", context.channel.peer());
        context.channel.send(&FEAT_REPLY).await
    }
}
