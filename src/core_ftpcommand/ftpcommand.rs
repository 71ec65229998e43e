use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::error::FtpError;
use async_trait::async_trait;

/// Behaviour of one verb.
///
/// Implementations are shared by every connection and must keep all
/// per-connection state on the `Channel`. A handler either sends its success
/// reply and returns `Ok`, or returns an error and sends nothing; the
/// dispatcher replies for it.
#[async_trait]
pub trait FtpCommand: Send + Sync {
    async fn run(&self, context: &mut CommandContext<'_>) -> Result<(), FtpError>;
}
