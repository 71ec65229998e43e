use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::error::FtpError;
use crate::core_ftpcommand::ftpcommand::FtpCommand;
use crate::core_ftpcommand::utils::regular_file;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::error;

pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Handles the MDTM FTP command: the last modification time of a regular
/// file, in UTC.
pub struct MdtmCommand;

#[async_trait]
impl FtpCommand for MdtmCommand {
    async fn run(&self, context: &mut CommandContext<'_>) -> Result<(), FtpError> {
        context.channel.check_login()?;
        let path = context.required_argument()?;

        let (local_path, metadata) = regular_file(context, &path).await?;
        let modified = metadata.modified().map_err(|e| {
            error!("Failed to read modification time of {:?}: {}", local_path, e);
            FtpError::Internal("read modification time".to_string())
        })?;

        let modified: DateTime<Utc> = modified.into();
        let response = format!("213 {}", modified.format(TIMESTAMP_FORMAT));
        context.channel.send(&response).await
    }
}
