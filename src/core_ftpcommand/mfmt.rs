use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::error::FtpError;
use crate::core_ftpcommand::ftpcommand::FtpCommand;
use crate::core_ftpcommand::mdtm::TIMESTAMP_FORMAT;
use crate::core_ftpcommand::utils::regular_file;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use filetime::{set_file_mtime, FileTime};
use log::{error, info};

/// Handles the MFMT FTP command.
///
/// `MFMT YYYYMMDDHHMMSS <path>` sets the modification time (UTC) of a regular
/// file and echoes the new value.
pub struct MfmtCommand;

#[async_trait]
impl FtpCommand for MfmtCommand {
    async fn run(&self, context: &mut CommandContext<'_>) -> Result<(), FtpError> {
        context.channel.check_login()?;
        let argument = context.required_argument()?;

        let (timestamp, path) = argument.split_once(' ').ok_or(FtpError::Syntax)?;
        let path = path.trim_start();
        if path.is_empty() {
            return Err(FtpError::Syntax);
        }
        let datetime =
            NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).map_err(|_| FtpError::Syntax)?;

        let (local_path, _) = regular_file(context, path).await?;

        let filetime = FileTime::from_unix_time(datetime.and_utc().timestamp(), 0);
        if let Err(e) = set_file_mtime(&local_path, filetime) {
            error!(
                "Failed to set modification time for file: {:?}, error: {}",
                local_path, e
            );
            return Err(FtpError::Internal("set modification time".to_string()));
        }

        info!("[{}] Modification time of {:?} set to {}", context.channel.peer(), local_path, timestamp);
        let response = format!("213 Modify={}; {}", timestamp, path);
        context.channel.send(&response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_ftpcommand::mdtm::MdtmCommand;
    use crate::core_ftpcommand::test_support::harness;

    #[tokio::test]
    async fn test_mfmt_then_mdtm() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("a.txt"), b"a").unwrap();

        let mut h = harness(root.path(), true);
        assert!(h.run(&MfmtCommand, "MFMT 20200102030405 a.txt").await.0.is_ok());
        assert!(h.run(&MdtmCommand, "MDTM a.txt").await.0.is_ok());
        assert_eq!(
            h.output().await,
            "213 Modify=20200102030405; a.txt\r\n213 20200102030405\r\n"
        );
    }

    #[tokio::test]
    async fn test_mfmt_rejects_bad_input() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("a.txt"), b"a").unwrap();

        let mut h = harness(root.path(), true);
        assert!(matches!(h.run(&MfmtCommand, "MFMT a.txt").await.0, Err(FtpError::Syntax)));
        assert!(matches!(h.run(&MfmtCommand, "MFMT 2020 a.txt").await.0, Err(FtpError::Syntax)));
        assert!(matches!(
            h.run(&MfmtCommand, "MFMT 20200102030405 b.txt").await.0,
            Err(FtpError::NotFound(_))
        ));
    }
}
