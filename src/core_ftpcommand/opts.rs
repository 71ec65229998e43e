use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::error::FtpError;
use crate::core_ftpcommand::ftpcommand::FtpCommand;
use async_trait::async_trait;

/// Handles the OPTS FTP command. Only `UTF8 ON` is understood; the control
/// connection is always UTF-8.
pub struct OptsCommand;

#[async_trait]
impl FtpCommand for OptsCommand {
    async fn run(&self, context: &mut CommandContext<'_>) -> Result<(), FtpError> {
        let argument = context.required_argument()?;
        let mut parts = argument.split_whitespace();
        let option = parts.next().unwrap_or_default().to_ascii_uppercase();
        let value = parts.next().map(str::to_ascii_uppercase);

        match (option.as_str(), value.as_deref()) {
            ("UTF8", Some("ON")) | ("UTF8", None) => {
                context.channel.send("200 Always in UTF8 mode.").await
            }
            _ => Err(FtpError::ParameterNotImplemented(argument)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_ftpcommand::test_support::harness;

    #[tokio::test]
    async fn test_opts() {
        let root = tempfile::tempdir().unwrap();
        let mut h = harness(root.path(), false);

        assert!(h.run(&OptsCommand, "OPTS utf8 on").await.0.is_ok());
        assert!(matches!(h.run(&OptsCommand, "OPTS").await.0, Err(FtpError::Syntax)));
        assert!(matches!(
            h.run(&OptsCommand, "OPTS MLST type;").await.0,
            Err(FtpError::ParameterNotImplemented(_))
        ));
        assert_eq!(h.output().await, "200 Always in UTF8 mode.\r\n");
    }
}
