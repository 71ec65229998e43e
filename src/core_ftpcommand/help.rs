use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::error::FtpError;
use crate::core_ftpcommand::ftpcommand::FtpCommand;
use crate::helpers::format_multiline;
use async_trait::async_trait;

const VERBS_PER_LINE: usize = 8;

/// Handles the HELP FTP command by listing the registered verbs.
pub struct HelpCommand {
    reply: String,
}

impl HelpCommand {
    pub fn new(verbs: Vec<String>) -> Self {
        let lines: Vec<String> = verbs
            .chunks(VERBS_PER_LINE)
            .map(|chunk| chunk.join(" "))
            .collect();
        let lines: Vec<&str> = lines.iter().map(String::as_str).collect();

        Self {
            reply: format_multiline(214, "The following commands are recognized:", &lines, "Help OK."),
        }
    }
}

#[async_trait]
impl FtpCommand for HelpCommand {
    async fn run(&self, context: &mut CommandContext<'_>) -> Result<(), FtpError> {
        context.channel.send(&self.reply).await
    }
}
