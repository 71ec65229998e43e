use crate::channel::Channel;
use crate::core_ftpcommand::error::FtpError;
use crate::core_ftpcommand::statement::Statement;

/// Binds a statement to the channel it arrived on, for one invocation.
pub struct CommandContext<'a> {
    pub channel: &'a mut Channel,
    pub statement: Statement,
}

impl<'a> CommandContext<'a> {
    pub fn new(channel: &'a mut Channel, statement: Statement) -> Self {
        Self { channel, statement }
    }

    /// The argument, or a syntax failure when the client sent none.
    pub fn required_argument(&self) -> Result<String, FtpError> {
        if self.statement.has_argument() {
            Ok(self.statement.argument().to_string())
        } else {
            Err(FtpError::Syntax)
        }
    }

    pub fn into_statement(self) -> Statement {
        self.statement
    }
}
