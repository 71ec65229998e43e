use crate::channel::Channel;
use crate::constants::MAX_COMMAND_LENGTH;
use crate::core_ftpcommand::{CommandContext, CommandRegistry, FtpError, Statement};
use anyhow::Result;
use log::{debug, error, info, warn};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncReadExt};

enum CommandLine {
    Eof,
    TooLong,
    Text(String),
}

/// Reads one request line, at most `MAX_COMMAND_LENGTH` bytes of it.
///
/// Over-long lines are drained up to their terminator so the remainder is
/// never parsed as a new command. Bytes that are not UTF-8 are replaced.
async fn read_command_line<R>(reader: &mut R, buffer: &mut Vec<u8>) -> std::io::Result<CommandLine>
where
    R: AsyncBufRead + Unpin,
{
    buffer.clear();
    let limit = MAX_COMMAND_LENGTH as u64 + 1;
    let n = (&mut *reader).take(limit).read_until(b'\n', buffer).await?;
    if n == 0 {
        return Ok(CommandLine::Eof);
    }

    if buffer.len() > MAX_COMMAND_LENGTH {
        if buffer.last() != Some(&b'\n') {
            let mut scratch = Vec::new();
            loop {
                scratch.clear();
                let n = (&mut *reader).take(limit).read_until(b'\n', &mut scratch).await?;
                if n == 0 || scratch.last() == Some(&b'\n') {
                    break;
                }
            }
        }
        return Ok(CommandLine::TooLong);
    }

    Ok(CommandLine::Text(String::from_utf8_lossy(buffer).into_owned()))
}

/// The control-connection loop: read, parse, resolve, run, translate failures.
///
/// Commands run strictly one after another; the next line is not read until
/// the current handler has returned.
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<CommandRegistry>,
}

impl Dispatcher {
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }

    /// Serves `channel` until the client quits or disconnects.
    ///
    /// Only transport failures end the loop with an error; a failing command
    /// gets its reply and the session carries on.
    pub async fn run<R>(&self, reader: &mut R, channel: &mut Channel) -> Result<()>
    where
        R: AsyncBufRead + Unpin + Send,
    {
        let mut buffer = Vec::with_capacity(MAX_COMMAND_LENGTH + 1);

        loop {
            let line = match read_command_line(reader, &mut buffer).await? {
                CommandLine::Eof => {
                    info!("[{}] Client disconnected", channel.peer());
                    break;
                }
                CommandLine::TooLong => {
                    warn!("[{}] Command line longer than {} bytes", channel.peer(), MAX_COMMAND_LENGTH);
                    channel.send("500 Command line too long.").await?;
                    continue;
                }
                CommandLine::Text(line) => line,
            };

            let statement = Statement::parse(&line);
            if statement.verb().is_empty() {
                channel.send("500 Syntax error, command unrecognized.").await?;
                continue;
            }

            self.dispatch(statement, channel).await?;

            if channel.is_closed() {
                break;
            }
        }

        channel.close();
        channel.shutdown().await;
        Ok(())
    }

    /// Runs one statement and sends the reply for any failure it raised.
    ///
    /// The returned error is a transport failure on the control connection.
    pub async fn dispatch(&self, statement: Statement, channel: &mut Channel) -> Result<(), FtpError> {
        log_statement(channel.peer(), &statement);

        let command = self.registry.resolve(statement.verb());
        let mut context = CommandContext::new(channel, statement);
        let outcome = command.run(&mut context).await;
        let statement = context.into_statement();

        match outcome {
            Ok(()) => {
                if let Some(result) = &statement.result {
                    debug!("[{}] {} -> {}", channel.peer(), statement.verb(), result);
                }
                Ok(())
            }
            Err(e) => {
                if e.is_client_error() {
                    warn!("[{}] {} failed: {}", channel.peer(), statement.verb(), e);
                } else {
                    error!("[{}] {} failed: {}", channel.peer(), statement.verb(), e);
                }
                channel.send(e.to_ftp_response()).await
            }
        }
    }
}

fn log_statement(peer: &str, statement: &Statement) {
    if statement.verb() == "PASS" {
        debug!("[{}] Received command: PASS ****", peer);
    } else if statement.has_argument() {
        debug!("[{}] Received command: {} {}", peer, statement.verb(), statement.argument());
    } else {
        debug!("[{}] Received command: {}", peer, statement.verb());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::BufReader;

    async fn lines(input: &[u8]) -> Vec<String> {
        let mut reader = BufReader::new(input);
        let mut buffer = Vec::new();
        let mut out = Vec::new();
        loop {
            match read_command_line(&mut reader, &mut buffer).await.unwrap() {
                CommandLine::Eof => break,
                CommandLine::TooLong => out.push("<too long>".to_string()),
                CommandLine::Text(line) => out.push(line),
            }
        }
        out
    }

    #[tokio::test]
    async fn test_reads_crlf_lines() {
        assert_eq!(lines(b"USER a\r\nPASS b\r\n").await, vec!["USER a\r\n", "PASS b\r\n"]);
    }

    #[tokio::test]
    async fn test_last_line_without_terminator() {
        assert_eq!(lines(b"NOOP\r\nQUIT").await, vec!["NOOP\r\n", "QUIT"]);
    }

    #[tokio::test]
    async fn test_overlong_line_is_drained() {
        let mut input = b"DELE ".to_vec();
        input.extend(std::iter::repeat(b'a').take(3 * MAX_COMMAND_LENGTH));
        input.extend_from_slice(b"\r\nNOOP\r\n");
        assert_eq!(lines(&input).await, vec!["<too long>", "NOOP\r\n"]);
    }

    #[tokio::test]
    async fn test_invalid_utf8_is_replaced() {
        let read = lines(b"CWD \xff\xfe\r\n").await;
        assert_eq!(read.len(), 1);
        assert!(read[0].starts_with("CWD "));
    }
}
