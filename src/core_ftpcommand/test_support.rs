// Shared fixtures for the per-verb unit tests

use crate::channel::Channel;
use crate::core_auth::{PasswdAuthenticator, PasswdEntry};
use crate::core_auth::helper::hash_password_with_cost;
use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::error::FtpError;
use crate::core_ftpcommand::ftpcommand::FtpCommand;
use crate::core_ftpcommand::statement::Statement;
use std::path::Path;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, DuplexStream};

pub struct Harness {
    pub channel: Channel,
    pub client: DuplexStream,
}

pub fn harness(root: &Path, logged_in: bool) -> Harness {
    let hashed = hash_password_with_cost("s3cret", 4).unwrap();
    let authenticator =
        PasswdAuthenticator::from_entries(vec![PasswdEntry::new("alice", &hashed)], false);

    let (server, client) = tokio::io::duplex(64 * 1024);
    let mut channel = Channel::new("test", Box::new(server), root.to_path_buf(), Arc::new(authenticator));
    if logged_in {
        channel.begin_login("alice");
        channel.complete_login();
    }
    Harness { channel, client }
}

impl Harness {
    pub async fn run(&mut self, command: &dyn FtpCommand, line: &str) -> (Result<(), FtpError>, Statement) {
        let mut context = CommandContext::new(&mut self.channel, Statement::parse(line));
        let result = command.run(&mut context).await;
        (result, context.into_statement())
    }

    /// Everything the channel sent, once the channel is gone.
    pub async fn output(self) -> String {
        let Harness { channel, mut client } = self;
        drop(channel);
        let mut received = String::new();
        client.read_to_string(&mut received).await.unwrap();
        received
    }
}
