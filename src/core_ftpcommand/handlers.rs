use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::error::FtpError;
use crate::core_ftpcommand::ftpcommand::FtpCommand;
use crate::core_ftpcommand::{
    allo, cdup, cwd, dele, feat, help, mdtm, mfmt, mkd, noop, opts, pass, pwd, quit, rmd, rnfr,
    rnto, size, syst, type_, user,
};
use async_trait::async_trait;
use log::{debug, info};
use std::collections::HashMap;
use std::sync::Arc;

/// Replies `502` for every verb nobody registered.
pub struct UnsupportedCommand;

#[async_trait]
impl FtpCommand for UnsupportedCommand {
    async fn run(&self, context: &mut CommandContext<'_>) -> Result<(), FtpError> {
        debug!(
            "[{}] Unsupported command: {}",
            context.channel.peer(),
            context.statement.verb()
        );
        context.channel.send("502 Command not implemented.").await
    }
}

/// Verb to handler lookup. Built once at startup, read-only afterwards.
pub struct CommandRegistry {
    handlers: HashMap<String, Arc<dyn FtpCommand>>,
    unsupported: Arc<dyn FtpCommand>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
            unsupported: Arc::new(UnsupportedCommand),
        }
    }

    /// Inserts or replaces the handler for `verb` (case-insensitive).
    pub fn register(&mut self, verb: &str, command: Arc<dyn FtpCommand>) {
        self.handlers.insert(verb.to_ascii_uppercase(), command);
    }

    pub fn get(&self, verb: &str) -> Option<Arc<dyn FtpCommand>> {
        self.handlers.get(&verb.to_ascii_uppercase()).cloned()
    }

    /// Handler for `verb`, or the unsupported-command handler.
    pub fn resolve(&self, verb: &str) -> Arc<dyn FtpCommand> {
        self.get(verb).unwrap_or_else(|| Arc::clone(&self.unsupported))
    }

    pub fn contains(&self, verb: &str) -> bool {
        self.handlers.contains_key(&verb.to_ascii_uppercase())
    }

    /// Registered verbs in alphabetical order.
    pub fn verbs(&self) -> Vec<String> {
        let mut verbs: Vec<String> = self.handlers.keys().cloned().collect();
        verbs.sort();
        verbs
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

pub fn initialize_command_handlers() -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    registry.register("USER", Arc::new(user::UserCommand));
    registry.register("PASS", Arc::new(pass::PassCommand));
    registry.register("QUIT", Arc::new(quit::QuitCommand));
    registry.register("NOOP", Arc::new(noop::NoopCommand));
    registry.register("SYST", Arc::new(syst::SystCommand));
    registry.register("FEAT", Arc::new(feat::FeatCommand));
    registry.register("OPTS", Arc::new(opts::OptsCommand));
    registry.register("ALLO", Arc::new(allo::AlloCommand));
    registry.register("TYPE", Arc::new(type_::TypeCommand));

    let pwd: Arc<dyn FtpCommand> = Arc::new(pwd::PwdCommand);
    registry.register("PWD", Arc::clone(&pwd));
    registry.register("XPWD", pwd);

    let cwd: Arc<dyn FtpCommand> = Arc::new(cwd::CwdCommand);
    registry.register("CWD", Arc::clone(&cwd));
    registry.register("XCWD", cwd);

    let cdup: Arc<dyn FtpCommand> = Arc::new(cdup::CdupCommand);
    registry.register("CDUP", Arc::clone(&cdup));
    registry.register("XCUP", cdup);

    let mkd: Arc<dyn FtpCommand> = Arc::new(mkd::MkdCommand);
    registry.register("MKD", Arc::clone(&mkd));
    registry.register("XMKD", mkd);

    let rmd: Arc<dyn FtpCommand> = Arc::new(rmd::RmdCommand);
    registry.register("RMD", Arc::clone(&rmd));
    registry.register("XRMD", rmd);

    registry.register("DELE", Arc::new(dele::DeleCommand));
    registry.register("RNFR", Arc::new(rnfr::RnfrCommand));
    registry.register("RNTO", Arc::new(rnto::RntoCommand));
    registry.register("SIZE", Arc::new(size::SizeCommand));
    registry.register("MDTM", Arc::new(mdtm::MdtmCommand));
    registry.register("MFMT", Arc::new(mfmt::MfmtCommand));

    // HELP lists everything above, itself included.
    let mut verbs = registry.verbs();
    verbs.push("HELP".to_string());
    verbs.sort();
    registry.register("HELP", Arc::new(help::HelpCommand::new(verbs)));

    info!("Registered {} command handlers", registry.len());
    registry
}
