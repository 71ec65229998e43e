use anyhow::Result;
use clap::Parser;
use ftpengine::config::Config;
use ftpengine::core_cli::Cli;
use ftpengine::core_log::init_logger;
use ftpengine::server;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = Cli::parse();

    init_logger(args.verbose);

    let mut config = Config::load_from_file(&args.config)?;

    // Override the listen port from CLI if provided
    if let Some(listen_port) = args.listen_port {
        config.server.listen_port = listen_port;
    }

    // Run the FTP server
    server::run(config).await
}
