use crate::constants::DEFAULT_CONFIG_PATH;
use clap::Parser;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "ftpengine", about = "An FTP control-connection server written in Rust.")]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Override the listen port from the configuration file
    #[arg(short = 'p', long)]
    pub listen_port: Option<u16>,

    /// Enable verbose mode
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["ftpengine"]);
        assert_eq!(cli.config, DEFAULT_CONFIG_PATH);
        assert!(cli.listen_port.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from(["ftpengine", "-c", "ftp.toml", "-p", "2222", "-v"]);
        assert_eq!(cli.config, "ftp.toml");
        assert_eq!(cli.listen_port, Some(2222));
        assert!(cli.verbose);
    }
}
