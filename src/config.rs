use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_listen_address")]
    pub listen_address: String,
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,
    pub chroot_dir: String,
    #[serde(default = "default_min_homedir")]
    pub min_homedir: String,
    #[serde(default)]
    pub passwd_file: Option<String>,
    #[serde(default)]
    pub allow_anonymous: bool,
    #[serde(default = "default_greeting")]
    pub greeting: String,
    #[serde(default)]
    pub banner_file: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub server: ServerConfig,
}

fn default_listen_address() -> String {
    String::from("0.0.0.0")
}

fn default_listen_port() -> u16 {
    2121
}

fn default_min_homedir() -> String {
    String::from("/")
}

fn default_greeting() -> String {
    String::from("ftpengine ready.")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_address: default_listen_address(),
            listen_port: default_listen_port(),
            chroot_dir: String::from("/srv/ftp"),
            min_homedir: default_min_homedir(),
            passwd_file: None,
            allow_anonymous: false,
            greeting: default_greeting(),
            banner_file: None,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &str) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file: {}", path))?;
        Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse configuration file: {}", path))
    }

    pub fn from_toml(config_str: &str) -> Result<Self> {
        Ok(toml::from_str(config_str)?)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.listen_address, self.server.listen_port)
    }
}
