use crate::core_auth::core_auth::PasswdEntry;
use crate::core_auth::Authenticator;
use anyhow::{Context, Result};
use bcrypt::{hash, verify};
use log::{info, warn};
use std::collections::HashMap;
use std::fs;

const ANONYMOUS_USERS: [&str; 2] = ["anonymous", "ftp"];

pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String> {
    hash(password, cost).context("Failed to hash password")
}

pub fn verify_password(password: &str, hashed_password: &str) -> bool {
    verify(password, hashed_password).unwrap_or(false)
}

pub fn load_passwd_file(path: &str) -> Result<HashMap<String, PasswdEntry>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read passwd file: {}", path))?;

    let mut passwd_map = HashMap::new();
    for (number, line) in content.lines().enumerate() {
        match PasswdEntry::from_line(line) {
            Some(entry) => {
                passwd_map.insert(entry.get_username().to_string(), entry);
            }
            None if !line.trim().is_empty() && !line.trim_start().starts_with('#') => {
                warn!("Ignoring malformed passwd line {} in {}", number + 1, path);
            }
            None => {}
        }
    }

    info!("Loaded {} account(s) from {}", passwd_map.len(), path);
    Ok(passwd_map)
}

/// Credential check against bcrypt hashes from a passwd file.
#[derive(Debug, Default)]
pub struct PasswdAuthenticator {
    entries: HashMap<String, PasswdEntry>,
    allow_anonymous: bool,
}

impl PasswdAuthenticator {
    pub fn new(entries: HashMap<String, PasswdEntry>, allow_anonymous: bool) -> Self {
        Self {
            entries,
            allow_anonymous,
        }
    }

    pub fn from_entries(entries: Vec<PasswdEntry>, allow_anonymous: bool) -> Self {
        let entries = entries
            .into_iter()
            .map(|entry| (entry.get_username().to_string(), entry))
            .collect();
        Self::new(entries, allow_anonymous)
    }

    pub fn from_file(path: &str, allow_anonymous: bool) -> Result<Self> {
        Ok(Self::new(load_passwd_file(path)?, allow_anonymous))
    }
}

impl Authenticator for PasswdAuthenticator {
    fn authenticate(&self, username: &str, password: &str) -> bool {
        if ANONYMOUS_USERS.contains(&username.to_ascii_lowercase().as_str()) {
            return self.allow_anonymous;
        }

        match self.entries.get(username) {
            Some(entry) => verify_password(password, entry.get_hashed_password()),
            None => false,
        }
    }
}
