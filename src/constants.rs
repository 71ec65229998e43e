// src/constants.rs

pub const USERNAME_REGEX: &str = r"^[a-zA-Z0-9._-]{1,32}$";
pub const MAX_COMMAND_LENGTH: usize = 512;
pub const MAX_PATH_LENGTH: usize = 4096;
pub const DEFAULT_CONFIG_PATH: &str = "/etc/ftpengine.conf";
