use crate::constants::MAX_PATH_LENGTH;
use crate::core_ftpcommand::error::FtpError;
use std::path::{Component, Path, PathBuf};

/// Resolves a client path against the working directory into an absolute
/// virtual path.
///
/// `.` and empty segments are dropped, `..` pops one segment and clamps at `/`.
/// Both `/` and `\` separate segments. The result always starts with `/` and
/// never contains `.` or `..` segments.
pub fn resolve_virtual_path(working_directory: &str, path: &str) -> Result<String, FtpError> {
    if path.contains('\0') || path.len() > MAX_PATH_LENGTH {
        return Err(FtpError::Syntax);
    }

    let mut segments: Vec<&str> = Vec::new();
    let absolute = path.starts_with('/') || path.starts_with('\\');

    if !absolute {
        push_segments(&mut segments, working_directory);
    }
    push_segments(&mut segments, path);

    Ok(format!("/{}", segments.join("/")))
}

fn push_segments<'a>(segments: &mut Vec<&'a str>, path: &'a str) {
    for segment in path.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }
}

/// Joins a normalized virtual path onto the real root.
///
/// Each segment must be a single plain path component; anything the host
/// would interpret as a prefix or root (e.g. `C:` on Windows) is rejected.
pub fn join_under_root(root: &Path, virtual_path: &str) -> Result<PathBuf, FtpError> {
    let mut local = root.to_path_buf();

    for segment in virtual_path.split('/').filter(|s| !s.is_empty()) {
        let mut components = Path::new(segment).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => local.push(segment),
            _ => return Err(FtpError::Syntax),
        }
    }

    Ok(local)
}

/// Parent of a normalized virtual path, `/` for the root itself.
pub fn parent_virtual_path(virtual_path: &str) -> String {
    match virtual_path.trim_end_matches('/').rsplit_once('/') {
        Some(("", _)) | None => "/".to_string(),
        Some((parent, _)) => parent.to_string(),
    }
}
