use crate::core_ftpcommand::context::CommandContext;
use crate::core_ftpcommand::error::FtpError;
use std::fs::Metadata;
use std::path::PathBuf;
use tokio::fs;

/// Maps `path` and requires it to be an existing regular file.
///
/// Missing targets and targets of another kind both come back as `NotFound`.
pub(crate) async fn regular_file(
    context: &mut CommandContext<'_>,
    path: &str,
) -> Result<(PathBuf, Metadata), FtpError> {
    let local_path = context.channel.map_virtual_path_to_local_path(path)?;
    context.statement.set_result(local_path.to_string_lossy());

    match fs::metadata(&local_path).await {
        Ok(metadata) if metadata.is_file() => Ok((local_path, metadata)),
        _ => Err(FtpError::NotFound(path.to_string())),
    }
}
