//! JSON artifact writer.
//!
//! Writes the enriched node list as a single JSON array. The array is written
//! to a temporary file next to the destination and renamed over it once it is
//! complete, so readers never observe a partial artifact. The artifact keeps
//! the permissions of the file it replaces; a new one is created `0644`.

use std::fs::{self, Permissions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::enrich::EnrichedNode;
use crate::error_handling::OutputError;

/// Writes `nodes` as one JSON array (plus trailing newline) to `output_path`,
/// replacing any previous content.
///
/// Missing parent directories are created. Returns the number of records
/// written.
///
/// # Errors
///
/// - `OutputError::Create` if the directory or temp file cannot be created
/// - `OutputError::Encode` if serialization or a buffered write fails
/// - `OutputError::Persist` if flushing, syncing or the final rename fails
///
/// On error the destination keeps its previous content.
pub fn write_nodes_json(output_path: &Path, nodes: &[EnrichedNode]) -> Result<usize, OutputError> {
    let path_display = output_path.display().to_string();
    let create_error = |source| OutputError::Create {
        path: path_display.clone(),
        source,
    };
    let persist_error = |source| OutputError::Persist {
        path: path_display.clone(),
        source,
    };

    let parent = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(create_error)?;

    let temp_file = NamedTempFile::new_in(parent).map_err(create_error)?;
    let permissions = artifact_permissions(output_path, temp_file.as_file())
        .map_err(create_error)?;
    temp_file
        .as_file()
        .set_permissions(permissions)
        .map_err(create_error)?;

    let mut writer = BufWriter::new(temp_file);
    serde_json::to_writer(&mut writer, nodes)?;
    writer.write_all(b"\n").map_err(persist_error)?;

    let temp_file = writer
        .into_inner()
        .map_err(|e| persist_error(e.into_error()))?;
    temp_file.as_file().sync_all().map_err(persist_error)?;
    temp_file
        .persist(output_path)
        .map_err(|e| persist_error(e.error))?;

    log::info!("Wrote {} nodes to {}", nodes.len(), path_display);
    Ok(nodes.len())
}

/// Permissions for the artifact: those of the regular file being replaced,
/// otherwise the default for a new artifact.
fn artifact_permissions(output_path: &Path, temp_file: &fs::File) -> io::Result<Permissions> {
    match fs::metadata(output_path) {
        Ok(metadata) if metadata.is_file() => Ok(metadata.permissions()),
        _ => new_artifact_permissions(temp_file),
    }
}

#[cfg(unix)]
fn new_artifact_permissions(_temp_file: &fs::File) -> io::Result<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Ok(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn new_artifact_permissions(temp_file: &fs::File) -> io::Result<Permissions> {
    Ok(temp_file.metadata()?.permissions())
}
