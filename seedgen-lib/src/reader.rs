use crate::types::*;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Reads a previously written dataset file back into memory.
pub fn load_dataset(path: &Path) -> Result<Dataset, SeedGenError> {
    let json = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => SeedGenError::NotFound(path.to_path_buf()),
        _ => SeedGenError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let dataset = parse_dataset(&json)?;
    debug!(path = %path.display(), users = dataset.users.len(), "dataset loaded");
    Ok(dataset)
}

pub fn parse_dataset(json: &str) -> Result<Dataset, SeedGenError> {
    Ok(serde_json::from_str(json)?)
}
