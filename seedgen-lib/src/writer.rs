use crate::types::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const STORAGE_DIR: [&str; 2] = ["storage", "app"];
pub const OUTPUT_FILE_NAME: &str = "users_orders.json";

/// Where the dataset lands, relative to an explicit root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_current_dir() -> Result<Self, SeedGenError> {
        let root = std::env::current_dir().map_err(SeedGenError::CurrentDir)?;
        Ok(Self::new(root))
    }

    /// Relative roots are taken against the current directory so reported paths stay absolute.
    pub fn resolve(root: Option<&Path>) -> Result<Self, SeedGenError> {
        let cwd = Self::from_current_dir()?;
        Ok(match root {
            Some(root) => Self::new(cwd.root.join(root)),
            None => cwd,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn target_dir(&self) -> PathBuf {
        STORAGE_DIR
            .iter()
            .fold(self.root.clone(), |dir, part| dir.join(part))
    }

    pub fn file_path(&self) -> PathBuf {
        self.target_dir().join(OUTPUT_FILE_NAME)
    }
}

/// Renders the dataset with two-space indentation. Non-ASCII text is kept as-is.
pub fn render_json(dataset: &Dataset) -> Result<String, SeedGenError> {
    Ok(serde_json::to_string_pretty(dataset)?)
}

/// Creates the target directory if needed and overwrites the dataset file.
/// Returns the path that was written.
pub fn write_dataset(dataset: &Dataset, layout: &OutputLayout) -> Result<PathBuf, SeedGenError> {
    let target_dir = layout.target_dir();
    fs::create_dir_all(&target_dir).map_err(|source| SeedGenError::CreateDir {
        path: target_dir.clone(),
        source,
    })?;
    debug!(dir = %target_dir.display(), "target directory ready");

    let json = render_json(dataset)?;
    let file_path = layout.file_path();
    fs::write(&file_path, json.as_bytes()).map_err(|source| SeedGenError::Write {
        path: file_path.clone(),
        source,
    })?;

    info!(
        path = %file_path.display(),
        bytes = json.len(),
        users = dataset.users.len(),
        orders = dataset.order_count(),
        total_amount = dataset.total_amount(),
        "dataset written"
    );

    Ok(file_path)
}

/// Generates the fixed dataset and writes it under `layout`.
pub fn generate_and_write(layout: &OutputLayout) -> Result<(Dataset, PathBuf), SeedGenError> {
    let dataset = crate::generator::generate_dataset();
    let path = write_dataset(&dataset, layout)?;
    Ok((dataset, path))
}
