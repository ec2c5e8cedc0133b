use super::DataStore;
use crate::error::{CrowdfundError, Result};
use crate::model::Dataset;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_FILE: &str = "crowdfunding.json";
const INDENT: &[u8] = b"    ";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(CrowdfundError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string());
        self.path
            .with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
    }
}

/// Serializes the dataset with 4-space indentation.
pub fn to_json(dataset: &Dataset) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    dataset
        .serialize(&mut ser)
        .map_err(CrowdfundError::Serialization)?;
    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Dataset> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!(
                    "event=store_load status=missing path={}",
                    self.path.display()
                );
                return Ok(Dataset::default());
            }
            Err(e) => return Err(CrowdfundError::Io(e)),
        };

        let dataset: Dataset =
            serde_json::from_str(&content).map_err(|source| CrowdfundError::StorageCorrupt {
                path: self.path.clone(),
                source,
            })?;
        log::debug!(
            "event=store_load status=ok users={} projects={}",
            dataset.users.len(),
            dataset.projects.len()
        );
        Ok(dataset)
    }

    fn save(&mut self, dataset: &Dataset) -> Result<()> {
        self.ensure_parent()?;
        let content = to_json(dataset)?;

        // Atomic write
        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, content).map_err(CrowdfundError::Io)?;
        fs::rename(&tmp_path, &self.path).map_err(CrowdfundError::Io)?;

        log::debug!(
            "event=store_save status=ok users={} projects={}",
            dataset.users.len(),
            dataset.projects.len()
        );
        Ok(())
    }
}
