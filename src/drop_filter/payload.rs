use std::path::{Path, PathBuf};

use thiserror::Error;

/// One candidate filesystem reference carried by a drag.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DragPayloadItem {
    pub path: PathBuf,
    pub is_directory: bool,
}

impl DragPayloadItem {
    /// Reference to a regular file.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_directory: false,
        }
    }

    /// Reference to a directory.
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_directory: true,
        }
    }

    /// Lowercased text after the last `.` of the file name, or empty when there is none.
    pub fn extension(&self) -> String {
        extension_of(&self.path)
    }
}

pub(crate) fn extension_of(path: &Path) -> String {
    let Some(name) = path.file_name() else {
        return String::new();
    };
    name.to_string_lossy()
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default()
}

/// Reasons a drag payload cannot be read as filesystem references.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    /// The payload carries no representation with a filesystem path.
    #[error("Drag payload carries no filesystem references ({entries} entries)")]
    Unsupported { entries: usize },
}

/// Anything the host can hand over as "the current drag payload".
pub trait DragPayloadSource {
    /// Read the payload as filesystem references, in the order the host reports them.
    fn file_items(&self) -> Result<Vec<DragPayloadItem>, PayloadError>;
}

impl DragPayloadSource for [DragPayloadItem] {
    fn file_items(&self) -> Result<Vec<DragPayloadItem>, PayloadError> {
        Ok(self.to_vec())
    }
}

impl DragPayloadSource for Vec<DragPayloadItem> {
    fn file_items(&self) -> Result<Vec<DragPayloadItem>, PayloadError> {
        self.as_slice().file_items()
    }
}

impl<const N: usize> DragPayloadSource for [DragPayloadItem; N] {
    fn file_items(&self) -> Result<Vec<DragPayloadItem>, PayloadError> {
        self.as_slice().file_items()
    }
}
