use std::path::{Path, PathBuf};

use eframe::egui;

use crate::drop_filter::{DragPayloadItem, DragPayloadSource, PayloadError};

/// One dragged entry as egui reports it.
///
/// Entries without a path (byte-only drops, some web sources) cannot be read
/// as filesystem references.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HostFile {
    pub path: Option<PathBuf>,
}

impl HostFile {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }
}

impl From<&egui::HoveredFile> for HostFile {
    fn from(file: &egui::HoveredFile) -> Self {
        Self {
            path: file.path.clone(),
        }
    }
}

impl From<&egui::DroppedFile> for HostFile {
    fn from(file: &egui::DroppedFile) -> Self {
        Self {
            path: file.path.clone(),
        }
    }
}

/// Payload view over the host's dragged entries.
///
/// Directory-ness is probed on the filesystem each time the payload is read,
/// so every evaluation sees the current state of disk.
#[derive(Clone, Copy, Debug)]
pub struct HostPayload<'a> {
    files: &'a [HostFile],
}

impl<'a> HostPayload<'a> {
    pub fn new(files: &'a [HostFile]) -> Self {
        Self { files }
    }
}

impl DragPayloadSource for HostPayload<'_> {
    fn file_items(&self) -> Result<Vec<DragPayloadItem>, PayloadError> {
        let items: Vec<DragPayloadItem> = self
            .files
            .iter()
            .filter_map(|file| file.path.as_deref())
            .map(probe)
            .collect();
        if items.is_empty() {
            return Err(PayloadError::Unsupported {
                entries: self.files.len(),
            });
        }
        Ok(items)
    }
}

fn probe(path: &Path) -> DragPayloadItem {
    DragPayloadItem {
        path: path.to_path_buf(),
        is_directory: path.is_dir(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn probes_directories_on_disk() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("table.csv");
        std::fs::write(&file, "a,b\n").unwrap();
        let files = [HostFile::with_path(dir.path()), HostFile::with_path(&file)];
        let items = HostPayload::new(&files).file_items().unwrap();
        assert_eq!(
            items,
            vec![
                DragPayloadItem::directory(dir.path()),
                DragPayloadItem::file(&file)
            ]
        );
    }

    #[test]
    fn pathless_entries_are_skipped() {
        let files = [HostFile::default(), HostFile::with_path("/missing/a.csv")];
        let items = HostPayload::new(&files).file_items().unwrap();
        assert_eq!(items, vec![DragPayloadItem::file("/missing/a.csv")]);
    }

    #[test]
    fn payload_without_paths_is_unsupported() {
        let files = [HostFile::default(), HostFile::default()];
        assert_eq!(
            HostPayload::new(&files).file_items(),
            Err(PayloadError::Unsupported { entries: 2 })
        );
        assert!(HostPayload::new(&[]).file_items().is_err());
    }
}
