use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirEntryCategory {
    DoesNotExist,
    RegularFile,
    Directory,
    Other,
}

/// Classifies `path`, following symbolic links. A dangling link does not exist.
pub fn classify_file(path: &Path) -> io::Result<DirEntryCategory> {
    match fs::metadata(path) {
        Ok(metadata) => {
            if metadata.is_dir() {
                Ok(DirEntryCategory::Directory)
            } else if metadata.is_file() {
                Ok(DirEntryCategory::RegularFile)
            } else {
                Ok(DirEntryCategory::Other)
            }
        },
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(DirEntryCategory::DoesNotExist),
        Err(err) => Err(err),
    }
}
