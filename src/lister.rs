use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::{debug, trace};

use crate::entry::EntryRecord;
use crate::error::ListingError;
use crate::fstools::{classify_file, DirEntryCategory};

/// Lists the immediate children of `path`, one record per entry.
///
/// Records come back in whatever order the filesystem yields them. Failing to
/// open or read the directory fails the whole call. An entry that cannot be
/// followed to a directory is reported as a file.
pub fn list_directory(path: &Path) -> Result<Vec<EntryRecord>, ListingError> {
    match classify_file(path).map_err(read_error(path))? {
        DirEntryCategory::Directory => (),
        DirEntryCategory::DoesNotExist => {
            return Err(ListingError::NotFound { path: PathBuf::from(path) })
        },
        DirEntryCategory::RegularFile | DirEntryCategory::Other => {
            return Err(ListingError::NotADirectory { path: PathBuf::from(path) })
        },
    }

    let parent_directory = parent_directory_name(path)?;
    debug!(path = %path.display(), parent_directory = %parent_directory, "listing directory");

    let mut records = vec![];
    for entry in fs::read_dir(path).map_err(read_error(path))? {
        let entry = entry.map_err(read_error(path))?;
        let file_name = entry.file_name();
        let file_name = file_name.to_string_lossy();
        let record = if is_directory(&entry.path()) {
            EntryRecord::directory(&file_name, &parent_directory)
        } else {
            EntryRecord::file(&file_name, &parent_directory)
        };
        trace!(entry = %file_name, is_directory = record.is_directory, "classified entry");
        records.push(record);
    }

    debug!(path = %path.display(), count = records.len(), "listed directory");
    Ok(records)
}

fn read_error(path: &Path) -> impl Fn(io::Error) -> ListingError + '_ {
    move |err| ListingError::from_io(path, err)
}

// Dangling links, link loops and unreachable targets are not directories.
fn is_directory(path: &Path) -> bool {
    match classify_file(path) {
        Ok(category) => category == DirEntryCategory::Directory,
        Err(err) => {
            debug!(path = %path.display(), error = %err, "unable to classify entry");
            false
        },
    }
}

/// Last component of the absolute, lexically normalized form of `path`.
/// Symbolic links are not resolved. The filesystem root has no name and
/// yields an empty string.
pub fn parent_directory_name(path: &Path) -> Result<String, ListingError> {
    let absolute = std::path::absolute(path).map_err(read_error(path))?;
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => (),
            Component::ParentDir => {
                normalized.pop();
            },
            c => normalized.push(c),
        }
    }

    Ok(normalized
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default())
}
