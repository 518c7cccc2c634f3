use std::fmt::Display;

use serde::Serialize;

/// One immediate child of a scanned directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EntryRecord {
    pub name: String,
    pub extension: String,
    pub is_directory: bool,
    pub parent_directory: String,
}

impl EntryRecord {
    pub fn directory(name: &str, parent_directory: &str) -> Self {
        EntryRecord {
            name: String::from(name),
            extension: String::new(),
            is_directory: true,
            parent_directory: String::from(parent_directory),
        }
    }

    pub fn file(file_name: &str, parent_directory: &str) -> Self {
        let (name, extension) = split_file_name(file_name);
        EntryRecord {
            name: String::from(name),
            extension: String::from(extension),
            is_directory: false,
            parent_directory: String::from(parent_directory),
        }
    }

    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Display for EntryRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.name,
            self.extension,
            self.is_directory,
            self.parent_directory,
        )
    }
}

/// Splits a file name into (name, extension) at the last dot.
///
/// Leading dots are part of the name, so `.bashrc` has no extension while
/// `.config.toml` has `.toml`. The extension keeps its dot.
pub fn split_file_name(file_name: &str) -> (&str, &str) {
    let leading_dots = file_name.len() - file_name.trim_start_matches('.').len();
    match file_name.rfind('.') {
        Some(dot) if dot > leading_dots => file_name.split_at(dot),
        _ => (file_name, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_file_name() {
        assert_eq!(split_file_name("foo.txt"), ("foo", ".txt"));
        assert_eq!(split_file_name("README"), ("README", ""));
        assert_eq!(split_file_name("archive.tar.gz"), ("archive.tar", ".gz"));
        assert_eq!(split_file_name("notes."), ("notes", "."));
    }

    #[test]
    fn test_split_hidden_file_name() {
        assert_eq!(split_file_name(".bashrc"), (".bashrc", ""));
        assert_eq!(split_file_name("..foo"), ("..foo", ""));
        assert_eq!(split_file_name("..."), ("...", ""));
        assert_eq!(split_file_name(".config.toml"), (".config", ".toml"));
        assert_eq!(split_file_name(""), ("", ""));
    }

    #[test]
    fn test_directory_has_no_extension() {
        let record = EntryRecord::directory("photos.2024", "home");
        assert_eq!(record.name, "photos.2024");
        assert_eq!(record.extension, "");
        assert!(record.is_directory);
    }

    #[test]
    fn test_display() {
        let file = EntryRecord::file("test_file.jpg", "test_directory");
        assert_eq!(format!("{}", file), "test_file\t.jpg\tfalse\ttest_directory");
        let dir = EntryRecord::directory("subdir", "test_directory");
        assert_eq!(format!("{}", dir), "subdir\t\ttrue\ttest_directory");
    }

    #[test]
    fn test_to_json_line() {
        let line = EntryRecord::file("README", "docs").to_json_line().unwrap();
        assert_eq!(
            line,
            r#"{"name":"README","extension":"","is_directory":false,"parent_directory":"docs"}"#
        );
    }
}
