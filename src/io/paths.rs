use std::path::{Path, PathBuf};

/// Name of the shared settings file.
pub const SETTINGS_FILE: &str = "setup.csv";

/// File backing the class slot at `index` (zero-based).
pub fn class_file_name(index: usize) -> String {
    format!("class{}.csv", index + 1)
}

pub fn class_file_path(dir: &Path, index: usize) -> PathBuf {
    dir.join(class_file_name(index))
}

pub fn settings_path(dir: &Path) -> PathBuf {
    dir.join(SETTINGS_FILE)
}

/// Per-user data directory, created if missing.
/// Falls back to the working directory when no home is resolvable.
pub fn data_dir() -> PathBuf {
    let dir = directories::ProjectDirs::from("", "", "AssignmentTracker")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    if let Err(e) = std::fs::create_dir_all(&dir) {
        log::warn!("Could not create data directory {}: {}", dir.display(), e);
    }
    dir
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_files_are_numbered_from_one() {
        assert_eq!(class_file_name(0), "class1.csv");
        assert_eq!(class_file_name(6), "class7.csv");
        let dir = Path::new("data");
        assert_eq!(class_file_path(dir, 2), dir.join("class3.csv"));
        assert_eq!(settings_path(dir), dir.join("setup.csv"));
    }
}
