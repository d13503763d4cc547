//! File discovery
//!
//! Explicit file arguments are always linted. Directories are walked with `ignore`, which
//! honors `.gitignore` and hidden-file rules, and only files with a configured extension are
//! kept.

use aaa_config::AaaConfig;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

pub fn collect(paths: &[PathBuf], config: &AaaConfig) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            walk(path, config, &mut files);
        } else {
            files.push(path.clone());
        }
    }

    files.sort();
    files.dedup();
    tracing::debug!(count = files.len(), "collected files");
    files
}

fn walk(root: &Path, config: &AaaConfig, files: &mut Vec<PathBuf>) {
    for entry in WalkBuilder::new(root).build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::warn!(%err, "skipping unreadable entry");
                continue;
            }
        };
        let is_file = entry.file_type().map(|t| t.is_file()).unwrap_or(false);
        if is_file && config.accepts(entry.path()) {
            files.push(entry.into_path());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_walks_directories_by_extension() {
        // Default temp dir names start with a dot, which the walker would treat as hidden
        let dir = tempfile::Builder::new().prefix("aaa-files").tempdir().unwrap();
        let nested = dir.path().join("src/nested");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("a.test.js"), "").unwrap();
        fs::write(nested.join("b.spec.ts"), "").unwrap();
        fs::write(nested.join("notes.md"), "").unwrap();

        let config = aaa_config::load_defaults().unwrap();
        let files = collect(&[dir.path().to_path_buf()], &config);

        assert_eq!(
            files,
            vec![dir.path().join("a.test.js"), nested.join("b.spec.ts")]
        );
    }

    #[test]
    fn test_explicit_files_are_kept() {
        let config = aaa_config::load_defaults().unwrap();
        let files = collect(&[PathBuf::from("missing/readme.md")], &config);
        assert_eq!(files, vec![PathBuf::from("missing/readme.md")]);
    }
}
