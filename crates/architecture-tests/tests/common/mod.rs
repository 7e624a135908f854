//! Source-tree helpers shared by the architecture tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Find the workspace root by looking for Cargo.toml with [workspace].
pub fn workspace_root() -> PathBuf {
    let current_dir = std::env::current_dir().expect("Failed to get current directory");

    let mut dir = current_dir.as_path();
    loop {
        let cargo_toml = dir.join("Cargo.toml");
        if let Ok(content) = fs::read_to_string(&cargo_toml)
            && content.contains("[workspace]")
        {
            return dir.to_path_buf();
        }

        match dir.parent() {
            Some(parent) => dir = parent,
            None => return current_dir,
        }
    }
}

/// All .rs files under `dir`, skipping build output and this crate.
pub fn rust_files(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_entry(|entry| {
            let name = entry.file_name();
            name != "target" && name != "architecture-tests"
        })
        .filter_map(Result::ok)
        .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|entry| entry.into_path())
        .collect()
}

/// Whether a source file holds only test code.
pub fn is_test_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy();
    path_str.contains("/tests/") || path_str.ends_with("_tests.rs")
}

/// Source text with `//` comment lines removed.
pub fn code_lines(content: &str) -> String {
    content
        .lines()
        .filter(|line| !line.trim_start().starts_with("//"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The part of a source file before its first `#[cfg(test)]` item.
pub fn non_test_source(content: &str) -> &str {
    content
        .find("#[cfg(test)]")
        .map_or(content, |index| &content[..index])
}
