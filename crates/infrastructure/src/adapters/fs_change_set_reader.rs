//! Filesystem change-set reader
//!
//! Reads the reviewable slice of a change set: source files only, first
//! `max_lines` lines each. Unreadable files become placeholder excerpts.

use std::fs;

use application::ports::{ChangeSetReaderPort, FileExcerpt};
use domain::ChangedFileSet;
use tracing::{debug, warn};

/// Lines excerpted per file
const DEFAULT_MAX_LINES: usize = 100;

/// Reads changed files from the working tree
#[derive(Debug, Clone)]
pub struct FsChangeSetReader {
    max_lines: usize,
}

impl FsChangeSetReader {
    /// Create a reader with the default excerpt cap
    pub const fn new() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
        }
    }

    /// Create a reader with a custom excerpt cap
    pub const fn with_max_lines(max_lines: usize) -> Self {
        Self { max_lines }
    }

    fn excerpt_one(&self, path: &str) -> FileExcerpt {
        match fs::read_to_string(path) {
            Ok(content) => {
                let excerpt: Vec<&str> = content.lines().take(self.max_lines).collect();
                debug!(path, lines = excerpt.len(), "Excerpted file");
                FileExcerpt::ok(path, excerpt.join("\n"))
            },
            Err(e) => {
                warn!(path, error = %e, "Cannot read changed file");
                FileExcerpt::unreadable(path, e.to_string())
            },
        }
    }
}

impl Default for FsChangeSetReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeSetReaderPort for FsChangeSetReader {
    fn excerpts(&self, files: &ChangedFileSet) -> Vec<FileExcerpt> {
        files.source_files().map(|p| self.excerpt_one(p)).collect()
    }
}
