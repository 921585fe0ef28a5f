//! Change-set reader port - per-file content excerpts for the prompt

use domain::ChangedFileSet;
use serde::{Deserialize, Serialize};

/// Excerpt of one changed file, or the reason it could not be read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileExcerpt {
    /// Path as it appeared in the change set
    pub path: String,
    /// Excerpted content (capped by the reader), or `None` when unreadable
    pub content: Option<String>,
    /// Error text when the file could not be read
    pub error: Option<String>,
}

impl FileExcerpt {
    /// Excerpt with content
    pub fn ok(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: Some(content.into()),
            error: None,
        }
    }

    /// Placeholder for an unreadable file
    pub fn unreadable(path: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: None,
            error: Some(error.into()),
        }
    }

    /// Render this excerpt as a labeled prompt block
    pub fn prompt_block(&self) -> String {
        match (&self.content, &self.error) {
            (Some(content), _) => {
                format!("--- File: {} ---\n{}\n", self.path, content)
            },
            (None, Some(error)) => {
                format!("--- Could not read {} ({error}) ---\n", self.path)
            },
            (None, None) => format!("--- File: {} (empty) ---\n", self.path),
        }
    }
}

/// Port for reading the reviewable slice of a change set
///
/// Implementations apply the source-file filter from the domain and cap
/// each file at the reader's excerpt limit. Unreadable files degrade to
/// placeholder excerpts; the reader itself never fails.
pub trait ChangeSetReaderPort: Send + Sync {
    /// Excerpts for every reviewable file in the set, in set order
    fn excerpts(&self, files: &ChangedFileSet) -> Vec<FileExcerpt>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_excerpt_renders_labeled_block() {
        let excerpt = FileExcerpt::ok("app.py", "def main(): ...");
        let block = excerpt.prompt_block();
        assert!(block.starts_with("--- File: app.py ---\n"));
        assert!(block.contains("def main(): ..."));
    }

    #[test]
    fn unreadable_excerpt_renders_placeholder() {
        let excerpt = FileExcerpt::unreadable("gone.py", "No such file");
        let block = excerpt.prompt_block();
        assert!(block.contains("Could not read gone.py"));
        assert!(block.contains("No such file"));
    }
}
