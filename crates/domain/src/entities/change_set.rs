//! Changed-file set supplied by the CI trigger event

use serde::{Deserialize, Serialize};

/// Paths under this directory are CI configuration, never review input.
const CI_CONFIG_PREFIX: &str = ".github/";

/// Only source files with this extension are excerpted into the prompt.
const SOURCE_SUFFIX: &str = ".py";

/// An ordered set of file paths modified in a push
///
/// Order is preserved from the CI event; filtering happens lazily so the
/// original list stays available for logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedFileSet {
    paths: Vec<String>,
}

impl ChangedFileSet {
    /// Build a change set from CLI arguments
    ///
    /// CI systems hand the list over either as one whitespace-separated
    /// string or as individual arguments; both are accepted and flattened
    /// in order.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let paths = args
            .into_iter()
            .flat_map(|arg| {
                arg.as_ref()
                    .split_whitespace()
                    .map(str::to_owned)
                    .collect::<Vec<_>>()
            })
            .collect();
        Self { paths }
    }

    /// All paths, in CI event order
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Paths eligible for review: source files outside CI configuration
    pub fn source_files(&self) -> impl Iterator<Item = &str> {
        self.paths
            .iter()
            .map(String::as_str)
            .filter(|p| p.ends_with(SOURCE_SUFFIX) && !p.starts_with(CI_CONFIG_PREFIX))
    }

    /// Whether the set contains no paths at all
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Number of paths in the set
    pub fn len(&self) -> usize {
        self.paths.len()
    }
}
