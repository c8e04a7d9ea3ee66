//! Recursive pattern finder
//!
//! Walks a directory tree depth-first with walkdir and yields the path of
//! every regular file whose base name matches a [`Pattern`]. Results are
//! produced lazily, one per call to [`Iterator::next`], so a consumer can
//! stop early without paying for the rest of the walk.

use serde::{Deserialize, Serialize};
use std::fs;
use std::iter::FusedIterator;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::error::{IoError, Result};
use crate::pattern::Pattern;
use crate::platform::CaseSensitivity;

/// What to do when a directory below the root cannot be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalkErrorPolicy {
    /// Log a warning, skip the affected subtree and keep walking
    #[default]
    Skip,
    /// Yield the error once and end the sequence
    Abort,
}

/// Options for a find operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FindOptions {
    /// Follow symbolic links to directories while walking
    pub follow_links: bool,
    /// Maximum depth below the root (`Some(1)` = direct entries only)
    pub max_depth: Option<usize>,
    /// Case handling used when compiling string patterns
    pub case_sensitivity: CaseSensitivity,
    /// Handling of unreadable entries below the root
    pub error_policy: WalkErrorPolicy,
}

impl FindOptions {
    /// Create new options with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to follow symbolic links
    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Set maximum depth for the walk
    pub fn with_max_depth(mut self, depth: Option<usize>) -> Self {
        self.max_depth = depth;
        self
    }

    /// Set case handling for string patterns
    pub fn with_case_sensitivity(mut self, case: CaseSensitivity) -> Self {
        self.case_sensitivity = case;
        self
    }

    /// Set the policy for errors below the root
    pub fn with_error_policy(mut self, policy: WalkErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }
}

/// Lazy sequence of files under a root whose base name matches a pattern
///
/// Each item is either a matching path, joined onto the root exactly as the
/// root was given, or an error under [`WalkErrorPolicy::Abort`]. The
/// sequence cannot be restarted; build a new one to walk again.
#[derive(Debug)]
pub struct FindFiles {
    walker: walkdir::IntoIter,
    root: PathBuf,
    pattern: Pattern,
    options: FindOptions,
    matched: usize,
    skipped: usize,
    finished: bool,
}

impl FindFiles {
    /// Start a find operation
    ///
    /// The root is checked up front: a missing, unreadable or non-directory
    /// root fails here, before any element is produced. Nothing below the
    /// root is read until the first call to `next`.
    pub fn new(root: impl AsRef<Path>, pattern: Pattern, options: FindOptions) -> Result<Self> {
        let root = root.as_ref();
        check_root(root)?;

        let mut walker = WalkDir::new(root)
            .follow_links(options.follow_links)
            .min_depth(1);
        if let Some(depth) = options.max_depth {
            walker = walker.max_depth(depth);
        }

        log::debug!(
            "Finding {:?} under {} (follow_links={}, max_depth={:?}, policy={:?})",
            pattern.as_str(),
            root.display(),
            options.follow_links,
            options.max_depth,
            options.error_policy,
        );

        Ok(Self {
            walker: walker.into_iter(),
            root: root.to_path_buf(),
            pattern,
            options,
            matched: 0,
            skipped: 0,
            finished: false,
        })
    }

    /// Root the walk started from
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Pattern base names are tested against
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Options in effect
    pub fn options(&self) -> &FindOptions {
        &self.options
    }

    /// Number of matches produced so far
    pub fn matched(&self) -> usize {
        self.matched
    }

    /// Number of unreadable entries skipped so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Check if an entry is a file whose name matches
    fn should_yield(&self, entry: &DirEntry) -> bool {
        self.pattern.matches(entry.file_name()) && is_regular_file(entry)
    }

    fn finish(&mut self) {
        self.finished = true;
        log::debug!(
            "Finished walking {}: {} matches, {} skipped",
            self.root.display(),
            self.matched,
            self.skipped
        );
    }
}

impl Iterator for FindFiles {
    type Item = Result<PathBuf>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            let Some(next) = self.walker.next() else {
                self.finish();
                return None;
            };

            match next {
                Ok(entry) => {
                    if self.should_yield(&entry) {
                        self.matched += 1;
                        return Some(Ok(entry.into_path()));
                    }
                }
                // The root vanished or lost permissions after the initial check
                Err(e) if e.depth() == 0 => {
                    self.finish();
                    return Some(Err(e.into()));
                }
                Err(e) => match self.options.error_policy {
                    WalkErrorPolicy::Skip => {
                        self.skipped += 1;
                        log::warn!("Skipping unreadable entry: {e}");
                    }
                    WalkErrorPolicy::Abort => {
                        self.finish();
                        return Some(Err(e.into()));
                    }
                },
            }
        }
    }
}

impl FusedIterator for FindFiles {}

/// Verify the root exists, is a directory and can be listed
fn check_root(root: &Path) -> Result<()> {
    let metadata = fs::metadata(root).map_err(|e| IoError::from_std(e).with_path(root))?;
    if !metadata.is_dir() {
        return Err(IoError::not_a_directory(root).into());
    }
    fs::read_dir(root).map_err(|e| IoError::from_std(e).with_path(root))?;
    Ok(())
}

/// Regular files, including symlinks that resolve to one
fn is_regular_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return true;
    }
    file_type.is_symlink() && fs::metadata(entry.path()).is_ok_and(|m| m.is_file())
}

/// Find files under `root` whose base name matches `pattern`
pub fn find_files(root: impl AsRef<Path>, pattern: &str) -> Result<FindFiles> {
    find_files_with(root, pattern, FindOptions::default())
}

/// Find files with explicit options
pub fn find_files_with(
    root: impl AsRef<Path>,
    pattern: &str,
    options: FindOptions,
) -> Result<FindFiles> {
    let pattern = Pattern::with_case(pattern, options.case_sensitivity)?;
    FindFiles::new(root, pattern, options)
}

/// Convenience function to collect every match eagerly
pub fn collect_files(
    root: impl AsRef<Path>,
    pattern: &str,
    options: FindOptions,
) -> Result<Vec<PathBuf>> {
    find_files_with(root, pattern, options)?.collect()
}
