//! On-disk directory tree builder for traversal tests

use std::collections::BTreeSet;
use std::fs;
use std::io::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Builder describing a directory tree to materialize in a temp dir
#[derive(Debug, Default)]
pub struct TestTreeBuilder {
    /// Root directory name inside the temp dir (empty = temp dir itself)
    root_name: Option<String>,
    files: Vec<(PathBuf, Vec<u8>)>,
    dirs: Vec<PathBuf>,
    symlinks: Vec<(PathBuf, PathBuf)>,
}

impl TestTreeBuilder {
    /// Create a new, empty tree builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the tree under a named subdirectory of the temp dir
    pub fn with_root_name(mut self, name: &str) -> Self {
        self.root_name = Some(name.to_string());
        self
    }

    /// Add an empty file; parent directories are created as needed
    pub fn file(self, relative: &str) -> Self {
        self.file_with_content(relative, b"test")
    }

    /// Add a file with specific content
    pub fn file_with_content(mut self, relative: &str, content: &[u8]) -> Self {
        self.files.push((PathBuf::from(relative), content.to_vec()));
        self
    }

    /// Add an (empty) directory
    pub fn dir(mut self, relative: &str) -> Self {
        self.dirs.push(PathBuf::from(relative));
        self
    }

    /// Add a symbolic link at `link` pointing to `target` (relative to the link's directory)
    pub fn symlink(mut self, link: &str, target: &str) -> Self {
        self.symlinks
            .push((PathBuf::from(link), PathBuf::from(target)));
        self
    }

    /// Materialize the tree
    pub fn build(self) -> Result<TestTree> {
        let temp = TempDir::new()?;
        let root = match &self.root_name {
            Some(name) => temp.path().join(name),
            None => temp.path().to_path_buf(),
        };
        fs::create_dir_all(&root)?;

        for dir in &self.dirs {
            fs::create_dir_all(root.join(dir))?;
        }

        for (relative, content) in &self.files {
            let path = root.join(relative);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, content)?;
        }

        for (link, target) in &self.symlinks {
            let path = root.join(link);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            create_symlink(target, &path)?;
        }

        Ok(TestTree { _temp: temp, root })
    }
}

#[cfg(unix)]
fn create_symlink(target: &Path, link: &Path) -> Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn create_symlink(target: &Path, link: &Path) -> Result<()> {
    let resolved = link.parent().map(|p| p.join(target));
    if resolved.is_some_and(|p| p.is_dir()) {
        std::os::windows::fs::symlink_dir(target, link)
    } else {
        std::os::windows::fs::symlink_file(target, link)
    }
}

/// A materialized tree, removed from disk on drop
#[derive(Debug)]
pub struct TestTree {
    _temp: TempDir,
    root: PathBuf,
}

impl TestTree {
    /// Root directory of the tree
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Absolute path of an entry inside the tree
    pub fn join(&self, relative: &str) -> PathBuf {
        relative
            .split('/')
            .fold(self.root.clone(), |path, part| path.join(part))
    }

    /// Every regular file in the tree, found with a plain recursive `read_dir`
    ///
    /// Symlinks are reported when they resolve to a regular file but are
    /// never descended into.
    pub fn all_files(&self) -> Result<BTreeSet<PathBuf>> {
        let mut out = BTreeSet::new();
        collect(&self.root, &mut out)?;
        Ok(out)
    }

    /// Files whose base name satisfies `predicate`
    pub fn files_where(&self, predicate: impl Fn(&str) -> bool) -> Result<BTreeSet<PathBuf>> {
        Ok(self
            .all_files()?
            .into_iter()
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(&predicate)
            })
            .collect())
    }
}

fn collect(dir: &Path, out: &mut BTreeSet<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let path = entry.path();
        if file_type.is_dir() {
            collect(&path, out)?;
        } else if file_type.is_file()
            || (file_type.is_symlink() && fs::metadata(&path).is_ok_and(|m| m.is_file()))
        {
            out.insert(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_creates_nested_files() {
        let tree = TestTreeBuilder::new()
            .with_root_name("docspdf")
            .file("a/bootstrap-theme.pdf")
            .file("bootstrap.txt")
            .dir("empty")
            .build()
            .unwrap();

        assert!(tree.path().ends_with("docspdf"));
        assert!(tree.join("a/bootstrap-theme.pdf").is_file());
        assert!(tree.join("empty").is_dir());
        assert_eq!(tree.all_files().unwrap().len(), 2);
    }

    #[test]
    fn test_files_where_filters_base_names() {
        let tree = TestTreeBuilder::new()
            .file("x/report.pdf")
            .file("notes.txt")
            .dir("dir.pdf")
            .build()
            .unwrap();

        let pdfs = tree.files_where(|name| name.ends_with(".pdf")).unwrap();

        assert_eq!(pdfs, BTreeSet::from([tree.join("x/report.pdf")]));
    }

    #[test]
    fn test_tree_is_removed_on_drop() {
        let tree = TestTreeBuilder::new().file("a.pdf").build().unwrap();
        let root = tree.path().to_path_buf();

        drop(tree);

        assert!(!root.exists());
    }
}
