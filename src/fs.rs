//! Destination filesystems.
//! Generation only ever asks three things of the place it writes to: does a
//! path exist, create a directory, write a file. [`OsFs`] answers them on
//! disk and [`MemoryFs`] answers them in memory.

use crate::error::{Error, Result};
use log::debug;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Minimal filesystem contract used while generating.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;

    /// Creates `path` and any missing parents.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Creates or truncates the file at `path`. Missing parent directories
    /// are created first.
    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<()>;
}

/// The real disk. Relative paths resolve against the current working
/// directory.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFs;

impl OsFs {
    pub fn new() -> Self {
        Self
    }

    fn resolve(&self, path: &Path) -> Result<PathBuf> {
        if path.is_absolute() {
            return Ok(path.to_path_buf());
        }
        let cwd = std::env::current_dir().map_err(|e| Error::io(path, e))?;
        Ok(cwd.join(path))
    }
}

impl FileSystem for OsFs {
    fn exists(&self, path: &Path) -> bool {
        self.resolve(path).map(|p| p.exists()).unwrap_or(false)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let abs_path = self.resolve(path)?;
        debug!("Creating directory '{}'", abs_path.display());
        std::fs::create_dir_all(&abs_path).map_err(|e| Error::io(abs_path, e))
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<()> {
        let abs_path = self.resolve(path)?;
        if let Some(parent) = abs_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        debug!("Writing '{}'", abs_path.display());
        std::fs::write(&abs_path, contents).map_err(|e| Error::io(abs_path, e))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Dir,
    File(Vec<u8>),
}

/// In-memory filesystem for dry runs and tests.
#[derive(Debug, Default)]
pub struct MemoryFs {
    nodes: RefCell<BTreeMap<PathBuf, Node>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paths of every file written so far, sorted.
    pub fn files(&self) -> Vec<PathBuf> {
        self.nodes
            .borrow()
            .iter()
            .filter(|(_, node)| matches!(node, Node::File(_)))
            .map(|(path, _)| path.clone())
            .collect()
    }

    /// Paths of every directory created so far, sorted.
    pub fn dirs(&self) -> Vec<PathBuf> {
        self.nodes
            .borrow()
            .iter()
            .filter(|(_, node)| matches!(node, Node::Dir))
            .map(|(path, _)| path.clone())
            .collect()
    }

    /// Contents of the file at `path`, if one was written there.
    pub fn read(&self, path: &Path) -> Option<Vec<u8>> {
        match self.nodes.borrow().get(path) {
            Some(Node::File(bytes)) => Some(bytes.clone()),
            _ => None,
        }
    }

    pub fn read_to_string(&self, path: &Path) -> Option<String> {
        self.read(path)
            .and_then(|bytes| String::from_utf8(bytes).ok())
    }

    fn insert_dirs(nodes: &mut BTreeMap<PathBuf, Node>, path: &Path) -> Result<()> {
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            match nodes.get(ancestor) {
                Some(Node::File(_)) => {
                    return Err(Error::io(
                        ancestor,
                        std::io::Error::new(
                            std::io::ErrorKind::AlreadyExists,
                            "a file exists where a directory is expected",
                        ),
                    ));
                }
                Some(Node::Dir) => {}
                None => {
                    nodes.insert(ancestor.to_path_buf(), Node::Dir);
                }
            }
        }
        Ok(())
    }
}

impl FileSystem for MemoryFs {
    fn exists(&self, path: &Path) -> bool {
        self.nodes.borrow().contains_key(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let mut nodes = self.nodes.borrow_mut();
        Self::insert_dirs(&mut nodes, path)
    }

    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<()> {
        let mut nodes = self.nodes.borrow_mut();
        if let Some(parent) = path.parent() {
            Self::insert_dirs(&mut nodes, parent)?;
        }
        if let Some(Node::Dir) = nodes.get(path) {
            return Err(Error::io(
                path,
                std::io::Error::new(std::io::ErrorKind::AlreadyExists, "path is a directory"),
            ));
        }
        nodes.insert(path.to_path_buf(), Node::File(contents.to_vec()));
        Ok(())
    }
}
