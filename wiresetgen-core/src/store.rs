use std::path::{Path, PathBuf};

use crate::{Error, Result, paths};

/// Access to the project tree being scanned.
///
/// All paths handed to and returned from a store are relative to the
/// project root.
pub trait FileStore {
    /// Read `go.mod`, returning `None` if it does not exist.
    fn read_manifest(&self) -> Result<Option<String>>;

    /// Read an optional file at the project root, returning `None` if it does not exist.
    fn read_root_file(&self, name: &str) -> Result<Option<String>>;

    /// List every Go source file under the project root, recursively.
    fn list_source_files(&self) -> Result<Vec<PathBuf>>;

    /// Read a source file.
    fn read_file(&self, path: &Path) -> Result<String>;

    /// Write a file, creating its directory if needed.
    fn write_file(&self, directory: &Path, file_name: &str, content: &str) -> Result<()>;
}

/// A [`FileStore`] backed by the local filesystem.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read_optional(&self, path: &Path) -> Result<Option<String>> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::io(path, e)),
        }
    }

    fn collect_sources(&self, dir: &Path, relative: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
        let entries = std::fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

        for entry in entries {
            let entry = entry.map_err(|e| Error::io(dir, e))?;
            let file_type = entry.file_type().map_err(|e| Error::io(entry.path(), e))?;
            let rel = relative.join(entry.file_name());

            if file_type.is_dir() {
                self.collect_sources(&entry.path(), &rel, out)?;
            } else if rel
                .extension()
                .is_some_and(|ext| ext == paths::SOURCE_EXTENSION)
            {
                out.push(rel);
            }
        }

        Ok(())
    }
}

impl FileStore for FsStore {
    fn read_manifest(&self) -> Result<Option<String>> {
        self.read_optional(&self.root.join(paths::MANIFEST_FILE))
    }

    fn read_root_file(&self, name: &str) -> Result<Option<String>> {
        self.read_optional(&self.root.join(name))
    }

    fn list_source_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        self.collect_sources(&self.root, Path::new(""), &mut files)?;
        Ok(files)
    }

    fn read_file(&self, path: &Path) -> Result<String> {
        let full = self.root.join(path);
        let bytes = std::fs::read(&full).map_err(|e| Error::io(&full, e))?;
        // Non-UTF-8 bytes become U+FFFD; scanning is line based
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn write_file(&self, directory: &Path, file_name: &str, content: &str) -> Result<()> {
        let path = self.root.join(directory).join(file_name);
        write_file(&path, content)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    std::fs::write(path, content).map_err(|e| Error::io(path, e))?;
    Ok(())
}

#[cfg(any(test, feature = "testing"))]
mod memory {
    use std::{
        cell::RefCell,
        collections::BTreeMap,
        path::{Path, PathBuf},
    };

    use super::FileStore;
    use crate::{Error, Result, paths};

    /// An in-memory [`FileStore`] for tests.
    ///
    /// Files are keyed by their forward-slash relative path. Writes are
    /// recorded and can be inspected with [`MemoryStore::written`].
    #[derive(Debug, Default)]
    pub struct MemoryStore {
        files: BTreeMap<String, String>,
        written: RefCell<BTreeMap<String, String>>,
    }

    impl MemoryStore {
        /// Create an empty store.
        pub fn new() -> Self {
            Self::default()
        }

        /// Add a file to the store.
        pub fn with_file(mut self, path: &str, content: &str) -> Self {
            self.files.insert(path.to_string(), content.to_string());
            self
        }

        /// Add a `go.mod` declaring the given module.
        pub fn with_module(self, module: &str) -> Self {
            self.with_file(paths::MANIFEST_FILE, &format!("module {}\n\ngo 1.22\n", module))
        }

        /// Files written so far, keyed by forward-slash path.
        pub fn written(&self) -> BTreeMap<String, String> {
            self.written.borrow().clone()
        }
    }

    impl FileStore for MemoryStore {
        fn read_manifest(&self) -> Result<Option<String>> {
            Ok(self.files.get(paths::MANIFEST_FILE).cloned())
        }

        fn read_root_file(&self, name: &str) -> Result<Option<String>> {
            Ok(self.files.get(name).cloned())
        }

        fn list_source_files(&self) -> Result<Vec<PathBuf>> {
            Ok(self
                .files
                .keys()
                .filter(|path| {
                    Path::new(path)
                        .extension()
                        .is_some_and(|ext| ext == paths::SOURCE_EXTENSION)
                })
                .map(PathBuf::from)
                .collect())
        }

        fn read_file(&self, path: &Path) -> Result<String> {
            let key = paths::display_path(path);
            self.files.get(&key).cloned().ok_or_else(|| {
                Error::io(
                    path,
                    std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
                )
            })
        }

        fn write_file(&self, directory: &Path, file_name: &str, content: &str) -> Result<()> {
            let key = paths::display_path(&directory.join(file_name));
            self.written.borrow_mut().insert(key, content.to_string());
            Ok(())
        }
    }
}

#[cfg(any(test, feature = "testing"))]
pub use memory::MemoryStore;
