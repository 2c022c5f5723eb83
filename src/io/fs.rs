use hashbrown::HashMap;
use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Filesystem the compiler reads templates from and writes output to.
///
/// Handles are released when the returned values are dropped.
pub trait FileSystem {
    fn is_file(&self, path: &str) -> bool;

    /// Opens `path` for reading and returns its entire content.
    fn read(&self, path: &str) -> io::Result<Vec<u8>>;

    /// Opens `path` for writing, truncating any previous content.
    fn create(&self, path: &str) -> io::Result<Box<dyn Write + '_>>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    #[inline]
    fn is_file(&self, path: &str) -> bool {
        (**self).is_file(path)
    }

    #[inline]
    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }

    #[inline]
    fn create(&self, path: &str) -> io::Result<Box<dyn Write + '_>> {
        (**self).create(path)
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "std-fs")] {
        use std::fs::{self as std_fs, File};
        use std::io::BufWriter;

        /// [`FileSystem`] backed by `std::fs`.
        #[derive(Debug, Default, Clone, Copy)]
        pub struct StdFileSystem;

        impl FileSystem for StdFileSystem {
            fn is_file(&self, path: &str) -> bool {
                std_fs::metadata(path).is_ok_and(|meta| meta.is_file())
            }

            fn read(&self, path: &str) -> io::Result<Vec<u8>> {
                std_fs::read(path)
            }

            fn create(&self, path: &str) -> io::Result<Box<dyn Write + '_>> {
                Ok(Box::new(BufWriter::new(File::create(path)?)))
            }
        }
    }
}

type SharedFiles = Rc<RefCell<HashMap<String, Vec<u8>>>>;

/// In-memory [`FileSystem`].
///
/// Clones share the same files, so a caller can keep a handle to inspect the
/// output after handing a clone to the compiler.
#[derive(Debug, Default, Clone)]
pub struct MemoryFileSystem {
    files: SharedFiles,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, path: impl Into<String>, content: impl Into<Vec<u8>>) {
        self.files.borrow_mut().insert(path.into(), content.into());
    }

    pub fn get(&self, path: &str) -> Option<Vec<u8>> {
        self.files.borrow().get(path).cloned()
    }

    pub fn get_string(&self, path: &str) -> Option<String> {
        self.get(path)
            .map(|content| String::from_utf8_lossy(&content).into_owned())
    }

    pub fn remove(&self, path: &str) -> Option<Vec<u8>> {
        self.files.borrow_mut().remove(path)
    }

    pub fn paths(&self) -> Vec<String> {
        let mut paths: Vec<_> = self.files.borrow().keys().cloned().collect();

        paths.sort();

        paths
    }
}

impl FileSystem for MemoryFileSystem {
    fn is_file(&self, path: &str) -> bool {
        self.files.borrow().contains_key(path)
    }

    fn read(&self, path: &str) -> io::Result<Vec<u8>> {
        self.get(path).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no such file `{path}`"))
        })
    }

    fn create(&self, path: &str) -> io::Result<Box<dyn Write + '_>> {
        self.insert(path, Vec::new());

        Ok(Box::new(MemoryFile {
            files: Rc::clone(&self.files),
            path: path.to_owned(),
        }))
    }
}

struct MemoryFile {
    files: SharedFiles,
    path: String,
}

impl Write for MemoryFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.files
            .borrow_mut()
            .entry(self.path.clone())
            .or_default()
            .extend_from_slice(buf);

        Ok(buf.len())
    }

    #[inline]
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
