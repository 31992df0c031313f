//! Logical resource paths → URIs → bytes.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Maps logical paths (as written in `url(...)`) to URIs and reads them.
pub trait ResourceLocator {
    /// The URI for `path`, or `None` if this locator cannot find it.
    fn resolve(&self, path: &str) -> Option<String>;

    /// Read the bytes behind a URI previously returned by [`resolve`](Self::resolve).
    fn read(&self, uri: &str) -> io::Result<Vec<u8>>;
}

/// Resolves `file:` URIs, absolute paths and paths relative to a base
/// directory. Only existing files resolve.
#[derive(Debug, Clone)]
pub struct FileLocator {
    base: PathBuf,
}

impl FileLocator {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }
}

impl ResourceLocator for FileLocator {
    fn resolve(&self, path: &str) -> Option<String> {
        let candidate = match path.strip_prefix("file:") {
            Some(local) => PathBuf::from(local),
            None if Path::new(path).is_absolute() => PathBuf::from(path),
            None => self.base.join(path),
        };
        candidate
            .is_file()
            .then(|| format!("file:{}", candidate.display()))
    }

    fn read(&self, uri: &str) -> io::Result<Vec<u8>> {
        match uri.strip_prefix("file:") {
            Some(local) => fs::read(local),
            None => Err(io::Error::new(
                io::ErrorKind::Unsupported,
                format!("unsupported uri scheme: {uri}"),
            )),
        }
    }
}

/// Tries each locator in turn.
#[derive(Default)]
pub struct LocatorChain {
    locators: Vec<Box<dyn ResourceLocator>>,
}

impl LocatorChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a locator (builder).
    pub fn with(mut self, locator: impl ResourceLocator + 'static) -> Self {
        self.locators.push(Box::new(locator));
        self
    }

    pub fn push(&mut self, locator: Box<dyn ResourceLocator>) {
        self.locators.push(locator);
    }

    pub fn len(&self) -> usize {
        self.locators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locators.is_empty()
    }
}

impl ResourceLocator for LocatorChain {
    fn resolve(&self, path: &str) -> Option<String> {
        self.locators.iter().find_map(|locator| locator.resolve(path))
    }

    fn read(&self, uri: &str) -> io::Result<Vec<u8>> {
        let mut last_error = None;
        for locator in &self.locators {
            match locator.read(uri) {
                Ok(bytes) => return Ok(bytes),
                Err(err) => last_error = Some(err),
            }
        }
        Err(last_error.unwrap_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no locator can read {uri}"))
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryLocator;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("gilt-skin-{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn file_locator_resolves_relative_paths() {
        let dir = scratch_dir("relative");
        fs::write(dir.join("logo.img"), b"IMG-logo").unwrap();

        let locator = FileLocator::new(&dir);
        let uri = locator.resolve("logo.img").unwrap();
        assert!(uri.starts_with("file:"));
        assert_eq!(locator.read(&uri).unwrap(), b"IMG-logo");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn file_locator_accepts_file_scheme() {
        let dir = scratch_dir("scheme");
        let file = dir.join("a.img");
        fs::write(&file, b"IMG").unwrap();

        let locator = FileLocator::new("/nonexistent");
        let uri = locator.resolve(&format!("file:{}", file.display()));
        assert_eq!(uri, Some(format!("file:{}", file.display())));

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_files_do_not_resolve() {
        let locator = FileLocator::new(std::env::temp_dir());
        assert_eq!(locator.resolve("definitely-not-here-7f3a.img"), None);
    }

    #[test]
    fn unsupported_scheme_is_an_error() {
        let locator = FileLocator::new(".");
        let err = locator.read("platform:/plugin/x.png").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Unsupported);
    }

    #[test]
    fn chain_uses_first_match() {
        let chain = LocatorChain::new()
            .with(MemoryLocator::new().with_file("a.img", b"IMG-first".to_vec()))
            .with(MemoryLocator::new().with_file("a.img", b"IMG-second".to_vec()))
            .with(MemoryLocator::new().with_file("b.img", b"IMG-b".to_vec()));

        let uri = chain.resolve("a.img").unwrap();
        assert_eq!(chain.read(&uri).unwrap(), b"IMG-first");
        let uri = chain.resolve("b.img").unwrap();
        assert_eq!(chain.read(&uri).unwrap(), b"IMG-b");
        assert_eq!(chain.resolve("c.img"), None);
    }

    #[test]
    fn empty_chain_reads_nothing() {
        let chain = LocatorChain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.read("mem:x").unwrap_err().kind(), io::ErrorKind::NotFound);
    }
}
