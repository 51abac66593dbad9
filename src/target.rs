use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Opaque writable handle a producer renders into.
///
/// The flow passes the target straight through to the write phase without
/// inspecting it; keeping it alive until the flow returns is the caller's
/// responsibility.
pub struct OutputTarget {
    inner: Box<dyn Write + Send>,
}

impl OutputTarget {
    /// Wraps an arbitrary writer.
    pub fn from_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            inner: Box::new(writer),
        }
    }

    /// Creates (or truncates) a file at `path` and targets it.
    pub fn create(path: &Path) -> io::Result<Self> {
        Ok(Self::from_writer(File::create(path)?))
    }
}

impl std::fmt::Debug for OutputTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputTarget").finish_non_exhaustive()
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
