//! Source access abstraction.
//!
//! The builder never touches the filesystem directly; it asks a `Runtime`
//! for the text of each candidate. [`NativeRuntime`] reads from a repository
//! checkout, [`MemoryRuntime`] serves sources held in memory.

mod memory;
mod native;

pub use memory::MemoryRuntime;
pub use native::NativeRuntime;

use std::path::PathBuf;

use crate::FilePath;

/// Result type for runtime operations
pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Errors that can occur while reading a source file
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(String),
}

/// Per-file source reader.
///
/// Reads are synchronous and may fail independently for each file; callers
/// treat a failure as "skip this file". Implementations must be shareable
/// across the builder's worker threads.
pub trait Runtime: Send + Sync + std::fmt::Debug {
    /// Read the text of a repository-relative file.
    fn read_file(&self, path: &FilePath) -> RuntimeResult<String>;
}

impl<R: Runtime + ?Sized> Runtime for &R {
    fn read_file(&self, path: &FilePath) -> RuntimeResult<String> {
        (**self).read_file(path)
    }
}

impl<R: Runtime + ?Sized> Runtime for std::sync::Arc<R> {
    fn read_file(&self, path: &FilePath) -> RuntimeResult<String> {
        (**self).read_file(path)
    }
}
