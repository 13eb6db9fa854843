//! Error types for the Xash renderer plugin
//!
//! This module defines the error type shared by the display pipeline,
//! the texture facade, the 2D drawing helpers and the host loader.

use std::fmt;

/// Result type for renderer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Renderer errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Backend-specific error (OpenGL, mock, etc.)
    BackendError(String),

    /// Invalid resource (unknown texture handle, etc.)
    InvalidResource(String),

    /// Initialization failed (loader, backend)
    InitializationFailed(String),

    /// Requested dimensions are zero or negative
    InvalidDimensions {
        width: i32,
        height: i32,
    },

    /// A GPU object (texture, framebuffer) could not be allocated
    AllocationFailed(String),

    /// Framebuffer completeness query reported something other than complete
    IncompleteFramebuffer(u32),

    /// A dimension exceeds what the graphics API supports.
    ///
    /// Fatal: continuing would corrupt GPU state.
    HardwareLimit {
        what: &'static str,
        size: i32,
        max: i32,
    },

    /// The host asked for an ABI version this plugin does not implement
    VersionMismatch {
        expected: i32,
        got: i32,
    },
}

impl Error {
    /// Returns true when the error must abort the current host operation
    /// instead of being absorbed into a clean inactive state.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::HardwareLimit { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::InvalidDimensions { width, height } => {
                write!(f, "Invalid dimensions: {}x{}", width, height)
            }
            Error::AllocationFailed(msg) => write!(f, "Allocation failed: {}", msg),
            Error::IncompleteFramebuffer(status) => {
                write!(f, "Framebuffer incomplete: status 0x{:04X}", status)
            }
            Error::HardwareLimit { what, size, max } => {
                write!(f, "{}: size {} exceeds hardware limits ({})", what, size, max)
            }
            Error::VersionMismatch { expected, got } => {
                write!(f, "Ref API version mismatch: expected {}, got {}", expected, got)
            }
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an ERROR message (with file:line) and build an `Error::BackendError`
///
/// # Example
///
/// ```no_run
/// use xash_ref::engine_err;
///
/// let err = engine_err!("xref::gl", "Failed to create texture: {}", "out of handles");
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::xref::Engine::log_detailed(
            $crate::xref::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!()
        );
        $crate::xref::Error::BackendError(message)
    }};
}

/// Log an ERROR message (with file:line) and return `Err(Error::BackendError)`
///
/// # Example
///
/// ```no_run
/// use xash_ref::engine_bail;
///
/// fn check(ok: bool) -> xash_ref::xref::Result<()> {
///     if !ok {
///         engine_bail!("xref::gl", "Check failed");
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
