//! Centralized error handling for the MUG codec.
//!
//! Every fault aborts the whole read or write operation and is surfaced to
//! the caller as a typed [`MugError`]. Nothing is retried or recovered
//! internally, and there is no partial/best-effort decode mode: a stream is
//! either decoded completely or not at all.
//!
//! ## Error Categories
//!
//! - **I/O Errors** ([`MugError::Io`]): stream read/write failures, including
//!   truncated input surfacing as `UnexpectedEof`
//! - **Format Errors** ([`MugError::Format`]): the stream is not a valid MUG
//!   document (wrong magic bytes, malformed UTF-8 in a string field)
//! - **Unsupported Type** ([`MugError::UnsupportedType`]): a type-tag byte
//!   outside the registered range
//! - **Value Shape** ([`MugError::ValueShape`]): write-side only, the caller
//!   supplied a value whose arity or component kind does not match its
//!   declared type tag
//! - **Depth Exceeded** ([`MugError::DepthExceeded`]): the decoder's nesting
//!   limit was hit before the tree bottomed out
//!
//! ## Usage
//!
//! ```rust
//! use mug::MugError;
//! use std::io::Cursor;
//!
//! let mut stream = Cursor::new(b"JUNK".to_vec());
//! match mug::read(&mut stream) {
//!     Ok(root) => println!("read {}", root.name),
//!     Err(MugError::Format(msg)) => eprintln!("not a MUG stream: {msg}"),
//!     Err(e) => eprintln!("decode failed: {e}"),
//! }
//! ```

use std::fmt;
use std::io;
use std::sync::Arc;

/// A specialized `Result` type for MUG codec operations.
pub type Result<T> = std::result::Result<T, MugError>;

/// The master error enum covering all failure domains in the codec.
///
/// I/O errors are wrapped in `Arc` so the error type stays `Clone`, which
/// allows errors to be stored or shared without copying the underlying
/// `io::Error`.
#[derive(Debug, Clone)]
pub enum MugError {
    /// Low-level stream failure.
    ///
    /// Truncated input — the stream ending before a required field's declared
    /// length is satisfied — arrives here as an `UnexpectedEof` error from
    /// the underlying reader.
    Io(Arc<io::Error>),

    /// The stream is not a valid MUG document.
    ///
    /// Raised when the stream does not begin with the `"MUGS"` magic bytes,
    /// or when a string field's payload is not valid UTF-8. Detected before
    /// any further bytes are interpreted; no partial result is returned.
    Format(String),

    /// A type-tag byte falls outside the registered range `[0, 78]`.
    ///
    /// Fatal for the current decode; the codec does not attempt to skip the
    /// attribute and continue, because the tag is the only source of the
    /// value's byte width.
    UnsupportedType(u8),

    /// Write-side only: the supplied value's arity or component kind does
    /// not match the declared type tag (e.g. two components for a scalar
    /// tag, or float components for an integer tag).
    ValueShape(String),

    /// Decoding descended past the configured maximum nesting depth.
    ///
    /// Nesting depth is data-controlled, so a pathological stream could
    /// otherwise drive unbounded recursion. The payload is the limit that
    /// was in force.
    DepthExceeded(usize),
}

impl fmt::Display for MugError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O Error: {e}"),
            Self::Format(s) => write!(f, "Format Error: {s}"),
            Self::UnsupportedType(tag) => {
                write!(f, "Unsupported Type: tag {tag} is outside the registered range [0, 78]")
            }
            Self::ValueShape(s) => write!(f, "Value Shape Error: {s}"),
            Self::DepthExceeded(limit) => {
                write!(f, "Depth Exceeded: document nesting is deeper than the limit of {limit}")
            }
        }
    }
}

impl std::error::Error for MugError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for MugError {
    fn from(err: io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}
