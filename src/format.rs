//! Physical layout constants of the MUG wire format.
//!
//! A document is the 4-byte magic followed by one recursive entity record
//! (little-endian throughout):
//!
//! ```text
//! magic           : 4 bytes, ASCII "MUGS"
//! name            : scalar-string (VarUint length + UTF-8 bytes)
//! attribute_count : VarUint
//! attributes[]    : name(scalar-string), type_tag(1 byte), value
//! child_count     : VarUint
//! children[]      : nested entity records, same layout, in order
//! ```
//!
//! There is no version field, checksum or compression layer; compatibility
//! is purely positional.

/// Magic bytes identifying the file format: "MUGS".
pub const MAGIC_BYTES: [u8; 4] = *b"MUGS";

/// Default maximum entity nesting depth accepted by the decoder.
///
/// The wire format itself places no bound on nesting, so the depth of the
/// decode recursion is data-controlled. The decoder rejects anything deeper
/// than this with [`MugError::DepthExceeded`](crate::MugError::DepthExceeded)
/// instead of risking stack exhaustion; [`read_with_limit`](crate::read_with_limit)
/// exposes the knob.
pub const DEFAULT_MAX_DEPTH: usize = 256;
