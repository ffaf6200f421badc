//! # MUG
//!
//! A binary codec for the MUG tree-structured document format: a rooted tree
//! of named entities, each carrying an ordered list of typed attributes and
//! an ordered list of child entities.
//!
//! ## Overview
//!
//! The codec is four layers composed bottom-up, with data flowing
//! Tree Codec → Value Codec → VarUint Codec and the Type Registry consulted
//! by both upper layers:
//!
//! *   **VarUint Codec** ([`varuint`]): a minimal-byte unsigned integer
//!     encoding using escalating `0xFF` sentinels, used for every length and
//!     count field. Most lengths are small, so most prefixes are one byte.
//! *   **Type Registry** ([`types`]): the closed table of 79 one-byte type
//!     tags, each mapping to a component kind (u8–u64, i8–i64, f16/f32/f64,
//!     or UTF-8 string) and an arity (1, 2, 3, 4, 9, 16, or a
//!     length-prefixed array).
//! *   **Value Codec** ([`value`]): encodes a single attribute value under
//!     the layout its tag implies — fixed-width little-endian components,
//!     with a VarUint prefix only where the tag does not already fix the
//!     count.
//! *   **Tree Codec** ([`writer`], [`reader`]): the recursive entity record
//!     (name, attributes, children) behind the 4-byte ASCII magic `"MUGS"`.
//!
//! ## Wire Format
//!
//! ```text
//! magic           : 4 bytes, ASCII "MUGS"
//! name            : VarUint length + UTF-8 bytes
//! attribute_count : VarUint
//! attributes[]    : name, type_tag(1 byte), value
//! child_count     : VarUint
//! children[]      : nested entity records, in order
//! ```
//!
//! Little-endian throughout. No version field, checksum, compression or
//! random-access index: compatibility is purely positional.
//!
//! ## Usage
//!
//! ```rust
//! use std::io::Cursor;
//! use mug::{Attribute, AttributeType, Entity};
//!
//! let mut root = Entity::new("foo");
//! let mut child = Entity::new("bar");
//! child.attributes.push(Attribute::new("toto", AttributeType::U8, 1u8.into()));
//! root.children.push(child);
//!
//! let mut buffer = Vec::new();
//! mug::write(&mut buffer, &root)?;
//!
//! let decoded = mug::read(&mut Cursor::new(buffer))?;
//! assert_eq!(decoded, root);
//! # Ok::<(), mug::MugError>(())
//! ```
//!
//! For plain files, [`Mug::save`] and [`Mug::load`] wrap the stream
//! functions with buffered I/O.
//!
//! ## Safety and Error Handling
//!
//! * **No unsafe, no panics:** enforced by crate lints; every failure is a
//!   typed [`MugError`].
//! * **Fail fast:** a bad magic, an unknown type tag or a truncated stream
//!   aborts the whole operation. There is no partial decode.
//! * **Untrusted input:** decode nesting depth is bounded
//!   ([`format::DEFAULT_MAX_DEPTH`], tunable via [`read_with_limit`]), and
//!   wire-declared lengths never translate directly into large allocations.
//! * **Stateless:** the codec keeps nothing between calls and the type
//!   table is immutable, so encode/decode may run freely from any number of
//!   threads on their own streams.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]

pub mod api;
pub mod entity;
pub mod error;
pub mod format;
pub mod inspector;
pub mod reader;
pub mod types;
pub mod value;
pub mod varuint;
pub mod writer;

// --- RE-EXPORTS ---

pub use api::Mug;
pub use entity::{Attribute, Entity};
pub use error::{MugError, Result};
pub use inspector::{DocumentReport, MugInspector};
pub use reader::{read, read_with_limit};
pub use types::{Arity, AttributeType, ComponentKind};
pub use value::Value;
pub use writer::write;

// Half-precision components are held at wire precision; re-exported so
// callers don't need a separate `half` dependency to author F16 values.
pub use half::f16;
