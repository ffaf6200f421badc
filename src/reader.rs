//! Deserialization of a document tree from a byte stream.

use std::io::Read;

use crate::entity::{Attribute, Entity};
use crate::error::{MugError, Result};
use crate::format::{DEFAULT_MAX_DEPTH, MAGIC_BYTES};
use crate::types::AttributeType;
use crate::value::{read_string, read_value};
use crate::varuint::read_varuint;

/// Deserializes a document and returns its root entity.
///
/// Equivalent to [`read_with_limit`] with
/// [`DEFAULT_MAX_DEPTH`](crate::format::DEFAULT_MAX_DEPTH).
///
/// ```rust
/// use std::io::Cursor;
/// use mug::Entity;
///
/// let mut buffer = Vec::new();
/// mug::write(&mut buffer, &Entity::new("foo"))?;
///
/// let root = mug::read(&mut Cursor::new(buffer))?;
/// assert_eq!(root.name, "foo");
/// # Ok::<(), mug::MugError>(())
/// ```
pub fn read<R: Read>(reader: &mut R) -> Result<Entity> {
    read_with_limit(reader, DEFAULT_MAX_DEPTH)
}

/// Deserializes a document, rejecting nesting deeper than `max_depth`.
///
/// The first 4 bytes must equal the `"MUGS"` magic; on mismatch this fails
/// with [`MugError::Format`] before interpreting any further bytes — no
/// partial recovery, no scan-forward. The whole tree is materialized in
/// memory before returning; decoding is driven purely by the counts
/// embedded in the stream.
///
/// Fails with [`MugError::UnsupportedType`] on an out-of-range type tag,
/// with an `UnexpectedEof` I/O error on truncation, and with
/// [`MugError::DepthExceeded`] when a record sits `max_depth` or more
/// levels below the root.
pub fn read_with_limit<R: Read>(reader: &mut R, max_depth: usize) -> Result<Entity> {
    let mut magic = [0u8; 4];
    reader.read_exact(&mut magic)?;
    if magic != MAGIC_BYTES {
        return Err(MugError::Format(format!(
            "invalid magic bytes {magic:02X?}, expected \"MUGS\""
        )));
    }
    read_entity(reader, max_depth, 0)
}

/// Reads one entity record. `depth` is the current distance from the root.
fn read_entity<R: Read>(reader: &mut R, max_depth: usize, depth: usize) -> Result<Entity> {
    if depth >= max_depth {
        return Err(MugError::DepthExceeded(max_depth));
    }

    let mut entity = Entity::new(read_string(reader)?);

    let attribute_count = read_varuint(reader)?;
    for _ in 0..attribute_count {
        let name = read_string(reader)?;
        let ty = read_type_tag(reader)?;
        let value = read_value(reader, ty)?;
        entity.attributes.push(Attribute::new(name, ty, value));
    }

    let child_count = read_varuint(reader)?;
    for _ in 0..child_count {
        entity.children.push(read_entity(reader, max_depth, depth + 1)?);
    }

    Ok(entity)
}

/// Reads and validates one type-tag byte.
///
/// An out-of-range tag is rejected here, before any value bytes for the
/// attribute are consumed.
fn read_type_tag<R: Read>(reader: &mut R) -> Result<AttributeType> {
    let mut tag = [0u8; 1];
    reader.read_exact(&mut tag)?;
    AttributeType::from_u8(tag[0])
}
