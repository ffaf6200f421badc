//! Serialization of a document tree onto a byte stream.

use std::io::Write;

use crate::entity::Entity;
use crate::error::Result;
use crate::format::MAGIC_BYTES;
use crate::value::{write_string, write_value};
use crate::varuint::write_varuint;

/// Serializes `root` and its whole subtree to `writer`.
///
/// Writes the `"MUGS"` magic followed by the root entity record. Fails only
/// if the stream write fails or an attribute's value does not match the
/// shape its declared type tag implies
/// ([`MugError::ValueShape`](crate::MugError::ValueShape)).
///
/// The codec holds no state between calls; the stream is not flushed here,
/// so callers writing through a buffered writer flush it themselves.
///
/// ```rust
/// use mug::{Attribute, AttributeType, Entity};
///
/// let mut root = Entity::new("foo");
/// root.attributes.push(Attribute::new("toto", AttributeType::U8, 1u8.into()));
///
/// let mut buffer = Vec::new();
/// mug::write(&mut buffer, &root)?;
/// assert_eq!(&buffer[0..4], b"MUGS");
/// # Ok::<(), mug::MugError>(())
/// ```
pub fn write<W: Write>(writer: &mut W, root: &Entity) -> Result<()> {
    writer.write_all(&MAGIC_BYTES)?;
    write_entity(writer, root)
}

/// Writes one entity record: name, attributes, then children, recursively.
///
/// Encode-side recursion depth mirrors the shape of a tree the caller
/// already materialized, so unlike the decode side it carries no explicit
/// bound.
fn write_entity<W: Write>(writer: &mut W, entity: &Entity) -> Result<()> {
    write_string(writer, &entity.name)?;

    write_varuint(writer, entity.attributes.len() as u64)?;
    for attribute in &entity.attributes {
        write_string(writer, &attribute.name)?;
        writer.write_all(&[attribute.ty as u8])?;
        write_value(writer, attribute.ty, &attribute.value)?;
    }

    write_varuint(writer, entity.children.len() as u64)?;
    for child in &entity.children {
        write_entity(writer, child)?;
    }

    Ok(())
}
