//! Encoding and decoding of a single attribute value.
//!
//! A [`Value`] is a homogeneous run of components of one [`ComponentKind`]:
//! a scalar is a run of length 1, a fixed-arity vector has exactly the
//! component count its tag implies, and an array has any count. The tag is
//! the sole source of layout on the wire:
//!
//! - **Scalar / fixed vector**: the components back to back, little-endian,
//!   no prefix — the count is implied by the tag.
//! - **Array**: a VarUint element count, then the components.
//! - **Strings**: each element is a VarUint byte length followed by the raw
//!   UTF-8 bytes, no terminator; a string array prefixes a VarUint count.
//!
//! [`read_value`] consumes exactly the bytes [`write_value`] produced for
//! the same tag and logical value. Unsigned and signed integers round-trip
//! bit-exactly, including `u64` values with the high bit set. Half-precision
//! floats use [`half::f16`], so they are held at wire precision in memory
//! and also round-trip bit-exactly.

use std::io::{ErrorKind, Read, Write};

use half::f16;

use crate::error::{MugError, Result};
use crate::types::{Arity, AttributeType, ComponentKind};
use crate::varuint::{read_varuint, varuint_len, write_varuint};

/// Upper bound on speculative decode-side preallocation, in elements or
/// bytes. Declared counts come from the stream, so a hostile length must
/// not translate into a huge allocation before any payload has been read;
/// vectors grow organically past this point.
const PREALLOC_LIMIT: usize = 4096;

/// A single attribute value: one homogeneous run of components.
///
/// The runtime shape (component kind and count) must match the arity the
/// attribute's type tag implies; [`write_value`] rejects mismatches with
/// [`MugError::ValueShape`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// Unsigned 8-bit components.
    U8(Vec<u8>),
    /// Unsigned 16-bit components.
    U16(Vec<u16>),
    /// Unsigned 32-bit components.
    U32(Vec<u32>),
    /// Unsigned 64-bit components.
    U64(Vec<u64>),
    /// Signed 8-bit components.
    I8(Vec<i8>),
    /// Signed 16-bit components.
    I16(Vec<i16>),
    /// Signed 32-bit components.
    I32(Vec<i32>),
    /// Signed 64-bit components.
    I64(Vec<i64>),
    /// Half-precision float components.
    F16(Vec<f16>),
    /// Single-precision float components.
    F32(Vec<f32>),
    /// Double-precision float components.
    F64(Vec<f64>),
    /// UTF-8 string components.
    Str(Vec<String>),
}

impl Value {
    /// The component kind of this value.
    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::U8(_) => ComponentKind::U8,
            Self::U16(_) => ComponentKind::U16,
            Self::U32(_) => ComponentKind::U32,
            Self::U64(_) => ComponentKind::U64,
            Self::I8(_) => ComponentKind::I8,
            Self::I16(_) => ComponentKind::I16,
            Self::I32(_) => ComponentKind::I32,
            Self::I64(_) => ComponentKind::I64,
            Self::F16(_) => ComponentKind::F16,
            Self::F32(_) => ComponentKind::F32,
            Self::F64(_) => ComponentKind::F64,
            Self::Str(_) => ComponentKind::Str,
        }
    }

    /// Number of components.
    pub fn len(&self) -> usize {
        match self {
            Self::U8(v) => v.len(),
            Self::U16(v) => v.len(),
            Self::U32(v) => v.len(),
            Self::U64(v) => v.len(),
            Self::I8(v) => v.len(),
            Self::I16(v) => v.len(),
            Self::I32(v) => v.len(),
            Self::I64(v) => v.len(),
            Self::F16(v) => v.len(),
            Self::F32(v) => v.len(),
            Self::F64(v) => v.len(),
            Self::Str(v) => v.len(),
        }
    }

    /// Returns true if the value has no components.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The string content of a scalar string value, if that is what this is.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(v) if v.len() == 1 => Some(&v[0]),
            _ => None,
        }
    }
}

macro_rules! impl_value_from {
    ($($variant:ident: $t:ty),* $(,)?) => {$(
        impl From<$t> for Value {
            fn from(v: $t) -> Self {
                Self::$variant(vec![v])
            }
        }
        impl From<Vec<$t>> for Value {
            fn from(v: Vec<$t>) -> Self {
                Self::$variant(v)
            }
        }
    )*};
}

impl_value_from!(
    U8: u8, U16: u16, U32: u32, U64: u64,
    I8: i8, I16: i16, I32: i32, I64: i64,
    F16: f16, F32: f32, F64: f64, Str: String,
);

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(vec![v.to_owned()])
    }
}

/// Encodes `value` under the layout `ty` implies.
///
/// Fails with [`MugError::ValueShape`] before writing anything if the
/// value's component kind does not match the tag, or if a fixed-arity tag
/// is given the wrong component count.
pub fn write_value<W: Write>(writer: &mut W, ty: AttributeType, value: &Value) -> Result<()> {
    let (kind, arity) = ty.layout();
    if value.kind() != kind {
        return Err(MugError::ValueShape(format!(
            "type {ty:?} carries {kind:?} components, got {:?}",
            value.kind()
        )));
    }
    match arity {
        Arity::Fixed(expected) if value.len() != expected => {
            return Err(MugError::ValueShape(format!(
                "type {ty:?} carries exactly {expected} component(s), got {}",
                value.len()
            )));
        }
        Arity::Fixed(_) => {}
        Arity::Array => write_varuint(writer, value.len() as u64)?,
    }

    match value {
        Value::U8(v) => write_components(writer, v, |x| x.to_le_bytes()),
        Value::U16(v) => write_components(writer, v, |x| x.to_le_bytes()),
        Value::U32(v) => write_components(writer, v, |x| x.to_le_bytes()),
        Value::U64(v) => write_components(writer, v, |x| x.to_le_bytes()),
        Value::I8(v) => write_components(writer, v, |x| x.to_le_bytes()),
        Value::I16(v) => write_components(writer, v, |x| x.to_le_bytes()),
        Value::I32(v) => write_components(writer, v, |x| x.to_le_bytes()),
        Value::I64(v) => write_components(writer, v, |x| x.to_le_bytes()),
        Value::F16(v) => write_components(writer, v, |x| x.to_le_bytes()),
        Value::F32(v) => write_components(writer, v, |x| x.to_le_bytes()),
        Value::F64(v) => write_components(writer, v, |x| x.to_le_bytes()),
        Value::Str(v) => {
            for s in v {
                write_string(writer, s)?;
            }
            Ok(())
        }
    }
}

/// Decodes the value a `ty`-tagged attribute carries.
///
/// Consumes exactly the bytes the corresponding [`write_value`] produced.
/// Truncated input propagates as an `UnexpectedEof` I/O error.
pub fn read_value<R: Read>(reader: &mut R, ty: AttributeType) -> Result<Value> {
    let (kind, arity) = ty.layout();
    let count = match arity {
        Arity::Fixed(n) => n,
        Arity::Array => checked_len(read_varuint(reader)?)?,
    };

    Ok(match kind {
        ComponentKind::U8 => Value::U8(read_components(reader, count, u8::from_le_bytes)?),
        ComponentKind::U16 => Value::U16(read_components(reader, count, u16::from_le_bytes)?),
        ComponentKind::U32 => Value::U32(read_components(reader, count, u32::from_le_bytes)?),
        ComponentKind::U64 => Value::U64(read_components(reader, count, u64::from_le_bytes)?),
        ComponentKind::I8 => Value::I8(read_components(reader, count, i8::from_le_bytes)?),
        ComponentKind::I16 => Value::I16(read_components(reader, count, i16::from_le_bytes)?),
        ComponentKind::I32 => Value::I32(read_components(reader, count, i32::from_le_bytes)?),
        ComponentKind::I64 => Value::I64(read_components(reader, count, i64::from_le_bytes)?),
        ComponentKind::F16 => Value::F16(read_components(reader, count, f16::from_le_bytes)?),
        ComponentKind::F32 => Value::F32(read_components(reader, count, f32::from_le_bytes)?),
        ComponentKind::F64 => Value::F64(read_components(reader, count, f64::from_le_bytes)?),
        ComponentKind::Str => {
            let mut out = Vec::with_capacity(count.min(PREALLOC_LIMIT));
            for _ in 0..count {
                out.push(read_string(reader)?);
            }
            Value::Str(out)
        }
    })
}

/// Number of bytes [`write_value`] produces for `value` under `ty`,
/// assuming the shape already matches the tag.
pub fn value_encoded_len(ty: AttributeType, value: &Value) -> usize {
    let (kind, arity) = ty.layout();
    let prefix = match arity {
        Arity::Array => varuint_len(value.len() as u64),
        Arity::Fixed(_) => 0,
    };
    let body = match value {
        Value::Str(v) => v.iter().map(|s| varuint_len(s.len() as u64) + s.len()).sum(),
        _ => value.len() * kind.width(),
    };
    prefix + body
}

/// Writes a scalar-string encoding: VarUint byte length + UTF-8 bytes,
/// no terminator. Also used by the tree codec for entity/attribute names.
pub fn write_string<W: Write>(writer: &mut W, value: &str) -> Result<()> {
    write_varuint(writer, value.len() as u64)?;
    writer.write_all(value.as_bytes())?;
    Ok(())
}

/// Reads a scalar-string encoding.
///
/// Fails with [`MugError::Format`] if the payload is not valid UTF-8, and
/// with `UnexpectedEof` if the stream ends before the declared length.
pub fn read_string<R: Read>(reader: &mut R) -> Result<String> {
    let declared = read_varuint(reader)?;
    let len = checked_len(declared)?;
    let mut bytes = Vec::with_capacity(len.min(PREALLOC_LIMIT));
    let read = reader.by_ref().take(declared).read_to_end(&mut bytes)?;
    if read < len {
        return Err(std::io::Error::new(
            ErrorKind::UnexpectedEof,
            format!("string body ends after {read} of {len} bytes"),
        )
        .into());
    }
    String::from_utf8(bytes)
        .map_err(|e| MugError::Format(format!("string field is not valid UTF-8: {e}")))
}

/// Narrows a wire-declared length to `usize`.
fn checked_len(declared: u64) -> Result<usize> {
    usize::try_from(declared).map_err(|_| {
        MugError::Format(format!("declared length {declared} exceeds addressable memory"))
    })
}

fn write_components<W, T, const N: usize>(
    writer: &mut W,
    items: &[T],
    encode: impl Fn(&T) -> [u8; N],
) -> Result<()>
where
    W: Write,
{
    for item in items {
        writer.write_all(&encode(item))?;
    }
    Ok(())
}

fn read_components<R, T, const N: usize>(
    reader: &mut R,
    count: usize,
    decode: impl Fn([u8; N]) -> T,
) -> Result<Vec<T>>
where
    R: Read,
{
    let mut out = Vec::with_capacity(count.min(PREALLOC_LIMIT));
    let mut buf = [0u8; N];
    for _ in 0..count {
        reader.read_exact(&mut buf)?;
        out.push(decode(buf));
    }
    Ok(out)
}
