//! The type registry: the closed table of 79 attribute type tags.
//!
//! Each one-byte tag selects a component kind (one of eleven numeric kinds
//! or UTF-8 string) and an arity (a fixed component count of 1, 2, 3, 4, 9
//! or 16, or a length-prefixed array). The tag space is laid out in blocks:
//!
//! | Tags | Meaning |
//! |---|---|
//! | 0–11 | scalars: the eleven numeric kinds plus string |
//! | 12–22 | 2-component vectors of the eleven numeric kinds |
//! | 23–33 | 3-component vectors |
//! | 34–44 | 4-component vectors |
//! | 45–55 | 9-component vectors |
//! | 56–66 | 16-component vectors |
//! | 67–78 | arrays: the eleven numeric kinds plus string |
//!
//! String components exist only at arity 1 (scalar string, tag 11) and as
//! an array of strings (tag 78); there are no string vectors. The table is
//! immutable process-wide data with no extension hook: any tag byte of 79
//! or above is rejected with [`MugError::UnsupportedType`].

use crate::error::{MugError, Result};

/// The scalar category of a value's components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComponentKind {
    /// Unsigned 8-bit integer.
    U8,
    /// Unsigned 16-bit integer.
    U16,
    /// Unsigned 32-bit integer.
    U32,
    /// Unsigned 64-bit integer.
    U64,
    /// Signed 8-bit integer (two's complement).
    I8,
    /// Signed 16-bit integer (two's complement).
    I16,
    /// Signed 32-bit integer (two's complement).
    I32,
    /// Signed 64-bit integer (two's complement).
    I64,
    /// IEEE-754 binary16 float.
    F16,
    /// IEEE-754 binary32 float.
    F32,
    /// IEEE-754 binary64 float.
    F64,
    /// UTF-8 string, length-prefixed on the wire.
    Str,
}

impl ComponentKind {
    /// Fixed on-wire byte width of one component.
    ///
    /// Strings return 0: their elements are self-delimiting (each carries
    /// its own VarUint length prefix) rather than fixed-width.
    pub fn width(self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 | Self::F16 => 2,
            Self::U32 | Self::I32 | Self::F32 => 4,
            Self::U64 | Self::I64 | Self::F64 => 8,
            Self::Str => 0,
        }
    }
}

/// Number of components in a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Arity {
    /// Exactly this many components, implied by the tag and never re-encoded
    /// on the wire. One of 1, 2, 3, 4, 9 or 16.
    Fixed(usize),
    /// Any number of components, preceded by a VarUint element count.
    Array,
}

/// A one-byte attribute type tag.
///
/// The discriminants are the wire values; the set is closed and exhaustive
/// over `[0, 78]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
#[allow(missing_docs)] // The block layout is documented at module level.
pub enum AttributeType {
    // 1 component
    U8 = 0,
    U16 = 1,
    U32 = 2,
    U64 = 3,
    I8 = 4,
    I16 = 5,
    I32 = 6,
    I64 = 7,
    F16 = 8,
    F32 = 9,
    F64 = 10,
    Str = 11,

    // 2 components
    U8X2 = 12,
    U16X2 = 13,
    U32X2 = 14,
    U64X2 = 15,
    I8X2 = 16,
    I16X2 = 17,
    I32X2 = 18,
    I64X2 = 19,
    F16X2 = 20,
    F32X2 = 21,
    F64X2 = 22,

    // 3 components
    U8X3 = 23,
    U16X3 = 24,
    U32X3 = 25,
    U64X3 = 26,
    I8X3 = 27,
    I16X3 = 28,
    I32X3 = 29,
    I64X3 = 30,
    F16X3 = 31,
    F32X3 = 32,
    F64X3 = 33,

    // 4 components
    U8X4 = 34,
    U16X4 = 35,
    U32X4 = 36,
    U64X4 = 37,
    I8X4 = 38,
    I16X4 = 39,
    I32X4 = 40,
    I64X4 = 41,
    F16X4 = 42,
    F32X4 = 43,
    F64X4 = 44,

    // 9 components
    U8X9 = 45,
    U16X9 = 46,
    U32X9 = 47,
    U64X9 = 48,
    I8X9 = 49,
    I16X9 = 50,
    I32X9 = 51,
    I64X9 = 52,
    F16X9 = 53,
    F32X9 = 54,
    F64X9 = 55,

    // 16 components
    U8X16 = 56,
    U16X16 = 57,
    U32X16 = 58,
    U64X16 = 59,
    I8X16 = 60,
    I16X16 = 61,
    I32X16 = 62,
    I64X16 = 63,
    F16X16 = 64,
    F32X16 = 65,
    F64X16 = 66,

    // N components
    U8Array = 67,
    U16Array = 68,
    U32Array = 69,
    U64Array = 70,
    I8Array = 71,
    I16Array = 72,
    I32Array = 73,
    I64Array = 74,
    F16Array = 75,
    F32Array = 76,
    F64Array = 77,
    StrArray = 78,
}

/// The eleven numeric kinds in tag order, shared by every vector block.
const NUMERIC_KINDS: [ComponentKind; 11] = [
    ComponentKind::U8,
    ComponentKind::U16,
    ComponentKind::U32,
    ComponentKind::U64,
    ComponentKind::I8,
    ComponentKind::I16,
    ComponentKind::I32,
    ComponentKind::I64,
    ComponentKind::F16,
    ComponentKind::F32,
    ComponentKind::F64,
];

/// The twelve kinds of the scalar and array blocks (numeric plus string).
const KINDS_WITH_STR: [ComponentKind; 12] = [
    ComponentKind::U8,
    ComponentKind::U16,
    ComponentKind::U32,
    ComponentKind::U64,
    ComponentKind::I8,
    ComponentKind::I16,
    ComponentKind::I32,
    ComponentKind::I64,
    ComponentKind::F16,
    ComponentKind::F32,
    ComponentKind::F64,
    ComponentKind::Str,
];

/// Fixed arities of the five vector blocks, in tag order.
const VECTOR_ARITIES: [usize; 5] = [2, 3, 4, 9, 16];

impl AttributeType {
    /// Total number of registered tags.
    pub const COUNT: usize = 79;

    /// Every tag in wire order; `ALL[tag]` is the tag with that discriminant.
    pub const ALL: [AttributeType; Self::COUNT] = [
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::F16,
        Self::F32,
        Self::F64,
        Self::Str,
        Self::U8X2,
        Self::U16X2,
        Self::U32X2,
        Self::U64X2,
        Self::I8X2,
        Self::I16X2,
        Self::I32X2,
        Self::I64X2,
        Self::F16X2,
        Self::F32X2,
        Self::F64X2,
        Self::U8X3,
        Self::U16X3,
        Self::U32X3,
        Self::U64X3,
        Self::I8X3,
        Self::I16X3,
        Self::I32X3,
        Self::I64X3,
        Self::F16X3,
        Self::F32X3,
        Self::F64X3,
        Self::U8X4,
        Self::U16X4,
        Self::U32X4,
        Self::U64X4,
        Self::I8X4,
        Self::I16X4,
        Self::I32X4,
        Self::I64X4,
        Self::F16X4,
        Self::F32X4,
        Self::F64X4,
        Self::U8X9,
        Self::U16X9,
        Self::U32X9,
        Self::U64X9,
        Self::I8X9,
        Self::I16X9,
        Self::I32X9,
        Self::I64X9,
        Self::F16X9,
        Self::F32X9,
        Self::F64X9,
        Self::U8X16,
        Self::U16X16,
        Self::U32X16,
        Self::U64X16,
        Self::I8X16,
        Self::I16X16,
        Self::I32X16,
        Self::I64X16,
        Self::F16X16,
        Self::F32X16,
        Self::F64X16,
        Self::U8Array,
        Self::U16Array,
        Self::U32Array,
        Self::U64Array,
        Self::I8Array,
        Self::I16Array,
        Self::I32Array,
        Self::I64Array,
        Self::F16Array,
        Self::F32Array,
        Self::F64Array,
        Self::StrArray,
    ];

    /// Looks up a raw tag byte, rejecting anything outside `[0, 78]`.
    pub fn from_u8(tag: u8) -> Result<Self> {
        Self::ALL
            .get(usize::from(tag))
            .copied()
            .ok_or(MugError::UnsupportedType(tag))
    }

    /// The registry lookup: the component kind and arity this tag implies.
    ///
    /// Computed from the block structure of the tag space rather than a
    /// 79-arm dispatch; the blocks are pinned down exhaustively in tests.
    pub fn layout(self) -> (ComponentKind, Arity) {
        let tag = self as u8;
        match tag {
            0..=11 => (KINDS_WITH_STR[usize::from(tag)], Arity::Fixed(1)),
            12..=66 => {
                let index = usize::from(tag - 12);
                let kind = NUMERIC_KINDS[index % NUMERIC_KINDS.len()];
                (kind, Arity::Fixed(VECTOR_ARITIES[index / NUMERIC_KINDS.len()]))
            }
            _ => (KINDS_WITH_STR[usize::from(tag - 67)], Arity::Array),
        }
    }

    /// The component kind this tag implies.
    pub fn kind(self) -> ComponentKind {
        self.layout().0
    }

    /// The arity this tag implies.
    pub fn arity(self) -> Arity {
        self.layout().1
    }
}
