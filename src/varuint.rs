//! The escalating-sentinel variable-length unsigned integer encoding.
//!
//! Every length and count field in the wire format (string byte lengths,
//! array element counts, attribute and child counts) uses this encoding. A
//! value is written in the shortest of four little-endian layouts:
//!
//! | Range | Layout |
//! |---|---|
//! | `v < 255` | 1 byte: the value itself |
//! | `255 <= v < 65535` | `0xFF` + `u16` |
//! | `65535 <= v < 4294967295` | `0xFF 0xFF 0xFF` + `u32` |
//! | `4294967295 <= v` | `0xFF`×7 + `u64` |
//!
//! The sentinel prefixes nest: the decoder reads one byte, and each time the
//! widest value representable at the current tier appears it reads the next
//! wider integer. The 3-sentinel tier is therefore consumed as 1 + 2 bytes
//! and the 7-sentinel tier as 1 + 2 + 4 bytes.
//!
//! Promotion uses a strict `<` test, so a value *equal* to a tier's sentinel
//! threshold (255, 65535, 4294967295) is always encoded at the next tier and
//! can never be mistaken for an escalation marker. Every `u64` round-trips;
//! the exact tier boundaries are pinned down in `tests/varuint_tests.rs`.

use std::io::{Read, Write};

use crate::error::Result;

/// Sentinel threshold of the 1-byte tier.
const TIER1_MAX: u64 = u8::MAX as u64;
/// Sentinel threshold of the 2-byte tier.
const TIER2_MAX: u64 = u16::MAX as u64;
/// Sentinel threshold of the 4-byte tier.
const TIER3_MAX: u64 = u32::MAX as u64;

/// Writes `value` in the shortest sentinel-escalated layout.
pub fn write_varuint<W: Write>(writer: &mut W, value: u64) -> Result<()> {
    if value < TIER1_MAX {
        writer.write_all(&[value as u8])?;
    } else if value < TIER2_MAX {
        writer.write_all(&[0xFF])?;
        writer.write_all(&(value as u16).to_le_bytes())?;
    } else if value < TIER3_MAX {
        writer.write_all(&[0xFF; 3])?;
        writer.write_all(&(value as u32).to_le_bytes())?;
    } else {
        writer.write_all(&[0xFF; 7])?;
        writer.write_all(&value.to_le_bytes())?;
    }
    Ok(())
}

/// Reads a sentinel-escalated unsigned integer.
///
/// Truncation inside the escalation chain surfaces as an `UnexpectedEof`
/// I/O error from the underlying reader.
pub fn read_varuint<R: Read>(reader: &mut R) -> Result<u64> {
    let mut b1 = [0u8; 1];
    reader.read_exact(&mut b1)?;
    let v = u64::from(b1[0]);
    if v != TIER1_MAX {
        return Ok(v);
    }

    let mut b2 = [0u8; 2];
    reader.read_exact(&mut b2)?;
    let v = u64::from(u16::from_le_bytes(b2));
    if v != TIER2_MAX {
        return Ok(v);
    }

    let mut b4 = [0u8; 4];
    reader.read_exact(&mut b4)?;
    let v = u64::from(u32::from_le_bytes(b4));
    if v != TIER3_MAX {
        return Ok(v);
    }

    let mut b8 = [0u8; 8];
    reader.read_exact(&mut b8)?;
    Ok(u64::from_le_bytes(b8))
}

/// Returns the number of bytes `write_varuint` produces for `value`.
pub fn varuint_len(value: u64) -> usize {
    if value < TIER1_MAX {
        1
    } else if value < TIER2_MAX {
        3
    } else if value < TIER3_MAX {
        7
    } else {
        15
    }
}
