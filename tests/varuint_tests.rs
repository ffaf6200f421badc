//! Wire-level behavior of the sentinel-escalated unsigned integer encoding.

use std::io::Cursor;

use mug::varuint::{read_varuint, varuint_len, write_varuint};

fn roundtrip(value: u64) -> (u64, usize) {
    let mut buf = Vec::new();
    write_varuint(&mut buf, value).expect("encode");
    let len = buf.len();
    let decoded = read_varuint(&mut Cursor::new(buf)).expect("decode");
    (decoded, len)
}

#[test]
fn tier_boundaries_roundtrip_exactly() {
    // Values sitting exactly on the escalation thresholds are the ones a
    // symmetric-looking scheme could get wrong; verify each directly.
    let boundaries: &[u64] = &[
        0,
        254,
        255,
        256,
        65534,
        65535,
        65536,
        4294967294,
        4294967295,
        4294967296,
        u64::MAX,
    ];
    for &value in boundaries {
        let (decoded, _) = roundtrip(value);
        assert_eq!(decoded, value, "boundary value {value}");
    }
}

#[test]
fn encoded_lengths_follow_the_tiers() {
    let cases: &[(u64, usize)] = &[
        (0, 1),
        (254, 1),
        (255, 3),   // promoted: equal to the 1-byte sentinel
        (256, 3),
        (65534, 3),
        (65535, 7), // promoted: equal to the 2-byte sentinel
        (65536, 7),
        (4294967294, 7),
        (4294967295, 15), // promoted: equal to the 4-byte sentinel
        (4294967296, 15),
        (u64::MAX, 15),
    ];
    for &(value, expected) in cases {
        let (decoded, len) = roundtrip(value);
        assert_eq!(decoded, value);
        assert_eq!(len, expected, "encoded length of {value}");
        assert_eq!(varuint_len(value), expected, "varuint_len of {value}");
    }
}

#[test]
fn exact_wire_bytes() {
    let mut buf = Vec::new();
    write_varuint(&mut buf, 7).unwrap();
    assert_eq!(buf, [7]);

    buf.clear();
    write_varuint(&mut buf, 255).unwrap();
    assert_eq!(buf, [0xFF, 0xFF, 0x00]);

    buf.clear();
    write_varuint(&mut buf, 0x1234).unwrap();
    assert_eq!(buf, [0xFF, 0x34, 0x12]);

    buf.clear();
    write_varuint(&mut buf, 65535).unwrap();
    assert_eq!(buf, [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00]);

    buf.clear();
    write_varuint(&mut buf, 4294967295).unwrap();
    assert_eq!(
        buf,
        [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00]
    );
}

#[test]
fn truncated_escalation_chain_is_an_eof() {
    // A lone sentinel byte promises a u16 that never arrives.
    let err = read_varuint(&mut Cursor::new(vec![0xFF])).unwrap_err();
    match err {
        mug::MugError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::UnexpectedEof),
        other => panic!("expected Io error, got {other:?}"),
    }
}
