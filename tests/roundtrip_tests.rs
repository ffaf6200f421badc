//! Round-trip coverage: every type tag, strings, tree shape, and files.

use std::io::Cursor;

use half::f16;
use mug::{Arity, Attribute, AttributeType, ComponentKind, Entity, Mug, MugInspector, Value};
use tempfile::NamedTempFile;

fn roundtrip(root: &Entity) -> Entity {
    let mut buf = Vec::new();
    mug::write(&mut buf, root).expect("encode");
    mug::read(&mut Cursor::new(buf)).expect("decode")
}

/// Writes a single-attribute entity and returns the decoded attribute value.
fn roundtrip_attr(ty: AttributeType, value: Value) -> Value {
    let mut entity = Entity::new("foo");
    entity.attributes.push(Attribute::new("toto", ty, value));
    let decoded = roundtrip(&entity);
    assert_eq!(decoded.attributes.len(), 1);
    let attr = &decoded.attributes[0];
    assert_eq!(attr.name, "toto");
    assert_eq!(attr.ty, ty);
    attr.value.clone()
}

/// A deterministic, exactly-representable value of the given shape.
fn sample_value(kind: ComponentKind, count: usize) -> Value {
    match kind {
        ComponentKind::U8 => Value::U8((0..count).map(|i| 42 + i as u8).collect()),
        ComponentKind::U16 => Value::U16((0..count).map(|i| 4200 + i as u16).collect()),
        ComponentKind::U32 => Value::U32((0..count).map(|i| 420_000 + i as u32).collect()),
        ComponentKind::U64 => Value::U64((0..count).map(|i| 42e15 as u64 + i as u64).collect()),
        ComponentKind::I8 => Value::I8((0..count).map(|i| -42 + i as i8).collect()),
        ComponentKind::I16 => Value::I16((0..count).map(|i| -4200 + i as i16).collect()),
        ComponentKind::I32 => Value::I32((0..count).map(|i| -420_000 + i as i32).collect()),
        ComponentKind::I64 => Value::I64((0..count).map(|i| -(42e15 as i64) + i as i64).collect()),
        ComponentKind::F16 => Value::F16((0..count).map(|i| f16::from_f32(i as f32 * 1.5)).collect()),
        ComponentKind::F32 => Value::F32((0..count).map(|i| i as f32 * 0.25 - 8.0).collect()),
        ComponentKind::F64 => Value::F64((0..count).map(|i| i as f64 * 0.125 - 16.0).collect()),
        ComponentKind::Str => Value::Str((0..count).map(|i| format!("s{i}")).collect()),
    }
}

#[test]
fn every_registered_tag_roundtrips() {
    for ty in AttributeType::ALL {
        let (kind, arity) = ty.layout();
        let count = match arity {
            Arity::Fixed(n) => n,
            Arity::Array => 13,
        };
        let value = sample_value(kind, count);
        let decoded = roundtrip_attr(ty, value.clone());
        assert_eq!(decoded, value, "tag {ty:?}");
    }
}

#[test]
fn u64_high_bit_is_preserved() {
    // Values above i64::MAX must come back unsigned, not reinterpreted.
    for value in [0x8000_0000_0000_0000u64, u64::MAX] {
        let decoded = roundtrip_attr(AttributeType::U64, Value::from(value));
        assert_eq!(decoded, Value::from(value));
    }
}

#[test]
fn signed_extremes_roundtrip() {
    let decoded = roundtrip_attr(AttributeType::I64, Value::from(i64::MIN));
    assert_eq!(decoded, Value::from(i64::MIN));
    let decoded = roundtrip_attr(AttributeType::I8X2, Value::from(vec![i8::MIN, i8::MAX]));
    assert_eq!(decoded, Value::from(vec![i8::MIN, i8::MAX]));
}

#[test]
fn float_roundtrip_within_width_tolerance() {
    // Authoring from a decimal that binary16/32 cannot represent exactly:
    // the decoded value matches within the component width's precision.
    let decoded = roundtrip_attr(AttributeType::F16, Value::from(f16::from_f32(42.42)));
    match decoded {
        Value::F16(v) => assert!((v[0].to_f32() - 42.42).abs() < 0.05),
        other => panic!("expected F16, got {other:?}"),
    }

    let decoded = roundtrip_attr(AttributeType::F32, Value::from(42.42f32));
    match decoded {
        Value::F32(v) => assert!((f64::from(v[0]) - 42.42).abs() < 1e-5),
        other => panic!("expected F32, got {other:?}"),
    }

    let decoded = roundtrip_attr(AttributeType::F64, Value::from(42.42f64));
    assert_eq!(decoded, Value::from(42.42f64));
}

#[test]
fn float_special_values_roundtrip_bit_exactly() {
    let specials = vec![f64::INFINITY, f64::NEG_INFINITY, -0.0, f64::MIN_POSITIVE];
    let decoded = roundtrip_attr(AttributeType::F64Array, Value::from(specials.clone()));
    match decoded {
        Value::F64(v) => {
            for (a, b) in v.iter().zip(&specials) {
                assert_eq!(a.to_bits(), b.to_bits());
            }
        }
        other => panic!("expected F64, got {other:?}"),
    }
}

#[test]
fn strings_roundtrip_exactly() {
    for s in ["", "tata", "héllo wörld", "日本語テキスト", "a\u{10348}b"] {
        let decoded = roundtrip_attr(AttributeType::Str, Value::from(s));
        assert_eq!(decoded.as_str(), Some(s));
    }
}

#[test]
fn string_arrays_roundtrip() {
    let values = vec!["".to_owned(), "one".to_owned(), "três".to_owned()];
    let decoded = roundtrip_attr(AttributeType::StrArray, Value::Str(values.clone()));
    assert_eq!(decoded, Value::Str(values));
}

#[test]
fn empty_arrays_roundtrip() {
    let decoded = roundtrip_attr(AttributeType::StrArray, Value::Str(Vec::new()));
    assert_eq!(decoded, Value::Str(Vec::new()));
    let decoded = roundtrip_attr(AttributeType::U32Array, Value::U32(Vec::new()));
    assert_eq!(decoded, Value::U32(Vec::new()));
}

#[test]
fn large_array_crosses_a_count_tier() {
    // 300 elements puts the VarUint element count into its second tier.
    let values: Vec<u16> = (0..300).collect();
    let decoded = roundtrip_attr(AttributeType::U16Array, Value::from(values.clone()));
    assert_eq!(decoded, Value::from(values));
}

#[test]
fn empty_entity_roundtrips() {
    let decoded = roundtrip(&Entity::new("lonely"));
    assert_eq!(decoded.name, "lonely");
    assert!(decoded.attributes.is_empty());
    assert!(decoded.children.is_empty());
}

#[test]
fn entity_with_empty_name_roundtrips() {
    let decoded = roundtrip(&Entity::new(""));
    assert_eq!(decoded.name, "");
}

#[test]
fn nested_tree_preserves_order_at_every_level() {
    let mut root = Entity::new("root");
    for i in 0..3 {
        let mut child = Entity::new(format!("child{i}"));
        child
            .attributes
            .push(Attribute::new("first", AttributeType::U8, (i as u8).into()));
        child
            .attributes
            .push(Attribute::new("second", AttributeType::Str, "x".into()));
        for j in 0..2 {
            child.children.push(Entity::new(format!("grandchild{i}{j}")));
        }
        root.children.push(child);
    }

    let decoded = roundtrip(&root);
    assert_eq!(decoded, root);
    assert_eq!(decoded.children[1].name, "child1");
    assert_eq!(decoded.children[1].attributes[0].name, "first");
    assert_eq!(decoded.children[1].attributes[1].name, "second");
    assert_eq!(decoded.children[2].children[0].name, "grandchild20");
}

#[test]
fn reference_scenario_foo_bar_toto() {
    let mut root = Entity::new("foo");
    let mut bar = Entity::new("bar");
    bar.attributes
        .push(Attribute::new("toto", AttributeType::U8, 1u8.into()));
    root.children.push(bar);

    let decoded = roundtrip(&root);
    assert_eq!(decoded.name, "foo");
    assert_eq!(decoded.children.len(), 1);
    assert_eq!(decoded.children[0].name, "bar");
    let attr = &decoded.children[0].attributes[0];
    assert_eq!(attr.name, "toto");
    assert_eq!(attr.ty, AttributeType::U8);
    assert_eq!(attr.value, Value::from(1u8));
}

#[test]
fn save_and_load_through_a_file() {
    let mut root = Entity::new("scene");
    let mut mesh = Entity::new("mesh");
    mesh.attributes.push(Attribute::new(
        "positions",
        AttributeType::F32Array,
        Value::from(vec![0.0f32, 1.5, -2.25, 8.0]),
    ));
    mesh.attributes.push(Attribute::new(
        "transform",
        AttributeType::F64X16,
        Value::from((0..16).map(f64::from).collect::<Vec<_>>()),
    ));
    root.children.push(mesh);

    let file = NamedTempFile::new().unwrap();
    Mug::save(file.path(), &root).expect("save");
    let loaded = Mug::load(file.path()).expect("load");
    assert_eq!(loaded, root);

    // The inspector's size accounting matches the bytes on disk.
    let report = MugInspector::inspect(&root);
    let on_disk = std::fs::metadata(file.path()).unwrap().len();
    assert_eq!(report.encoded_size, on_disk);
    assert_eq!(report.entity_count, 2);
    assert_eq!(report.attribute_count, 2);
    assert_eq!(report.max_depth, 1);
}
