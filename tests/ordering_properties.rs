//! Property tests: byte order of encoded keys matches value order.

use lexkey::encoding::scalar::{
    encode_f32, encode_f64, encode_i16, encode_i32, encode_i64, encode_u16, encode_u32,
    encode_u64,
};
use lexkey::{lexkey, LexKey, Part};
use proptest::prelude::*;

proptest! {
    #[test]
    fn i16_order_preserved(a in any::<i16>(), b in any::<i16>()) {
        prop_assert_eq!(a.cmp(&b), encode_i16(a).cmp(&encode_i16(b)));
    }

    #[test]
    fn i32_order_preserved(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(a.cmp(&b), encode_i32(a).cmp(&encode_i32(b)));
    }

    #[test]
    fn i64_order_preserved(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(a.cmp(&b), encode_i64(a).cmp(&encode_i64(b)));
    }

    #[test]
    fn unsigned_order_preserved(a in any::<u64>(), b in any::<u64>()) {
        prop_assert_eq!(a.cmp(&b), encode_u64(a).cmp(&encode_u64(b)));
        let (a32, b32) = (a as u32, b as u32);
        prop_assert_eq!(a32.cmp(&b32), encode_u32(a32).cmp(&encode_u32(b32)));
        let (a16, b16) = (a as u16, b as u16);
        prop_assert_eq!(a16.cmp(&b16), encode_u16(a16).cmp(&encode_u16(b16)));
    }

    #[test]
    fn f64_order_preserved(
        a in any::<f64>().prop_filter("not NaN", |f| !f.is_nan()),
        b in any::<f64>().prop_filter("not NaN", |f| !f.is_nan()),
    ) {
        let expected = a.partial_cmp(&b).unwrap();
        prop_assert_eq!(expected, encode_f64(a).cmp(&encode_f64(b)));
    }

    #[test]
    fn f32_order_preserved(
        a in any::<f32>().prop_filter("not NaN", |f| !f.is_nan()),
        b in any::<f32>().prop_filter("not NaN", |f| !f.is_nan()),
    ) {
        let expected = a.partial_cmp(&b).unwrap();
        prop_assert_eq!(expected, encode_f32(a).cmp(&encode_f32(b)));
    }

    #[test]
    fn nan_sorts_last(v in any::<f64>().prop_filter("not NaN", |f| !f.is_nan())) {
        prop_assert!(encode_f64(v) < encode_f64(f64::NAN));
        let narrow = v as f32;
        if !narrow.is_nan() {
            prop_assert!(encode_f32(narrow) < encode_f32(f32::NAN));
        }
    }

    #[test]
    fn tuple_order_preserved(
        a in ("[a-z]{0,8}", any::<i64>(), any::<bool>()),
        b in ("[a-z]{0,8}", any::<i64>(), any::<bool>()),
    ) {
        let key_a = lexkey!(a.0.as_str(), a.1, a.2).unwrap();
        let key_b = lexkey!(b.0.as_str(), b.1, b.2).unwrap();
        prop_assert_eq!(a.cmp(&b), key_a.cmp(&key_b));
    }

    #[test]
    fn encoding_is_deterministic(text in ".*", n in any::<i32>(), f in any::<f64>()) {
        let parts = [Part::from(text.as_str()), Part::I32(n), Part::F64(f)];
        prop_assert_eq!(LexKey::new(&parts).unwrap(), LexKey::new(&parts).unwrap());
    }
}

#[test]
fn bool_order_exhaustive() {
    let f = lexkey!(false).unwrap();
    let t = lexkey!(true).unwrap();
    assert_eq!(f.as_bytes(), &[0x00]);
    assert_eq!(t.as_bytes(), &[0x01]);
    assert!(f < t);
    assert_eq!(f, lexkey!(false).unwrap());
    assert_eq!(t, lexkey!(true).unwrap());
}

#[test]
fn int64_sweep_is_sorted() {
    let values = [
        i64::MIN,
        -1_000_000_000_000,
        -1_000_000,
        -1,
        0,
        1,
        1_000_000,
        1_000_000_000_000,
        i64::MAX,
    ];
    let keys: Vec<LexKey> = values.iter().map(|&v| lexkey!(v).unwrap()).collect();
    for (i, pair) in keys.windows(2).enumerate() {
        assert!(
            pair[0] < pair[1],
            "{} vs {} not sorted",
            values[i],
            values[i + 1]
        );
    }
}

#[test]
fn full_range_sweeps_are_sorted() {
    let step = (u64::MAX / 4096) as i64;
    let mut prev = encode_i64(i64::MIN);
    let mut v = i64::MIN;
    while let Some(next) = v.checked_add(step) {
        let encoded = encode_i64(next);
        assert!(prev < encoded, "{} vs {}", v, next);
        prev = encoded;
        v = next;
    }

    let mut prev = encode_i16(i16::MIN);
    for v in (i16::MIN + 1)..=i16::MAX {
        let encoded = encode_i16(v);
        assert!(prev < encoded, "i16 {}", v);
        prev = encoded;
    }
}

#[test]
fn float_sweep_includes_special_values() {
    let values = [
        f64::NEG_INFINITY,
        f64::MIN,
        -1e300,
        -3.14,
        -f64::MIN_POSITIVE,
        -5e-324,
        0.0,
        5e-324,
        f64::MIN_POSITIVE,
        3.14,
        1e300,
        f64::MAX,
        f64::INFINITY,
        f64::NAN,
    ];
    for pair in values.windows(2) {
        assert!(
            lexkey!(pair[0]).unwrap() < lexkey!(pair[1]).unwrap(),
            "{} vs {}",
            pair[0],
            pair[1]
        );
    }
    assert_eq!(lexkey!(-0.0f64).unwrap(), lexkey!(0.0f64).unwrap());
}

/// Encodings of different widths differ in length, so mixed-width byte order
/// is not numeric order in general. Some pairs still happen to line up.
#[test]
fn int32_vs_int64_cross_pairs() {
    let values = [
        Part::I32(i32::MIN),
        Part::I32(-100_000),
        Part::I64(-1),
        Part::I32(0),
        Part::I64(1),
        Part::I32(100_000),
        Part::I64(i64::MAX),
    ];
    let keys: Vec<LexKey> = values
        .iter()
        .map(|part| LexKey::new(std::slice::from_ref(part)).unwrap())
        .collect();
    for (i, pair) in keys.windows(2).enumerate() {
        assert!(
            pair[0] < pair[1],
            "{:?} vs {:?} not sorted",
            values[i],
            values[i + 1]
        );
    }

    // -1 as 32 bits is 7fffffff, a smaller byte string than 7ffffffffffffffe.
    let narrow = lexkey!(-1i32).unwrap();
    let wide = lexkey!(-2i64).unwrap();
    assert_eq!(narrow.to_hex(), "7fffffff");
    assert_eq!(wide.to_hex(), "7ffffffffffffffe");
    assert!(narrow < wide);
}

#[test]
fn tuple_boundaries() {
    let a = lexkey!("foo", 41i64, true).unwrap();
    let b = lexkey!("foo", 42i64, true).unwrap();
    let c = lexkey!("fop").unwrap();
    assert!(a < b && b < c);
}
