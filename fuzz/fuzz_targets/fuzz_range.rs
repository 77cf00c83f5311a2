#![no_main]
use libfuzzer_sys::fuzz_target;
use readable_compare::{BoundMode, Comparator, NullPolicy};

fn operand(data: &[u8], index: usize) -> Option<i16> {
    let raw = i16::from_le_bytes([data[index * 2], data[index * 2 + 1]]);
    if raw == i16::MIN {
        None
    } else {
        Some(raw)
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }

    let (min, value, max) = (operand(data, 0), operand(data, 1), operand(data, 2));
    let policy = NullPolicy::ALL[usize::from(data[6]) % NullPolicy::ALL.len()];
    let bound = BoundMode::ALL[usize::from(data[7]) % BoundMode::ALL.len()];

    let cmp = Comparator::<i16>::natural(policy);
    let (min, value, max) = (min.as_ref(), value.as_ref(), max.as_ref());
    match (
        cmp.inside(bound, min, value, max),
        cmp.outside(bound, min, value, max),
    ) {
        (Ok(inside), Ok(outside)) => assert_ne!(inside, outside),
        (Err(_), Err(_)) => assert_eq!(policy, NullPolicy::NullThrow),
        _ => panic!("inside and outside disagree on failure"),
    }

    let reversed = cmp.reversed();
    assert_eq!(
        reversed.cmp(min, value).ok(),
        cmp.cmp(value, min).ok(),
    );

    if let (Some(lo), Some(v), Some(hi)) = (min, value, max) {
        if lo <= hi {
            let clamped = cmp.clamp(min, value, max).unwrap();
            assert_eq!(clamped.copied(), Some(*v.clamp(lo, hi)));
        }
    }
});
