#![no_main]
use libfuzzer_sys::fuzz_target;
use readable_compare::{BoundMode, NullPolicy, Operator};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(op) = s.parse::<Operator>() {
            assert!(s == op.symbol() || s == op.name());
        }
        if let Ok(policy) = s.parse::<NullPolicy>() {
            assert_eq!(s, policy.name());
        }
        if let Ok(bound) = s.parse::<BoundMode>() {
            assert_eq!(s, bound.name());
        }
    }
});
