#![no_main]

use baseconv::{DetectionOutcome, detect_base};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let outcome = detect_base(data);
    if data.trim().is_empty() {
        assert_eq!(outcome, DetectionOutcome::Unknown);
    }
});
