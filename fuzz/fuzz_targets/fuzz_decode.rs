#![no_main]
use libfuzzer_sys::fuzz_target;
use zenppm::{DecodeRequest, Limits, Strictness};

fuzz_target!(|data: &[u8]| {
    // Headers can claim huge images; keep allocations bounded.
    let limits = Limits {
        max_memory_bytes: Some(64 << 20),
        ..Default::default()
    };

    // Both modes must never panic
    for strictness in [Strictness::Lenient, Strictness::Strict] {
        let _ = DecodeRequest::new()
            .with_limits(&limits)
            .with_strictness(strictness)
            .decode(data, enough::Unstoppable);
    }
    let _ = zenppm::ImageInfo::from_bytes(data);
});
