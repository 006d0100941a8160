#![no_main]
use libfuzzer_sys::fuzz_target;
use zenppm::*;

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_memory_bytes: Some(64 << 20),
        ..Default::default()
    };
    // If we can decode it, re-encoding as P6 and decoding again must produce identical pixels
    let Ok(decoded) = DecodeRequest::new()
        .with_limits(&limits)
        .decode(data, enough::Unstoppable)
    else {
        return;
    };
    let img = decoded.image();

    let reencoded = encode_ppm(img).expect("a decoded image always encodes");
    let Ok(decoded2) = decode(&reencoded, enough::Unstoppable) else {
        panic!("re-encoded data failed to decode");
    };

    assert!(decoded2.is_complete());
    assert_eq!(img.pixels(), decoded2.image().pixels(), "roundtrip pixel mismatch");
    assert_eq!(img.width(), decoded2.image().width());
    assert_eq!(img.height(), decoded2.image().height());
    assert_eq!(img.max_val(), decoded2.image().max_val());

    // Grayscale keeps geometry and is stable under repetition
    let mut gray = img.clone();
    gray.to_grayscale();
    let mut gray2 = gray.clone();
    gray2.to_grayscale();
    assert_eq!(gray.pixels(), gray2.pixels());
});
