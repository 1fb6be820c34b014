#![no_main]
use libfuzzer_sys::fuzz_target;
use zenfilters::*;

fuzz_target!(|data: &[u8]| {
    // Anything that decodes must re-encode and decode to identical pixels
    let Ok(decoded) = decode_bmp(data, enough::Unstoppable) else {
        return;
    };

    let reencoded = encode_bmp(&decoded, enough::Unstoppable).expect("re-encode failed");
    let Ok(decoded2) = decode_bmp(&reencoded, enough::Unstoppable) else {
        panic!("re-encoded data failed to decode");
    };

    assert_eq!(decoded.dimensions(), decoded2.dimensions());
    assert_eq!(decoded.pixels(), decoded2.pixels(), "roundtrip pixel mismatch");
});
