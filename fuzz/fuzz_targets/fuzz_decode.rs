#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Header probe and full decode must never panic
    let _ = zenfilters::BmpInfo::from_bytes(data);
    let _ = zenfilters::decode_bmp(data, enough::Unstoppable);
});
