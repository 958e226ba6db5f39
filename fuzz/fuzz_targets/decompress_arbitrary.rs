#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Errors are expected; panics are not.
    if let Ok(out) = cchf::decompress(data) {
        let declared = u32::from_le_bytes([data[4], data[5], data[6], data[7]]);
        assert_eq!(out.len(), declared as usize);
    }

    // Header inspection must agree with the full decoder on what is readable.
    if cchf::frame_info(data).is_err() {
        assert!(cchf::decompress(data).is_err());
    }
});
