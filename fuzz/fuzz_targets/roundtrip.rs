#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let compressed = match cchf::compress(data) {
        Ok(c) => c,
        Err(cchf::CodecError::EmptyInput) if data.is_empty() => return,
        Err(e) => panic!("compress failed on {} bytes: {e}", data.len()),
    };

    let recovered = cchf::decompress(&compressed).unwrap_or_else(|e| {
        panic!(
            "own container unreadable (input {} bytes, container {} bytes): {e}",
            data.len(),
            compressed.len()
        )
    });

    assert_eq!(
        recovered, data,
        "round-trip mismatch: {} bytes in, {} bytes back",
        data.len(),
        recovered.len()
    );

    let info = cchf::frame_info(&compressed).expect("frame_info on own container");
    assert_eq!(info.frame_len(), compressed.len());
});
