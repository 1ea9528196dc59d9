#![no_main]

use libfuzzer_sys::fuzz_target;
use menutree::input::{decode, MAX_SEQUENCE};

fuzz_target!(|data: &[u8]| {
    // Every read the terminal can hand us decodes to some command
    for chunk in data.chunks(MAX_SEQUENCE) {
        let _ = decode(chunk);
    }
});
