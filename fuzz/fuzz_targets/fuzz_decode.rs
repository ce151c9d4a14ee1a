#![no_main]

use libfuzzer_sys::fuzz_target;
use passhash::EncodedHash;

fuzz_target!(|data: &str| {
    // Decoding should never panic, and anything accepted must re-encode
    // to the same string.
    if let Ok(decoded) = EncodedHash::try_from(data) {
        assert_eq!(decoded.to_string(), data);
    }
});
