#![no_main]

use libfuzzer_sys::fuzz_target;
use passhash::{Argon2idHasher, DecodeLimits, Params, PasswordHasher};

fuzz_target!(|input: (&[u8], &str)| {
    let (password, hash) = input;

    // Tight limits keep each iteration cheap.
    let limits = DecodeLimits {
        max_time_cost: 2,
        max_memory_cost: 1024,
        max_parallelism: 4,
        max_key_length: 64,
        max_salt_length: 64,
    };
    let Ok(params) = Params::new(1, 64, 1, 32, 16) else {
        return;
    };
    let Ok(hasher) = Argon2idHasher::with_limits(params, limits) else {
        return;
    };

    // Should never panic
    let _ = hasher.verify(password, hash);
});
