//! Argon2id password hashing with self-describing hash strings.
//!
//! Every hash produced by this crate embeds the algorithm, version, cost
//! parameters, salt and derived key, so it can be verified later without
//! knowing the policy that was in force when it was created.
//!
//! # Quick Start
//!
//! ```rust
//! use passhash::{Argon2idHasher, Params, PasswordHasher};
//!
//! // Light parameters keep the doctest fast; use `Params::default()` in production.
//! let params = Params::new(1, 1024, 1, 32, 16).expect("valid params");
//! let hasher = Argon2idHasher::new(params).expect("params within limits");
//!
//! let stored = hasher.generate(b"correct horse battery staple").expect("generate");
//! assert!(stored.starts_with("$argon2id$v=19$m=1024,t=1,p=1$"));
//!
//! assert!(hasher.verify(b"correct horse battery staple", &stored).expect("verify"));
//! assert!(!hasher.verify(b"wrong password", &stored).expect("verify"));
//! ```
//!
//! # Format
//!
//! ```text
//! $argon2id$v=19$m=<memory KiB>,t=<iterations>,p=<lanes>$<salt>$<key>
//! ```
//!
//! Salt and key are standard base64 without padding, which makes the
//! strings interchangeable with other PHC-format Argon2 implementations.
//!
//! # Security
//!
//! - Verification re-derives with the salt and parameters stored in the hash
//! - Keys are compared in constant time
//! - Derived keys are zeroized on drop and redacted from debug output
//! - Stored hashes claiming costs above [`DecodeLimits`] are refused before
//!   any derivation runs
//! - Salts come from the OS CSPRNG with no fallback
//! - No unsafe code
//!
//! # Features
//!
//! - `prelude` (default) - [`prelude`] module with `HasherBuilder`
//! - `serde` - `Deserialize`/`Serialize` for [`Params`] and [`DecodeLimits`]
//!
//! # Modules
//!
//! - [`core`] - Core types and operations
//! - [`prelude`] - Ergonomic imports (requires `prelude` feature)

pub mod core;

#[cfg(feature = "prelude")]
pub mod prelude;

// Re-export commonly used items at crate root
pub use crate::core::error::{PasshashError, PasshashResult};
pub use crate::core::hasher::{Argon2idHasher, PasswordHasher, VerifyOutcome};
pub use crate::core::params::{DecodeLimits, Params};
pub use crate::core::types::{DerivedKey, EncodedHash, Salt};
