//! Header parsing and generation utilities for encoded hash strings.
//!
//! Encoded hashes follow the format:
//! `$argon2id$v=19$m={memory},t={time},p={lanes}${salt}${key}`
//!
//! This module owns the grammar of the three fixed segments (algorithm,
//! version, parameters). The byte segments are handled by
//! [`EncodedHash`](crate::core::types::EncodedHash).

use crate::core::error::PasshashError;

/// Segment delimiter.
pub const DELIMITER: char = '$';

/// Algorithm identifier.
pub const ALGORITHM_ID: &str = "argon2id";

/// Argon2 version 1.3, the only version produced and accepted.
pub const VERSION: u32 = 0x13;

/// Number of segments after splitting on the delimiter, including the empty
/// leading one.
pub const SEGMENT_COUNT: usize = 6;

/// Validates the algorithm segment.
///
/// # Errors
///
/// Returns `PasshashError::MalformedHash` unless the segment is exactly
/// `argon2id`.
pub fn parse_algorithm(segment: &str) -> Result<(), PasshashError> {
    if segment == ALGORITHM_ID {
        Ok(())
    } else {
        Err(PasshashError::MalformedHash)
    }
}

/// Parses the version segment (`v=19`).
///
/// # Errors
///
/// Returns `PasshashError::MalformedHash` if the segment is not `v=<digits>`
/// or names a version other than 19.
pub fn parse_version(segment: &str) -> Result<u32, PasshashError> {
    let value = segment
        .strip_prefix("v=")
        .and_then(parse_decimal::<u32>)
        .ok_or(PasshashError::MalformedHash)?;

    if value != VERSION {
        return Err(PasshashError::MalformedHash);
    }

    Ok(value)
}

/// Parses the parameter segment into `(memory_cost, time_cost, parallelism)`.
///
/// The segment must be exactly `m=<d>,t=<d>,p=<d>` in that order. This only
/// checks structure; range validation belongs to
/// [`Params::new`](crate::Params::new).
///
/// # Errors
///
/// Returns `PasshashError::MalformedHash` if a field is missing, reordered,
/// non-numeric, or overflows its integer type.
pub fn parse_params(segment: &str) -> Result<(u32, u32, u8), PasshashError> {
    let mut fields = segment.split(',');

    let memory = fields
        .next()
        .and_then(|field| field_value::<u32>(field, "m"))
        .ok_or(PasshashError::MalformedHash)?;
    let time = fields
        .next()
        .and_then(|field| field_value::<u32>(field, "t"))
        .ok_or(PasshashError::MalformedHash)?;
    let lanes = fields
        .next()
        .and_then(|field| field_value::<u8>(field, "p"))
        .ok_or(PasshashError::MalformedHash)?;

    if fields.next().is_some() {
        return Err(PasshashError::MalformedHash);
    }

    Ok((memory, time, lanes))
}

/// Constructs the header prefix up to and including the trailing delimiter
/// (e.g. `$argon2id$v=19$m=65536,t=10,p=2$`).
#[must_use]
pub fn make_header(memory_cost: u32, time_cost: u32, parallelism: u8) -> String {
    format!("${ALGORITHM_ID}$v={VERSION}$m={memory_cost},t={time_cost},p={parallelism}$")
}

fn field_value<T: core::str::FromStr>(field: &str, name: &str) -> Option<T> {
    let (key, value) = field.split_once('=')?;
    if key != name {
        return None;
    }
    parse_decimal(value)
}

/// Parses an unsigned decimal with no sign and no leading zeros.
fn parse_decimal<T: core::str::FromStr>(digits: &str) -> Option<T> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_algorithm() {
        assert!(parse_algorithm("argon2id").is_ok());

        for tag in ["argon2i", "argon2d", "ARGON2ID", "bcrypt", ""] {
            assert!(matches!(
                parse_algorithm(tag),
                Err(PasshashError::MalformedHash)
            ));
        }
    }

    #[test]
    fn test_parse_version_valid() -> Result<(), PasshashError> {
        assert_eq!(parse_version("v=19")?, 19);
        Ok(())
    }

    #[test]
    fn test_parse_version_unsupported() {
        for segment in ["v=16", "v=20", "v=", "v=019", "19", "version=19", "v=+19"] {
            assert!(
                matches!(parse_version(segment), Err(PasshashError::MalformedHash)),
                "{segment} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_params_valid() -> Result<(), PasshashError> {
        assert_eq!(parse_params("m=65536,t=10,p=2")?, (65536, 10, 2));
        assert_eq!(parse_params("m=0,t=0,p=0")?, (0, 0, 0));
        assert_eq!(parse_params("m=4294967295,t=1,p=255")?, (u32::MAX, 1, 255));
        Ok(())
    }

    #[test]
    fn test_parse_params_wrong_order() {
        let result = parse_params("t=10,m=65536,p=2");
        assert!(matches!(result, Err(PasshashError::MalformedHash)));
    }

    #[test]
    fn test_parse_params_missing_field() {
        for segment in ["m=65536,t=10", "m=65536", "", "m=65536,t=10,", "m=,t=10,p=2"] {
            assert!(
                matches!(parse_params(segment), Err(PasshashError::MalformedHash)),
                "{segment:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_params_extra_field() {
        let result = parse_params("m=65536,t=10,p=2,keyid=abc");
        assert!(matches!(result, Err(PasshashError::MalformedHash)));
    }

    #[test]
    fn test_parse_params_non_numeric() {
        for segment in [
            "m=abc,t=10,p=2",
            "m=65536,t=ten,p=2",
            "m=65536,t=10,p=two",
            "m=-1,t=10,p=2",
            "m=+1,t=10,p=2",
            "m= 1,t=10,p=2",
            "m=0065536,t=10,p=2",
        ] {
            assert!(
                matches!(parse_params(segment), Err(PasshashError::MalformedHash)),
                "{segment:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_params_overflow() {
        let result = parse_params("m=4294967296,t=10,p=2");
        assert!(matches!(result, Err(PasshashError::MalformedHash)));

        let result = parse_params("m=65536,t=10,p=256");
        assert!(matches!(result, Err(PasshashError::MalformedHash)));
    }

    #[test]
    fn test_make_header() {
        assert_eq!(make_header(65536, 10, 2), "$argon2id$v=19$m=65536,t=10,p=2$");
        assert_eq!(make_header(1024, 1, 1), "$argon2id$v=19$m=1024,t=1,p=1$");
    }
}
