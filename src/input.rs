//! Reference-string parsing and frame-count validation.
//!
//! The reader collaborator: turns user text into a well-formed access
//! sequence so the core can assume valid input. Error messages carry the
//! 1-based token position so a front end can point at the offending entry.

use crate::error::ConfigError;

/// Maximum number of entries accepted in one reference string.
pub const MAX_REFERENCE_LEN: usize = 2000;

/// Inclusive frame-count bounds accepted from user input.
pub const MIN_FRAMES: usize = 1;
pub const MAX_FRAMES: usize = 100;

/// Parses a reference string of non-negative integers separated by commas
/// and/or whitespace.
///
/// # Errors
///
/// Returns [`ConfigError`] if the string is empty, longer than
/// [`MAX_REFERENCE_LEN`], or contains a token that is not a plain
/// non-negative integer.
///
/// # Example
///
/// ```
/// use framesim::input::parse_reference_string;
///
/// let ids = parse_reference_string("1, 2 3,4").unwrap();
/// assert_eq!(ids, vec![1, 2, 3, 4]);
///
/// assert!(parse_reference_string("1 two 3").is_err());
/// ```
pub fn parse_reference_string(s: &str) -> Result<Vec<u64>, ConfigError> {
    let tokens: Vec<&str> = s
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.is_empty() {
        return Err(ConfigError::new(
            "reference string is empty; enter item numbers separated by spaces or commas",
        ));
    }
    if tokens.len() > MAX_REFERENCE_LEN {
        return Err(ConfigError::new(format!(
            "reference string too long ({} entries); maximum is {}",
            tokens.len(),
            MAX_REFERENCE_LEN
        )));
    }

    let mut ids = Vec::with_capacity(tokens.len());
    for (pos, token) in tokens.iter().enumerate() {
        // Digits only: rejects signs, so "-1" and "+3" are both invalid.
        if !token.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConfigError::new(format!(
                "invalid token '{}' at position {}; use only non-negative integers",
                token,
                pos + 1
            )));
        }
        let id = token.parse::<u64>().map_err(|_| {
            ConfigError::new(format!(
                "number '{}' at position {} is out of range",
                token,
                pos + 1
            ))
        })?;
        ids.push(id);
    }

    Ok(ids)
}

/// Validates a frame count against [`MIN_FRAMES`]..=[`MAX_FRAMES`].
///
/// # Errors
///
/// Returns [`ConfigError`] if `n` is outside the accepted range.
pub fn validate_frame_count(n: usize) -> Result<usize, ConfigError> {
    if !(MIN_FRAMES..=MAX_FRAMES).contains(&n) {
        return Err(ConfigError::new(format!(
            "frame count must be between {} and {}",
            MIN_FRAMES, MAX_FRAMES
        )));
    }
    Ok(n)
}
