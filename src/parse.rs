//! Parsing and validation of comma-separated document id lists.

use crate::error::{CompressionError, Result};

/// Parse `"5, 9, 20"` into `[5, 9, 20]`.
///
/// Blank input yields an empty list; whether that is acceptable is up to
/// the caller. Every token must be a plain decimal `u32` (no sign) and the
/// list must be strictly ascending.
pub fn parse_doc_ids(input: &str) -> Result<Vec<u32>> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    let ids = input
        .split(',')
        .map(parse_token)
        .collect::<Result<Vec<u32>>>()?;

    validate_ascending(&ids)?;
    Ok(ids)
}

fn parse_token(raw: &str) -> Result<u32> {
    let token = raw.trim();
    // `u32::from_str` accepts a leading '+', which we don't.
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(token));
    }
    token.parse().map_err(|_| invalid(token))
}

fn invalid(token: &str) -> CompressionError {
    CompressionError::InvalidToken {
        token: token.to_string(),
    }
}

/// Check that ids are sorted and unique.
pub fn validate_ascending(ids: &[u32]) -> Result<()> {
    for (i, pair) in ids.windows(2).enumerate() {
        if pair[1] <= pair[0] {
            return Err(CompressionError::NotAscending {
                index: i + 1,
                previous: pair[0],
                current: pair[1],
            });
        }
    }
    Ok(())
}
