//! Gap (delta) encoding of sorted document identifiers.
//!
//! A posting list `[5, 9, 20]` is stored as `[5, 4, 11]`: the first id
//! verbatim, then the distance to each predecessor. Dense lists turn into
//! runs of small numbers, which is what the variable-byte layer exploits.

use crate::error::{CompressionError, Result};

/// Turn a strictly ascending id list into its gap sequence.
///
/// Ordering is the caller's responsibility and is not checked here. On
/// out-of-order input the subtraction wraps instead of panicking.
pub fn encode_gaps(ids: &[u32]) -> Vec<u32> {
    let mut gaps = Vec::with_capacity(ids.len());

    if let Some(&first) = ids.first() {
        gaps.push(first);
        gaps.extend(ids.windows(2).map(|w| w[1].wrapping_sub(w[0])));
    }

    gaps
}

/// Rebuild the id list from a gap sequence by cumulative summation.
pub fn decode_gaps(gaps: &[u32]) -> Result<Vec<u32>> {
    let mut ids = Vec::with_capacity(gaps.len());
    let mut current = 0u32;

    for &gap in gaps {
        current = current.checked_add(gap).ok_or(CompressionError::Overflow)?;
        ids.push(current);
    }

    Ok(ids)
}
