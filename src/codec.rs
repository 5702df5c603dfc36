//! Gap + variable-byte posting-list codec.
//!
//! Composes [`encode_gaps`] with [`vbyte::encode`] on the way in, and
//! [`vbyte::decode_strict`] with [`decode_gaps`] on the way out. The stream
//! carries no header: the number of ids is implied by the terminator bytes.
//!
//! # Size
//!
//! Each id costs `ceil(bits(gap) / 7)` bytes, so consecutive ids take one
//! byte each while a raw `u32` always takes four.

use tracing::debug;

use crate::error::Result;
use crate::gap::{decode_gaps, encode_gaps};
use crate::parse::validate_ascending;
use crate::traits::PostingListCodec;
use crate::vbyte;

/// Posting-list codec using gap encoding followed by VB encoding.
#[derive(Clone, Copy, Debug, Default)]
pub struct VbGapCodec;

impl VbGapCodec {
    /// Create a new codec.
    pub fn new() -> Self {
        Self
    }
}

impl PostingListCodec for VbGapCodec {
    fn compress_list(&self, ids: &[u32]) -> Result<Vec<u8>> {
        validate_ascending(ids)?;

        let encoded = vbyte::encode(&encode_gaps(ids));
        debug!(
            ids = ids.len(),
            bytes = encoded.len(),
            "compressed posting list"
        );
        Ok(encoded)
    }

    fn decompress_list(&self, compressed: &[u8]) -> Result<Vec<u32>> {
        let gaps = vbyte::decode_strict(compressed)?;
        let ids = decode_gaps(&gaps)?;

        // A zero gap past the first position would be a duplicate id.
        validate_ascending(&ids)?;

        debug!(
            bytes = compressed.len(),
            ids = ids.len(),
            "decompressed posting list"
        );
        Ok(ids)
    }

    fn estimate_size(&self, ids: &[u32]) -> usize {
        encode_gaps(ids).into_iter().map(vbyte::encoded_len).sum()
    }
}
