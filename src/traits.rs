//! Codec trait for posting lists.

use crate::error::Result;

/// Compresses sorted, unique document id lists into bytes and back.
pub trait PostingListCodec {
    /// Compress a strictly ascending id list.
    ///
    /// # Errors
    ///
    /// Returns [`CompressionError::NotAscending`] if `ids` is not sorted and
    /// unique.
    ///
    /// [`CompressionError::NotAscending`]: crate::CompressionError::NotAscending
    fn compress_list(&self, ids: &[u32]) -> Result<Vec<u8>>;

    /// Decompress bytes produced by [`compress_list`](Self::compress_list).
    fn decompress_list(&self, compressed: &[u8]) -> Result<Vec<u32>>;

    /// Size in bytes `compress_list` would produce for `ids`.
    fn estimate_size(&self, ids: &[u32]) -> usize;

    /// Average compressed bits per id.
    fn bits_per_id(&self, ids: &[u32]) -> f64 {
        if ids.is_empty() {
            return 0.0;
        }
        (self.estimate_size(ids) * 8) as f64 / ids.len() as f64
    }
}
