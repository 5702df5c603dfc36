//! Posting-list compression with gap and variable-byte encoding.
//!
//! `vbgap` compresses sorted, unique document id lists the way classic
//! inverted indexes store their posting lists:
//!
//! 1. **Gap encoding**: keep the first id, replace every later id with its
//!    distance to the previous one (`[5, 9, 20]` becomes `[5, 4, 11]`).
//! 2. **Variable-byte encoding**: write each gap as 7-bit groups,
//!    most-significant first, with the top bit of every byte except the last
//!    set as a continuation flag.
//!
//! Small gaps take a single byte, so dense lists shrink to roughly a quarter
//! of their raw `u32` size.
//!
//! # Example
//!
//! ```rust
//! use vbgap::{encode_gaps, vbyte};
//!
//! let ids = [5u32, 9, 20];
//! let gaps = encode_gaps(&ids);
//! assert_eq!(gaps, vec![5, 4, 11]);
//!
//! let bytes = vbyte::encode(&gaps);
//! assert_eq!(vbyte::to_hex(&bytes), "05 04 0B");
//! assert_eq!(vbyte::decode(&bytes), gaps);
//! ```
//!
//! Or run the whole pipeline from text:
//!
//! ```rust
//! let analysis = vbgap::analyze("5, 9, 20").unwrap();
//! assert_eq!(analysis.compressed_size(), 3);
//! assert_eq!(analysis.compression_ratio(), Some(4.0));
//! ```
//!
//! # References
//!
//! - Manning, Raghavan, Schütze (2008). "Introduction to Information
//!   Retrieval", ch. 5.3 "Postings file compression"

#![warn(missing_docs)]
#![warn(clippy::all)]

mod analysis;
mod codec;
mod error;
mod gap;
mod parse;
mod traits;

pub mod vbyte;

pub use analysis::{analyze, analyze_with, Analysis, AnalyzeOptions, RAW_ID_BYTES};
pub use codec::VbGapCodec;
pub use error::{CompressionError, Result};
pub use gap::{decode_gaps, encode_gaps};
pub use parse::{parse_doc_ids, validate_ascending};
pub use traits::PostingListCodec;
