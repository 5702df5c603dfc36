//! End-to-end analysis of a textual id list.
//!
//! Runs parse -> gap encode -> VB encode -> timed VB decode, verifies the
//! decoded gaps and reports sizes, ratio and decode latency.

use std::fmt;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::error::{CompressionError, Result};
use crate::gap::encode_gaps;
use crate::parse::parse_doc_ids;
use crate::vbyte;

/// Bytes per id in the uncompressed (raw `u32`) layout.
pub const RAW_ID_BYTES: usize = 4;

/// Knobs for [`analyze_with`].
#[derive(Clone, Debug, Default)]
pub struct AnalyzeOptions {
    /// Decode with [`vbyte::decode_strict`] instead of the lenient decoder.
    pub strict: bool,
}

/// Outputs of one analysis run.
#[derive(Clone, Debug, PartialEq)]
pub struct Analysis {
    /// Parsed document ids.
    pub ids: Vec<u32>,
    /// Gap sequence of `ids`.
    pub gaps: Vec<u32>,
    /// VB encoding of `gaps`.
    pub bytes: Vec<u8>,
    /// Gaps recovered by decoding `bytes`.
    pub decoded: Vec<u32>,
    /// Wall-clock time spent decoding.
    pub decode_time: Duration,
}

impl Analysis {
    /// Size of `ids` stored as raw `u32`s.
    pub fn original_size(&self) -> usize {
        self.ids.len() * RAW_ID_BYTES
    }

    /// Size of the VB stream.
    pub fn compressed_size(&self) -> usize {
        self.bytes.len()
    }

    /// `original / compressed`, or `None` when nothing was encoded.
    pub fn compression_ratio(&self) -> Option<f64> {
        match self.compressed_size() {
            0 => None,
            compressed => Some(self.original_size() as f64 / compressed as f64),
        }
    }

    /// The VB stream as space separated hex.
    pub fn hex(&self) -> String {
        vbyte::to_hex(&self.bytes)
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "original list:     {}", join(&self.ids))?;
        writeln!(f, "gap list:          {}", join(&self.gaps))?;
        writeln!(f, "vb stream:         {}", self.hex())?;
        writeln!(f, "original size:     {} bytes", self.original_size())?;
        writeln!(f, "compressed size:   {} bytes", self.compressed_size())?;
        match self.compression_ratio() {
            Some(ratio) => writeln!(f, "compression ratio: {ratio:.2} : 1")?,
            None => writeln!(f, "compression ratio: N/A")?,
        }
        write!(
            f,
            "decode time:       {:.4} ms",
            self.decode_time.as_secs_f64() * 1000.0
        )
    }
}

fn join(values: &[u32]) -> String {
    values
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn verify(gaps: &[u32], decoded: &[u32]) -> Result<()> {
    if decoded != gaps {
        return Err(CompressionError::Mismatch);
    }
    Ok(())
}

/// Analyze `input` with default options.
pub fn analyze(input: &str) -> Result<Analysis> {
    analyze_with(input, &AnalyzeOptions::default())
}

/// Analyze a comma-separated id list.
///
/// # Errors
///
/// Fails on blank input, bad tokens, ordering violations, and (strict mode)
/// malformed streams. Never returns a result whose `decoded` differs from
/// `gaps`.
pub fn analyze_with(input: &str, options: &AnalyzeOptions) -> Result<Analysis> {
    let ids = parse_doc_ids(input)?;
    if ids.is_empty() {
        return Err(CompressionError::EmptyInput);
    }

    let gaps = encode_gaps(&ids);
    let bytes = vbyte::encode(&gaps);

    let start = Instant::now();
    let decoded = if options.strict {
        vbyte::decode_strict(&bytes)?
    } else {
        vbyte::decode(&bytes)
    };
    let decode_time = start.elapsed();

    verify(&gaps, &decoded)?;

    debug!(
        ids = ids.len(),
        bytes = bytes.len(),
        strict = options.strict,
        decode_ns = decode_time.as_nanos() as u64,
        "analysis complete"
    );

    Ok(Analysis {
        ids,
        gaps,
        bytes,
        decoded,
        decode_time,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worked_example() {
        let analysis = analyze("5,9,20").unwrap();
        assert_eq!(analysis.ids, vec![5, 9, 20]);
        assert_eq!(analysis.gaps, vec![5, 4, 11]);
        assert_eq!(analysis.bytes, vec![0x05, 0x04, 0x0B]);
        assert_eq!(analysis.decoded, vec![5, 4, 11]);
        assert_eq!(analysis.hex(), "05 04 0B");
    }

    #[test]
    fn test_sizes_and_ratio() {
        let analysis = analyze("5,9,20").unwrap();
        assert_eq!(analysis.original_size(), 12);
        assert_eq!(analysis.compressed_size(), 3);
        assert_eq!(analysis.compression_ratio(), Some(4.0));
    }

    #[test]
    fn test_ratio_without_bytes() {
        let analysis = Analysis {
            ids: vec![],
            gaps: vec![],
            bytes: vec![],
            decoded: vec![],
            decode_time: Duration::ZERO,
        };
        assert_eq!(analysis.compression_ratio(), None);
        assert!(analysis.to_string().contains("compression ratio: N/A"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(analyze(""), Err(CompressionError::EmptyInput));
        assert_eq!(analyze("  "), Err(CompressionError::EmptyInput));
    }

    #[test]
    fn test_errors_propagate() {
        assert!(matches!(
            analyze("3,3,5"),
            Err(CompressionError::NotAscending { .. })
        ));
        assert!(matches!(
            analyze("1,abc"),
            Err(CompressionError::InvalidToken { .. })
        ));
    }

    #[test]
    fn test_strict_mode() {
        let options = AnalyzeOptions { strict: true };
        let analysis = analyze_with("1, 200, 70000", &options).unwrap();
        assert_eq!(analysis.decoded, analysis.gaps);
        assert_eq!(analysis.hex(), "01 81 47 84 A1 28");
    }

    #[test]
    fn test_report() {
        let report = analyze("5,9,20").unwrap().to_string();
        assert!(report.contains("original list:     5, 9, 20"));
        assert!(report.contains("gap list:          5, 4, 11"));
        assert!(report.contains("vb stream:         05 04 0B"));
        assert!(report.contains("original size:     12 bytes"));
        assert!(report.contains("compressed size:   3 bytes"));
        assert!(report.contains("compression ratio: 4.00 : 1"));

        let time = report
            .lines()
            .find_map(|line| line.strip_prefix("decode time:"))
            .and_then(|rest| rest.trim().strip_suffix(" ms"))
            .expect("decode time line");
        let (whole, frac) = time.split_once('.').expect("decimal point");
        assert!(!whole.is_empty());
        assert!(whole.bytes().all(|b| b.is_ascii_digit()));
        assert_eq!(frac.len(), 4, "decode time {}", time);
        assert!(frac.bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn test_verify_detects_mismatch() {
        assert_eq!(verify(&[5, 4, 11], &[5, 4, 11]), Ok(()));
        assert_eq!(
            verify(&[5, 4, 11], &[5, 4]),
            Err(CompressionError::Mismatch)
        );
        assert_eq!(verify(&[300], &[44]), Err(CompressionError::Mismatch));
    }
}
