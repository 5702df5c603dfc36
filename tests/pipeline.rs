use vbgap::{analyze, analyze_with, vbyte, AnalyzeOptions, CompressionError};

#[test]
fn test_end_to_end_scenario() {
    let analysis = analyze("5,9,20").unwrap();

    assert_eq!(analysis.ids, vec![5, 9, 20]);
    assert_eq!(analysis.gaps, vec![5, 4, 11]);
    assert_eq!(analysis.hex(), "05 04 0B");
    assert_eq!(vbyte::decode(&analysis.bytes), vec![5, 4, 11]);
}

#[test]
fn test_multi_byte_gaps() {
    let analysis = analyze("128, 428").unwrap();

    // gaps [128, 300]
    assert_eq!(analysis.gaps, vec![128, 300]);
    assert_eq!(analysis.bytes, vec![0x81, 0x00, 0x82, 0x2C]);
    assert_eq!(analysis.compression_ratio(), Some(2.0));
}

#[test]
fn test_duplicate_is_ordering_error() {
    match analyze("3,3,5") {
        Err(CompressionError::NotAscending {
            previous, current, ..
        }) => {
            assert_eq!((previous, current), (3, 3));
        }
        other => panic!("expected ordering error, got {:?}", other),
    }
}

#[test]
fn test_bad_tokens_are_named() {
    for (input, token) in [("1,-2,3", "-2"), ("abc", "abc"), ("4, 5x", "5x")] {
        let err = analyze(input).unwrap_err();
        assert_eq!(
            err,
            CompressionError::InvalidToken {
                token: token.to_string()
            }
        );
        assert!(err.to_string().contains(token));
    }
}

#[test]
fn test_empty_input_rejected() {
    assert_eq!(analyze(""), Err(CompressionError::EmptyInput));
}

#[test]
fn test_strict_and_lenient_agree() {
    let input = "0, 1, 127, 255, 16384, 4294967295";
    let lenient = analyze(input).unwrap();
    let strict = analyze_with(input, &AnalyzeOptions { strict: true }).unwrap();

    assert_eq!(lenient.bytes, strict.bytes);
    assert_eq!(lenient.decoded, strict.decoded);
    assert_eq!(lenient.decoded, lenient.gaps);
}
