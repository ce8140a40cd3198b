//! Tests for channel compression and compression factor validation

#[cfg(test)]
mod tests {
    use markov_painting::AlgorithmError;
    use markov_painting::color::{Color, Compression, compress, quantize};

    fn factor(k: u32) -> Compression {
        Compression::new(k).unwrap_or_default()
    }

    // Tests a factor of one is the identity for every channel value
    // Verified by rounding to even values
    #[test]
    fn test_compress_identity_with_factor_one() {
        for v in 0..=255u8 {
            assert_eq!(compress(v, Compression::NONE), v);
        }
    }

    // Tests compression is idempotent for a range of factors
    // Verified by rounding up instead of down
    #[test]
    fn test_compress_is_idempotent() {
        for k in [1, 2, 3, 7, 16, 100, 255, 256, 1000] {
            let k = factor(k);
            for v in 0..=255u8 {
                let once = compress(v, k);
                assert_eq!(compress(once, k), once, "k={k} v={v}");
                assert!(once <= v);
            }
        }
    }

    // Tests values round down to multiples of the factor
    // Verified by using round-to-nearest
    #[test]
    fn test_compress_rounds_down() {
        let k = factor(16);
        assert_eq!(compress(15, k), 0);
        assert_eq!(compress(16, k), 16);
        assert_eq!(compress(255, k), 240);
        assert_eq!(compress(200, factor(300)), 0);
    }

    // Tests quantize applies compression per channel
    // Verified by compressing only the red channel
    #[test]
    fn test_quantize_per_channel() {
        let color = Color::new(37, 64, 250);
        assert_eq!(quantize(color, factor(10)), Color::new(30, 60, 250));
    }

    // Tests zero is rejected as a factor
    // Verified by mapping zero to the default factor
    #[test]
    fn test_zero_factor_rejected() {
        assert!(matches!(
            Compression::new(0),
            Err(AlgorithmError::InvalidCompressionFactor { .. })
        ));
    }

    // Tests parsing accepts positive integers only
    // Verified by parsing through f64 and truncating
    #[test]
    fn test_parse_rejects_non_integers() {
        assert_eq!("8".parse::<Compression>().ok(), Some(factor(8)));
        assert_eq!(" 3 ".parse::<Compression>().ok(), Some(factor(3)));
        for bad in ["0", "-4", "2.5", "abc", ""] {
            assert!(
                matches!(
                    bad.parse::<Compression>(),
                    Err(AlgorithmError::InvalidCompressionFactor { ref value }) if value == bad
                ),
                "{bad:?} should be rejected"
            );
        }
    }

    // Tests default factor is one
    // Verified by defaulting to two
    #[test]
    fn test_default_is_no_compression() {
        assert_eq!(Compression::default().get(), 1);
        assert_eq!(Compression::default().to_string(), "1");
    }
}
