//! Tests for `PixelBuffer` validation and pixel access

#[cfg(test)]
mod tests {
    use markov_painting::color::Color;
    use markov_painting::{AlgorithmError, PixelBuffer};

    // Tests RGBA layout is read row-major with alpha ignored
    // Verified by computing the offset as x * height + y
    #[test]
    fn test_rgba_row_major_access() {
        let data = vec![
            1, 1, 1, 255, 2, 2, 2, 0, //
            3, 3, 3, 255, 4, 4, 4, 128,
        ];
        let Ok(buffer) = PixelBuffer::from_rgba(2, 2, data) else {
            unreachable!("2x2 RGBA buffer is valid");
        };

        assert_eq!(buffer.channels(), 4);
        assert_eq!(buffer.color_at(1, 0), Some(Color::new(2, 2, 2)));
        assert_eq!(buffer.color_at(0, 1), Some(Color::new(3, 3, 3)));
        assert_eq!(buffer.pixel(1, 1), Some(&[4u8, 4, 4, 128][..]));
    }

    // Tests RGB buffers use three bytes per pixel
    // Verified by hardcoding four channels in pixel offsets
    #[test]
    fn test_rgb_access() {
        let Ok(buffer) = PixelBuffer::from_rgb(3, 1, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]) else {
            unreachable!("3x1 RGB buffer is valid");
        };
        assert_eq!(buffer.color_at(2, 0), Some(Color::new(7, 8, 9)));
    }

    // Tests out-of-bounds access returns None instead of wrapping
    // Verified by removing the x bound check
    #[test]
    fn test_out_of_bounds_is_none() {
        let Ok(buffer) = PixelBuffer::from_rgba(2, 1, vec![0; 8]) else {
            unreachable!("2x1 RGBA buffer is valid");
        };
        assert_eq!(buffer.color_at(2, 0), None);
        assert_eq!(buffer.color_at(0, 1), None);
    }

    // Tests length mismatches are rejected
    // Verified by accepting buffers that are too long
    #[test]
    fn test_length_mismatch_rejected() {
        assert!(matches!(
            PixelBuffer::from_rgba(2, 2, vec![0; 15]),
            Err(AlgorithmError::InvalidSourceData { .. })
        ));
        assert!(matches!(
            PixelBuffer::from_rgb(1, 1, vec![0; 4]),
            Err(AlgorithmError::InvalidSourceData { .. })
        ));
    }

    // Tests an empty image is a valid buffer
    // Verified by rejecting zero dimensions
    #[test]
    fn test_empty_buffer_is_valid() {
        let Ok(buffer) = PixelBuffer::from_rgba(0, 0, Vec::new()) else {
            unreachable!("empty buffer is valid");
        };
        assert!(buffer.as_bytes().is_empty());
        assert_eq!(buffer.into_bytes(), Vec::<u8>::new());
    }
}
