//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use markov_painting::AlgorithmError;
    use markov_painting::io::error::{invalid_parameter, io_error};
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = AlgorithmError::FileSystem {
            path: "/tmp/test.png".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/test.png"));
    }

    // Tests EmptyModel message points at training
    // Verified by emptying the message
    #[test]
    fn test_empty_model_error() {
        let error = AlgorithmError::EmptyModel;
        assert!(error.to_string().contains("train"));
        assert!(error.source().is_none());
    }

    // Tests the rejected compression value is reported
    // Verified by omitting value from message
    #[test]
    fn test_invalid_compression_error() {
        let error = AlgorithmError::InvalidCompressionFactor {
            value: "2.5".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("2.5"));
        assert!(message.contains("positive integer"));
    }

    // Tests InvalidParameter helper fills every field
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("width", &0, &"must be positive");
        let message = error.to_string();
        assert!(message.contains("width"));
        assert!(message.contains("'0'"));
        assert!(message.contains("must be positive"));
    }

    // Tests path errors carry their reason
    // Verified by dropping the reason
    #[test]
    fn test_io_error_helper() {
        let message = io_error("Target must be an image").to_string();
        assert!(message.contains("path"));
        assert!(message.contains("Target must be an image"));
    }

    // Tests ImageExport error includes the source error
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = AlgorithmError::ImageExport {
            path: "/restricted/output.png".into(),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/output.png"));
        assert!(message.contains("access denied"), "{message}");
        assert!(error.source().is_some());
    }
}
