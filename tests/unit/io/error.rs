//! Tests for error formatting and conversion

#[cfg(test)]
mod tests {
    use rectpack::PackError;
    use rectpack::io::error::{invalid_parameter, invalid_puzzle};
    use std::error::Error;
    use std::io;
    use std::path::PathBuf;

    // Tests puzzle errors mention the line and reason
    // Verified by omitting the line number from the message
    #[test]
    fn test_invalid_puzzle_display() {
        let error = invalid_puzzle(7, &"missing piece id");

        assert_eq!(
            error.to_string(),
            "Invalid puzzle description at line 7: missing piece id"
        );
        assert!(error.source().is_none());
    }

    // Tests parameter errors name parameter, value and reason
    // Verified by swapping value and reason in the message
    #[test]
    fn test_invalid_parameter_display() {
        let error = invalid_parameter("thread_limit", &999, &"too large");

        assert_eq!(
            error.to_string(),
            "Invalid parameter 'thread_limit' = '999': too large"
        );
    }

    // Tests file system errors keep their I/O source
    // Verified by returning no source
    #[test]
    fn test_file_system_source() {
        let error = PackError::FileSystem {
            path: PathBuf::from("puzzle.txt"),
            operation: "read",
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };

        assert!(error.to_string().contains("puzzle.txt"));
        assert!(error.source().is_some());
    }

    // Tests I/O errors convert into output errors
    // Verified by converting into file system errors
    #[test]
    fn test_io_error_conversion() {
        let error = PackError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));

        assert!(matches!(error, PackError::Output { .. }));
        assert!(error.source().is_some());
    }

    // Tests worker failures report the number of failed workers
    // Verified by dropping the count from the message
    #[test]
    fn test_worker_failure_display() {
        let error = PackError::WorkerFailure { failed: 2 };

        assert_eq!(error.to_string(), "2 search worker(s) terminated abnormally");
    }
}
