use thiserror::Error;

/// Errors that can occur while writing a drive report to a sink.
///
/// Building the report itself never fails.
#[derive(Debug, Error)]
pub enum DriveError {
    /// The output sink rejected the write.
    #[error("failed to write drive report")]
    Write(#[from] std::io::Error),
}
