//! Media storage error to HTTP error conversion.

use crate::handler::{Error, ErrorKind};
use crate::service::{MediaError, MediaStore};

/// Tracing target for media error conversion.
const TRACING_TARGET: &str = "vantage_server::handler::media_error";

impl From<MediaError> for Error<'static> {
    fn from(error: MediaError) -> Self {
        match error {
            MediaError::UnsupportedType => ErrorKind::UnsupportedMediaType
                .with_message(format!(
                    "File type not allowed; allowed extensions: {}",
                    MediaStore::ALLOWED_EXTENSIONS.join(", ")
                ))
                .with_resource("media"),

            MediaError::TooLarge { size, limit } => ErrorKind::PayloadTooLarge
                .with_message(format!(
                    "File of {} bytes exceeds the {} byte upload limit",
                    size, limit
                ))
                .with_resource("media"),

            MediaError::Io(e) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %e,
                    "media storage I/O failure"
                );
                ErrorKind::InternalServerError.into_error()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_type_names_the_allowlist() {
        let error: Error<'static> = MediaError::UnsupportedType.into();
        assert_eq!(error.kind(), ErrorKind::UnsupportedMediaType);
        assert!(error.message().unwrap_or_default().contains("jpg"));
    }

    #[test]
    fn oversized_upload_is_payload_too_large() {
        let error: Error<'static> = MediaError::TooLarge {
            size: 11,
            limit: 10,
        }
        .into();
        assert_eq!(error.kind(), ErrorKind::PayloadTooLarge);
    }
}
