// Start of file: /src/utils/error_handler.rs

// Global error handling for HTTP middleware layers

use axum::{
    BoxError,
    http::StatusCode,
    response::IntoResponse,
};
use std::error::Error;
use tracing::warn;
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
// Axum uses http_body_util for length-limiting
use http_body_util::LengthLimitError;

/// Maps layer errors to HTTP status codes
pub async fn handle_global_error(err: BoxError) -> impl IntoResponse {
    // 413 if the body was too large
    if err.is::<LengthLimitError>() || find_cause::<LengthLimitError>(&*err).is_some() {
        return StatusCode::PAYLOAD_TOO_LARGE;
    }

    // 408 if the request took too long
    if err.is::<Elapsed>() {
        return StatusCode::REQUEST_TIMEOUT;
    }

    // Otherwise, 500
    warn!("Unhandled layer error: {err}");
    StatusCode::INTERNAL_SERVER_ERROR
}

/// Helper function to find specific error type in error chain
pub fn find_cause<T: Error + 'static>(err: &dyn Error) -> Option<&T> {
    let mut source: Option<&dyn Error> = err.source();

    while let Some(s) = source {
        if let Some(typed) = s.downcast_ref::<T>() {
            return Some(typed);
        }
        source = s.source();
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Bytes;
    use http_body_util::{BodyExt, Full, Limited};
    use std::{fmt, io};

    #[derive(Debug)]
    struct Wrapper(BoxError);

    impl fmt::Display for Wrapper {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "wrapped")
        }
    }

    impl Error for Wrapper {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&*self.0)
        }
    }

    #[tokio::test]
    async fn timeouts_become_408() {
        let response = handle_global_error(Box::new(Elapsed::new())).await.into_response();
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }

    async fn oversized_body_error() -> BoxError {
        Limited::new(Full::new(Bytes::from_static(b"0123456789")), 4)
            .collect()
            .await
            .unwrap_err()
    }

    #[tokio::test]
    async fn body_over_limit_becomes_413() {
        let response = handle_global_error(oversized_body_error().await).await.into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn wrapped_body_limit_error_becomes_413() {
        let err: BoxError = Box::new(Wrapper(oversized_body_error().await));
        let response = handle_global_error(err).await.into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[tokio::test]
    async fn unknown_errors_become_500() {
        let err: BoxError = Box::new(io::Error::other("boom"));
        let response = handle_global_error(err).await.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn find_cause_walks_the_source_chain() {
        let err: Wrapper = Wrapper(Box::new(io::Error::other("inner")));

        assert!(find_cause::<io::Error>(&err).is_some());
        assert!(find_cause::<Elapsed>(&err).is_none());
    }
}

// End of file: /src/utils/error_handler.rs
