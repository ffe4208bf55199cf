use std::fmt;

use aws_sdk_ec2::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use thiserror::Error;

#[derive(Error)]
pub enum Error {
    #[error("authentication failed during {operation}: {detail}")]
    Authentication { operation: String, detail: String },

    #[error("authorization denied for {operation}: {detail}")]
    Authorization { operation: String, detail: String },

    #[error("request throttled during {operation}: {detail}")]
    Throttled { operation: String, detail: String },

    #[error("transport error during {operation}: {detail}")]
    Transport { operation: String, detail: String },

    #[error("malformed response: instance missing {field}")]
    MalformedResponse { field: &'static str },

    #[error("unexpected error during {operation}: {detail}")]
    Unknown { operation: String, detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

// `main` returns a boxed error and the runtime prints it with `Debug`.
impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Classify an SDK failure. Nothing is retried; the caller surfaces the result as-is.
pub fn map_sdk_error<E>(operation: &'static str, sdk_error: SdkError<E>) -> Error
where
    E: std::error::Error + ProvideErrorMetadata + Send + Sync + 'static,
{
    match sdk_error {
        SdkError::ServiceError(service_error) => {
            let error = service_error.into_err();
            let detail = error
                .message()
                .map(str::to_string)
                .unwrap_or_else(|| DisplayErrorContext(&error).to_string());
            classify_service_error(operation, error.code(), detail)
        }
        transport @ (SdkError::TimeoutError(_) | SdkError::DispatchFailure(_)) => {
            Error::Transport {
                operation: operation.to_string(),
                detail: DisplayErrorContext(&transport).to_string(),
            }
        }
        other => Error::Unknown {
            operation: operation.to_string(),
            detail: DisplayErrorContext(&other).to_string(),
        },
    }
}

fn classify_service_error(operation: &str, code: Option<&str>, detail: String) -> Error {
    let operation = operation.to_string();
    match code.unwrap_or_default() {
        "AuthFailure" | "InvalidClientTokenId" | "ExpiredToken" | "SignatureDoesNotMatch" => {
            Error::Authentication { operation, detail }
        }
        "UnauthorizedOperation" | "OptInRequired" | "AccessDenied" | "AccessDeniedException" => {
            Error::Authorization { operation, detail }
        }
        "RequestLimitExceeded" | "Throttling" | "ThrottlingException" => {
            Error::Throttled { operation, detail }
        }
        _ => Error::Unknown { operation, detail },
    }
}
