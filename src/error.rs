pub type AppResult<T> = Result<T, AppError>;
pub type FetchResult<T> = Result<T, FetchError>;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("I/O error: {context}")]
    Io {
        #[source]
        source: std::io::Error,
        context: String,
    },
    #[error("failed to build http client")]
    HttpClient(#[source] reqwest::Error),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<std::io::Error> for AppError {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            source,
            context: "I/O operation failed".to_string(),
        }
    }
}

impl AppError {
    pub fn io_with_context(source: std::io::Error, context: impl Into<String>) -> Self {
        Self::Io {
            source,
            context: context.into(),
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Failure of a single catalog request.
///
/// None of these are surfaced to the user individually; the controller
/// collapses them into one generic message and logs the detail.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("malformed catalog response from {url}")]
    Malformed {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Self::Network { .. } | Self::Status { .. } => FetchErrorKind::NetworkFailure,
            Self::Malformed { .. } => FetchErrorKind::MalformedResponse,
        }
    }

    pub fn malformed(url: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Malformed {
            url: url.into(),
            source,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    NetworkFailure,
    MalformedResponse,
}

impl FetchErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NetworkFailure => "network-failure",
            Self::MalformedResponse => "malformed-response",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppError, FetchError, FetchErrorKind};

    #[test]
    fn status_error_counts_as_network_failure() {
        let err = FetchError::Status {
            url: "https://kitsu.io/api/edge/manga".to_string(),
            status: 503,
        };
        assert_eq!(err.kind(), FetchErrorKind::NetworkFailure);
        assert_eq!(
            err.to_string(),
            "request to https://kitsu.io/api/edge/manga returned HTTP 503"
        );
    }

    #[test]
    fn malformed_error_wraps_json_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = AppError::from(FetchError::malformed("u", source));
        assert!(matches!(
            err,
            AppError::Fetch(FetchError::Malformed { .. })
        ));
        assert_eq!(err.to_string(), "malformed catalog response from u");
    }
}
