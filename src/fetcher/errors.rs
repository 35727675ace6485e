use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("connect timeout")]
    ConnectTimeout,

    #[error("request timeout")]
    RequestTimeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("blocked by site (http {0})")]
    Blocked(StatusCode),

    #[error("http error {status}")]
    Http {
        status: StatusCode,
        retriable: bool,
    },

    #[error("body too large ({0} bytes)")]
    BodyTooLarge(u64),

    #[error("unsupported content-type: {0}")]
    UnsupportedContentType(String),

    #[error("charset error: {0}")]
    Charset(String),

    #[error("io error: {0}")]
    Io(String),
}

impl FetchError {
    /// Retry policy for the whole taxonomy. An active block is never
    /// retried (the site will keep blocking), nor are shape errors the
    /// next attempt cannot change.
    pub fn should_retry(&self) -> bool {
        match self {
            Self::InvalidUrl(_) => false,
            Self::Blocked(_) => false,
            Self::BodyTooLarge(_) => false,
            Self::UnsupportedContentType(_) => false,
            Self::Charset(_) => false,
            Self::Http { retriable, .. } => *retriable,

            Self::ConnectTimeout => true,
            Self::RequestTimeout => true,
            Self::Network(_) => true,
            Self::Io(_) => true,
        }
    }

    /// Classify an HTTP status: 401/403 are deliberate blocking, 5xx is
    /// transient, other non-success codes are permanent.
    pub fn from_status(status: StatusCode) -> Self {
        if status == StatusCode::FORBIDDEN || status == StatusCode::UNAUTHORIZED {
            Self::Blocked(status)
        } else {
            Self::Http {
                status,
                retriable: status.is_server_error(),
            }
        }
    }

    pub fn from_reqwest_error(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            if err.is_connect() {
                Self::ConnectTimeout
            } else {
                Self::RequestTimeout
            }
        } else if let Some(status) = err.status() {
            Self::from_status(status)
        } else {
            // DNS failures, connection resets, TLS problems
            Self::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocked_statuses_map_to_blocked() {
        assert!(matches!(
            FetchError::from_status(StatusCode::FORBIDDEN),
            FetchError::Blocked(_)
        ));
        assert!(matches!(
            FetchError::from_status(StatusCode::UNAUTHORIZED),
            FetchError::Blocked(_)
        ));
    }

    #[test]
    fn server_errors_are_retriable() {
        match FetchError::from_status(StatusCode::BAD_GATEWAY) {
            FetchError::Http { retriable, .. } => assert!(retriable),
            other => panic!("unexpected: {other:?}"),
        }
        match FetchError::from_status(StatusCode::NOT_FOUND) {
            FetchError::Http { retriable, .. } => assert!(!retriable),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn retry_policy() {
        assert!(FetchError::RequestTimeout.should_retry());
        assert!(FetchError::Network("reset".into()).should_retry());
        assert!(!FetchError::Blocked(StatusCode::FORBIDDEN).should_retry());
        assert!(!FetchError::InvalidUrl("ftp://x".into()).should_retry());
    }
}
