use reqwest::StatusCode;
use sheetlist_core::CredentialError;
use sheetlist_crypto::AssertionError;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("token exchange failed: {}", describe_failure(.status, .body))]
    Authentication { status: Option<u16>, body: String },
    #[error("access denied: {status} {body}")]
    AccessDenied { status: u16, body: String },
    #[error("spreadsheet not found: {status} {body}")]
    NotFound { status: u16, body: String },
    #[error("request failed: {status} {body}")]
    Request { status: u16, body: String },
    #[error("invalid item: {0}")]
    Validation(String),
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

fn describe_failure(status: &Option<u16>, body: &str) -> String {
    match status {
        Some(status) => format!("{status} {body}"),
        None => body.to_string(),
    }
}

impl ClientError {
    /// HTTP status returned by the remote side, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication { status, .. } => *status,
            Self::AccessDenied { status, .. }
            | Self::NotFound { status, .. }
            | Self::Request { status, .. } => Some(*status),
            Self::Transport(err) => err.status().map(|status| status.as_u16()),
            Self::Configuration(_) | Self::Validation(_) => None,
        }
    }

    /// Raw response body kept for diagnostics.
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Authentication { body, .. }
            | Self::AccessDenied { body, .. }
            | Self::NotFound { body, .. }
            | Self::Request { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }

    /// Classifies a failed read of the value range.
    pub(crate) fn from_read_status(status: StatusCode, body: String) -> Self {
        let status = status.as_u16();
        match status {
            403 => Self::AccessDenied { status, body },
            404 => Self::NotFound { status, body },
            _ => Self::Request { status, body },
        }
    }
}

impl From<CredentialError> for ClientError {
    fn from(err: CredentialError) -> Self {
        Self::Configuration(err.to_string())
    }
}

impl From<AssertionError> for ClientError {
    fn from(err: AssertionError) -> Self {
        Self::Configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_statuses_map_to_kinds() {
        assert!(matches!(
            ClientError::from_read_status(StatusCode::FORBIDDEN, "nope".to_string()),
            ClientError::AccessDenied { status: 403, .. }
        ));
        assert!(matches!(
            ClientError::from_read_status(StatusCode::NOT_FOUND, "missing".to_string()),
            ClientError::NotFound { status: 404, .. }
        ));
        let err = ClientError::from_read_status(StatusCode::BAD_GATEWAY, "upstream".to_string());
        assert!(matches!(err, ClientError::Request { status: 502, .. }));
        assert_eq!(err.status(), Some(502));
        assert_eq!(err.body(), Some("upstream"));
    }

    #[test]
    fn authentication_message_includes_status_when_known() {
        let err = ClientError::Authentication {
            status: Some(400),
            body: "invalid_grant".to_string(),
        };
        assert_eq!(err.to_string(), "token exchange failed: 400 invalid_grant");
        let err = ClientError::Authentication {
            status: None,
            body: "connection refused".to_string(),
        };
        assert_eq!(err.to_string(), "token exchange failed: connection refused");
    }
}
