use serde::Deserialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    #[error("service account credentials are not configured")]
    Missing,
    #[error("service account credentials are not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("service account credentials are missing `{0}`")]
    MissingField(&'static str),
}

#[derive(Deserialize)]
struct RawCredentials {
    #[serde(default)]
    client_email: Option<String>,
    #[serde(default)]
    private_key: Option<String>,
    #[serde(default)]
    project_id: Option<String>,
}

/// Service-account identity used to sign token assertions.
///
/// Only `client_email` and `private_key` are required; every other entry of
/// the exported JSON blob is ignored.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct CredentialRecord {
    client_email: String,
    private_key: String,
    project_id: Option<String>,
}

impl CredentialRecord {
    pub fn parse(blob: &str) -> Result<Self, CredentialError> {
        if blob.trim().is_empty() {
            return Err(CredentialError::Missing);
        }
        let raw: RawCredentials = serde_json::from_str(blob)?;
        let client_email = raw
            .client_email
            .filter(|value| !value.trim().is_empty())
            .ok_or(CredentialError::MissingField("client_email"))?;
        let private_key = raw
            .private_key
            .filter(|value| !value.trim().is_empty())
            .ok_or(CredentialError::MissingField("private_key"))?;
        Ok(Self {
            client_email,
            private_key,
            project_id: raw.project_id,
        })
    }

    pub fn client_email(&self) -> &str {
        &self.client_email
    }

    /// PEM-armored PKCS8 RSA key.
    pub fn private_key(&self) -> &str {
        &self.private_key
    }

    pub fn project_id(&self) -> Option<&str> {
        self.project_id.as_deref()
    }
}

impl std::fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("client_email", &self.client_email)
            .field("private_key", &"REDACTED")
            .field("project_id", &self.project_id)
            .finish()
    }
}
