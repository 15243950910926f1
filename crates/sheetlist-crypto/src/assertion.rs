//! RS256-signed JWT assertions for the OAuth2 JWT-bearer grant.

use ring::rand::SystemRandom;
use ring::signature::{RsaKeyPair, RSA_PKCS1_SHA256};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::encoding::{base64url, pem_to_der};

#[derive(Debug, thiserror::Error)]
pub enum AssertionError {
    #[error("private key is not valid base64: {0}")]
    InvalidKeyEncoding(String),
    #[error("private key is not a PKCS8 RSA key: {0}")]
    InvalidKey(String),
    #[error("failed to sign assertion")]
    Signing,
    #[error("failed to serialize assertion: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionHeader {
    pub alg: String,
    pub typ: String,
}

impl Default for AssertionHeader {
    fn default() -> Self {
        Self {
            alg: "RS256".to_string(),
            typ: "JWT".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssertionClaims {
    pub iss: String,
    pub scope: String,
    pub aud: String,
    pub iat: i64,
    pub exp: i64,
}

impl AssertionClaims {
    pub fn new(
        issuer: impl Into<String>,
        scope: impl Into<String>,
        audience: impl Into<String>,
        issued_at: i64,
        lifetime_seconds: i64,
    ) -> Self {
        Self {
            iss: issuer.into(),
            scope: scope.into(),
            aud: audience.into(),
            iat: issued_at,
            exp: issued_at + lifetime_seconds,
        }
    }
}

/// RSA signing key imported from a PEM-armored PKCS8 document.
pub struct AssertionSigner {
    key_pair: RsaKeyPair,
    rng: SystemRandom,
}

impl AssertionSigner {
    pub fn from_pem(pem: &str) -> Result<Self, AssertionError> {
        let der = pem_to_der(pem)?;
        let key_pair = RsaKeyPair::from_pkcs8(&der)
            .map_err(|err| AssertionError::InvalidKey(err.to_string()))?;
        Ok(Self {
            key_pair,
            rng: SystemRandom::new(),
        })
    }

    /// Public half as a DER `RSAPublicKey`, for verification.
    pub fn public_key_der(&self) -> &[u8] {
        use ring::signature::KeyPair;
        self.key_pair.public_key().as_ref()
    }

    pub fn sign(&self, claims: &AssertionClaims) -> Result<String, AssertionError> {
        let header = base64url(&serde_json::to_vec(&AssertionHeader::default())?);
        let payload = base64url(&serde_json::to_vec(claims)?);
        let signing_input = format!("{header}.{payload}");

        let mut signature = vec![0u8; self.key_pair.public().modulus_len()];
        self.key_pair
            .sign(
                &RSA_PKCS1_SHA256,
                &self.rng,
                signing_input.as_bytes(),
                &mut signature,
            )
            .map_err(|_| AssertionError::Signing)?;
        debug!(issuer = %claims.iss, exp = claims.exp, "signed assertion");
        Ok(format!("{signing_input}.{}", base64url(&signature)))
    }
}

/// One-shot helper: import `pem` and sign `claims`.
pub fn sign_assertion(claims: &AssertionClaims, pem: &str) -> Result<String, AssertionError> {
    AssertionSigner::from_pem(pem)?.sign(claims)
}
