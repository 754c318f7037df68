//! Per-request signing
//!
//! A [`RequestSigner`] captures one timestamp and turns a method, path and body
//! into the five `AC-ACCESS-*` / `Content-Type` headers the exchange expects.

use chrono::Utc;
use tracing::trace;

use crate::credentials::Credentials;
use crate::error::AuthResult;

/// `Content-Type` header name
pub const HEADER_CONTENT_TYPE: &str = "Content-Type";
/// API key header name
pub const HEADER_ACCESS_KEY: &str = "AC-ACCESS-KEY";
/// Timestamp header name
pub const HEADER_ACCESS_TIMESTAMP: &str = "AC-ACCESS-TIMESTAMP";
/// Passphrase header name
pub const HEADER_ACCESS_PASSPHRASE: &str = "AC-ACCESS-PASSPHRASE";
/// Signature header name
pub const HEADER_ACCESS_SIGN: &str = "AC-ACCESS-SIGN";

const CONTENT_TYPE_JSON: &str = "application/json";

/// HTTP methods used by the Abucoins API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// DELETE
    Delete,
}

impl Method {
    /// Uppercase name, as it appears in the signed message
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authentication headers for a single request
///
/// Never reuse these across requests; the timestamp is part of the signature.
#[derive(Clone, PartialEq, Eq)]
pub struct SignedHeaders {
    /// API key
    pub access_key: String,
    /// Unix seconds as decimal text
    pub access_timestamp: String,
    /// Passphrase
    pub access_passphrase: String,
    /// Base64 HMAC-SHA256 signature
    pub access_sign: String,
}

impl SignedHeaders {
    /// Headers as `(name, value)` pairs, in wire order
    pub fn to_pairs(&self) -> [(&'static str, &str); 5] {
        [
            (HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON),
            (HEADER_ACCESS_KEY, &self.access_key),
            (HEADER_ACCESS_TIMESTAMP, &self.access_timestamp),
            (HEADER_ACCESS_PASSPHRASE, &self.access_passphrase),
            (HEADER_ACCESS_SIGN, &self.access_sign),
        ]
    }

    /// Content type sent with every request
    pub fn content_type(&self) -> &'static str {
        CONTENT_TYPE_JSON
    }
}

impl std::fmt::Debug for SignedHeaders {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignedHeaders")
            .field("access_key", &self.access_key)
            .field("access_timestamp", &self.access_timestamp)
            .field("access_passphrase", &"[REDACTED]")
            .field("access_sign", &self.access_sign)
            .finish()
    }
}

/// Request signer for building authenticated requests
#[derive(Debug)]
pub struct RequestSigner<'a> {
    credentials: &'a Credentials,
    timestamp: i64,
}

impl<'a> RequestSigner<'a> {
    /// Create a new request signer stamped with the current Unix time
    pub fn new(credentials: &'a Credentials) -> Self {
        Self::at(credentials, Utc::now().timestamp())
    }

    /// Create a signer with a fixed timestamp
    pub fn at(credentials: &'a Credentials, timestamp: i64) -> Self {
        Self {
            credentials,
            timestamp,
        }
    }

    /// Get the timestamp for this request
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Sign the request and produce its headers
    ///
    /// `path` must not contain the query string. `body` is the exact text that
    /// will be transmitted, or `""` when there is none.
    pub fn sign(&self, method: Method, path: &str, body: &str) -> AuthResult<SignedHeaders> {
        let access_sign = self.credentials.sign(self.timestamp, method, path, body)?;

        trace!(%method, path, timestamp = self.timestamp, "Signed request");

        Ok(SignedHeaders {
            access_key: self.credentials.api_key().to_string(),
            access_timestamp: self.timestamp.to_string(),
            access_passphrase: self.credentials.passphrase().to_string(),
            access_sign,
        })
    }
}
