//! API credentials for the Abucoins REST API
//!
//! Implements HMAC-SHA256 signing as required by every Abucoins endpoint.
//!
//! # Security
//!
//! The secret and passphrase are stored using the `secrecy` crate which:
//! - Zeroizes memory on drop
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`
//!
//! The secret is kept in its base64 form and decoded on every signature, so a
//! malformed secret is reported when the first request is signed.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretBox, SecretString};
use sha2::Sha256;

use crate::error::{AuthError, AuthResult};
use crate::signer::Method;

type HmacSha256 = Hmac<Sha256>;

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "ABUCOINS_API_KEY";
/// Environment variable holding the base64 API secret
pub const ENV_API_SECRET: &str = "ABUCOINS_API_SECRET";
/// Environment variable holding the API passphrase
pub const ENV_API_PASSPHRASE: &str = "ABUCOINS_API_PASSPHRASE";

/// API credentials for authenticated requests
///
/// Immutable once built. Cloning is cheap enough to share one set of
/// credentials between several clients.
pub struct Credentials {
    /// API key (public)
    api_key: String,
    /// Base64 encoded secret
    secret: SecretString,
    /// Passphrase chosen when the key was created
    passphrase: SecretString,
}

impl Credentials {
    /// Create new credentials
    ///
    /// # Arguments
    /// * `passphrase` - Passphrase chosen when the API key was created
    /// * `api_key` - Your Abucoins API key
    /// * `secret` - Your API secret (base64 encoded string)
    ///
    /// Only presence is checked here. The secret is not decoded until a request
    /// is signed.
    pub fn new(
        passphrase: impl Into<String>,
        api_key: impl Into<String>,
        secret: impl Into<String>,
    ) -> AuthResult<Self> {
        let passphrase = passphrase.into();
        let api_key = api_key.into();
        let secret = secret.into();

        if api_key.is_empty() {
            return Err(AuthError::MissingCredential("key"));
        }
        if secret.is_empty() {
            return Err(AuthError::MissingCredential("secret"));
        }
        if passphrase.is_empty() {
            return Err(AuthError::MissingCredential("passphrase"));
        }

        Ok(Self {
            api_key,
            secret: SecretString::from(secret),
            passphrase: SecretString::from(passphrase),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `ABUCOINS_API_KEY`, `ABUCOINS_API_SECRET` and
    /// `ABUCOINS_API_PASSPHRASE` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = read_env(ENV_API_KEY)?;
        let secret = read_env(ENV_API_SECRET)?;
        let passphrase = read_env(ENV_API_PASSPHRASE)?;

        Self::new(passphrase, api_key, secret)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the passphrase
    pub fn passphrase(&self) -> &str {
        self.passphrase.expose_secret()
    }

    /// Build the string covered by the signature
    ///
    /// Timestamp, uppercase method, path without query string, and the raw
    /// body, concatenated with no separator.
    pub fn prehash(timestamp: i64, method: Method, path: &str, body: &str) -> String {
        format!("{}{}{}{}", timestamp, method.as_str(), path, body)
    }

    /// Sign a request for the Abucoins API
    ///
    /// Abucoins signature algorithm:
    /// 1. message = timestamp + METHOD + path + body
    /// 2. HMAC-SHA256(base64_decode(secret), message)
    /// 3. Base64 encode result
    ///
    /// # Errors
    /// Returns [`AuthError::InvalidSecret`] if the secret is not valid base64.
    pub fn sign(&self, timestamp: i64, method: Method, path: &str, body: &str) -> AuthResult<String> {
        let key = self.decoded_secret()?;

        let mut mac = HmacSha256::new_from_slice(key.expose_secret())
            .map_err(|e| AuthError::InvalidSecret(e.to_string()))?;
        mac.update(Self::prehash(timestamp, method, path, body).as_bytes());
        let result = mac.finalize();

        Ok(BASE64.encode(result.into_bytes()))
    }

    fn decoded_secret(&self) -> AuthResult<SecretBox<Vec<u8>>> {
        let decoded = BASE64
            .decode(self.secret.expose_secret())
            .map_err(|e| AuthError::InvalidSecret(format!("Invalid base64 secret: {}", e)))?;

        Ok(SecretBox::new(Box::new(decoded)))
    }
}

fn read_env(name: &str) -> AuthResult<String> {
    std::env::var(name).map_err(|_| AuthError::EnvVarNotSet(name.to_string()))
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            secret: SecretString::from(self.secret.expose_secret().to_owned()),
            passphrase: SecretString::from(self.passphrase.expose_secret().to_owned()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "api_key",
                &format!("{}...", self.api_key.chars().take(8).collect::<String>()),
            )
            .field("secret", &"[REDACTED]")
            .field("passphrase", &"[REDACTED]")
            .finish()
    }
}
