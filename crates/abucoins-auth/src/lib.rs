//! Authentication for the Abucoins REST API
//!
//! Every Abucoins request carries an `AC-ACCESS-SIGN` header: the base64
//! HMAC-SHA256 of `timestamp + METHOD + path + body`, keyed with the decoded
//! API secret. This crate holds the credentials and produces those headers.
//!
//! # Example
//!
//! ```
//! use abucoins_auth::{Credentials, Method, RequestSigner};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let creds = Credentials::new("passphrase", "key", "c2VjcmV0")?;
//!
//! let headers = RequestSigner::new(&creds).sign(Method::Get, "/accounts", "")?;
//! for (name, value) in headers.to_pairs() {
//!     println!("{name}: {value}");
//! }
//! # Ok(())
//! # }
//! ```

mod credentials;
mod error;
mod signer;

pub use credentials::{Credentials, ENV_API_KEY, ENV_API_PASSPHRASE, ENV_API_SECRET};
pub use error::{AuthError, AuthResult};
pub use signer::{
    Method, RequestSigner, SignedHeaders, HEADER_ACCESS_KEY, HEADER_ACCESS_PASSPHRASE,
    HEADER_ACCESS_SIGN, HEADER_ACCESS_TIMESTAMP, HEADER_CONTENT_TYPE,
};
