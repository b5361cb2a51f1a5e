//! Self-signed certificate for `localhost` / `127.0.0.1`, valid for a century.
//!
//! Only for serving HTTPS in tests; clients must skip certificate verification.

use std::path::PathBuf;

/// PEM certificate chain.
pub fn cert_path() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/tls/cert.pem"))
}

/// PKCS#8 PEM private key matching [`cert_path`].
pub fn key_path() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/tls/key.pem"))
}
