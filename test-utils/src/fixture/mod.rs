//! Filesystem fixtures that clean up after themselves, plus static TLS material.

pub mod tls;
pub mod token_file;
