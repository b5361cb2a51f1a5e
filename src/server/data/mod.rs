//! Read-only data the bridge loads at startup.
//!
//! The only persisted state is the token allow-list file, read once by
//! `TokenStore` before the HTTP listener starts.

pub mod token;

#[cfg(test)]
mod test;
