//! LFP Notify Test Utils
//!
//! Provides shared testing utilities for the notification bridge. The crate has
//! no knowledge of the bridge's own types; it builds the raw inputs the bridge
//! consumes.
//!
//! # Overview
//!
//! - **NotifyBodyBuilder**: Fluent builder for `POST /` request bodies
//! - **TokenFile**: Temporary allow-list file removed when dropped
//! - **tls**: Self-signed certificate and key for HTTPS listener tests
//! - **serenity**: Factories for Serenity model objects (roles, members, channels)
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::NotifyBodyBuilder, fixture::token_file::TokenFile};
//!
//! #[tokio::test]
//! async fn rejects_unknown_token() -> Result<(), TestError> {
//!     let file = TokenFile::with_contents("token1\n")?;
//!     let body = NotifyBodyBuilder::new().token("unknown").build();
//!     // Load `file.path()`, post `body`...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod error;
pub mod fixture;
pub mod serenity;
