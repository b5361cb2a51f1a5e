//! Test factories for creating Serenity API objects.
//!
//! This module provides factory functions for creating mock Serenity structs
//! (Role, Member, Channel) for testing purposes. These factories create valid
//! Serenity objects by deserializing JSON, simulating what Discord's API would
//! return.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_channel, create_test_member, create_test_role};
//!
//! let role = create_test_role(222222222, 111111111, "Looking to Play");
//! let member = create_test_member(333333333, 111111111, "Player", &[222222222]);
//! let channel = create_test_channel(444444444, 111111111, ChannelType::Text);
//! ```
//!
//! # Available Factories
//!
//! - `role::create_test_role` - Create Serenity Role objects
//! - `member::create_test_member` - Create Serenity Member objects
//! - `channel::create_test_channel` - Create Serenity GuildChannel objects

pub mod channel;
pub mod member;
pub mod role;

pub use channel::create_test_channel;
pub use member::create_test_member;
pub use role::create_test_role;
