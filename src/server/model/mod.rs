//! Server-side domain models.
//!
//! This module contains domain models used throughout the service layer. Discord
//! objects are reduced to the fields the bridge needs at the platform boundary,
//! inbound JSON is validated into a `NotificationEvent` at the controller
//! boundary, and announcements are rendered from events in the service layer.

pub mod announcement;
pub mod discord;
pub mod notification;
