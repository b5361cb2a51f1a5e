//! Service layer for business logic and orchestration.
//!
//! Services sit between the transport layers (HTTP controllers and the Discord
//! event handler) and the chat platform. They work with domain models only:
//!
//! - **Notification** (`notification`) - Token check, rendering and delivery of announcements
//! - **Role** (`role`) - `!add`/`!remove` ping role self-service

pub mod notification;
pub mod role;

#[cfg(test)]
mod test;
