//! Discord bot integration for the chat side of the bridge.
//!
//! The bot connects to the gateway, resolves the announcement channel and ping
//! role once it is ready, and serves the `!add`/`!remove` role commands. All
//! Discord calls go through the `ChatPlatform` capability in `platform`, which
//! lets the session and command logic run against a recording double in tests.
//!
//! The bot is initialized during startup and runs in a separate tokio task so
//! it does not block the HTTP server.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Resolve the announcement channel and its guild
//! - `GUILD_MESSAGES` - Receive commands in the announcement channel
//! - `DIRECT_MESSAGES` - Receive commands sent as direct messages
//! - `GUILD_MEMBERS` - Read member role state (privileged intent)
//! - `MESSAGE_CONTENT` - Read command text (privileged intent)

pub mod handler;
pub mod platform;
pub mod session;
pub mod start;

#[cfg(test)]
pub mod test;
