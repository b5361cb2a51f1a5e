//! Server-side bridge between game servers and Discord.
//!
//! Game servers post "looking to play" notifications to a small HTTP ingress;
//! the bridge checks them against a token allow-list and announces them in a
//! Discord channel with a ping role mention. Players opt in and out of the ping
//! role with `!add` and `!remove`. The backend uses Axum for the ingress and
//! Serenity for the Discord bot.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and payload validation
//! - **Service Layer** (`service/`) - Notification dispatch and ping role commands
//! - **Data Layer** (`data/`) - Token allow-list loaded at startup
//! - **Model Layer** (`model/`) - Domain models and Discord object projections
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Bot** (`bot/`) - Discord session, event handlers and the chat platform capability
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (the notifier)
//! - **Startup** (`startup`) - Logging and HTTP listener lifecycle
//! - **Router** (`router`) - Axum route configuration
//! - **Util** (`util/`) - Markdown and mention escaping
//!
//! # Request Flow
//!
//! 1. **Router** receives `POST /` and routes it to the notify controller
//! 2. **Controller** parses the body into a `NotificationEvent`
//! 3. **Service** checks readiness and the token, renders the announcement
//! 4. **Bot** session sends the announcement through the chat platform
//! 5. **Controller** maps the outcome to `{"success": bool}`

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
