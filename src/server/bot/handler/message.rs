use serenity::all::Message;

use crate::server::{bot::session::ChatSession, model::discord::InboundMessage};

/// Handle message creation in a guild channel or DM
pub async fn handle_message(session: &ChatSession, message: Message) {
    session.on_message(InboundMessage::from(&message)).await;
}
