//! Chat announcement rendered from a notification event.

use serenity::all::{CreateAllowedMentions, CreateEmbed, CreateMessage};

use crate::server::{
    model::{discord::PingRole, notification::NotificationEvent},
    util::escape::escape_everything,
};

/// Embed color of every announcement.
pub const ANNOUNCEMENT_COLOR: u32 = 0x13e82e;

/// Message posted to the announcement channel.
///
/// All text taken from the event is already escaped; the ping role mention in
/// `content` is the only markup that resolves.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatAnnouncement {
    pub content: String,
    pub title: String,
    pub description: String,
    pub color: u32,
    /// The one role the message is allowed to ping.
    pub ping_role: PingRole,
}

impl ChatAnnouncement {
    /// Renders the announcement for an event.
    ///
    /// # Arguments
    /// - `event` - Validated notification from a game server
    /// - `ping_role` - Role mentioned at the start of the message
    ///
    /// # Returns
    /// - `ChatAnnouncement` with content
    ///   `<@&role> **player** wants you to join! (*num*/*max*)`, the hostname as
    ///   embed title, and `` `connect ip` `` as embed description
    pub fn render(event: &NotificationEvent, ping_role: &PingRole) -> Self {
        let content = format!(
            "{} **{}** wants you to join! (*{}*/*{}*)",
            ping_role.mention(),
            escape_everything(&event.player_name),
            event.num_players,
            event.max_players
        );

        Self {
            content,
            title: escape_everything(&event.hostname),
            description: format!("`connect {}`", escape_everything(&event.ip)),
            color: ANNOUNCEMENT_COLOR,
            ping_role: ping_role.clone(),
        }
    }

    /// Builds the Discord message, restricting mentions to the ping role.
    pub fn to_message(&self) -> CreateMessage {
        let embed = CreateEmbed::new()
            .title(&self.title)
            .description(&self.description)
            .color(self.color);

        CreateMessage::new()
            .content(&self.content)
            .embed(embed)
            .allowed_mentions(CreateAllowedMentions::new().roles(vec![self.ping_role.role_id]))
    }
}
