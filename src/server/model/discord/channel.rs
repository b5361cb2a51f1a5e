use serenity::all::{ChannelId, ChannelType, GuildChannel, GuildId};

/// Channel resolved from the configured channel ID.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordChannel {
    pub channel_id: ChannelId,
    /// Owning guild, `None` for direct message channels.
    pub guild_id: Option<GuildId>,
    /// Whether the channel is a guild text or announcement channel.
    pub text_capable: bool,
}

impl DiscordChannel {
    /// A channel outside any guild, such as a direct message.
    pub fn private(channel_id: ChannelId) -> Self {
        Self {
            channel_id,
            guild_id: None,
            text_capable: false,
        }
    }
}

impl From<&GuildChannel> for DiscordChannel {
    fn from(channel: &GuildChannel) -> Self {
        Self {
            channel_id: channel.id,
            guild_id: Some(channel.guild_id),
            text_capable: matches!(channel.kind, ChannelType::Text | ChannelType::News),
        }
    }
}
