use serenity::all::{ChannelId, Message, UserId};

/// Chat message reduced to what command routing looks at.
#[derive(Debug, Clone, PartialEq)]
pub struct InboundMessage {
    pub author_id: UserId,
    pub channel_id: ChannelId,
    /// Sent in a direct message rather than a guild channel.
    pub is_direct: bool,
    pub content: String,
}

impl From<&Message> for InboundMessage {
    fn from(message: &Message) -> Self {
        Self {
            author_id: message.author.id,
            channel_id: message.channel_id,
            is_direct: message.guild_id.is_none(),
            content: message.content.clone(),
        }
    }
}
