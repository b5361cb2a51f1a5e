pub mod channel;
pub mod guild_member;
pub mod message;
pub mod role;

pub use channel::DiscordChannel;
pub use guild_member::DiscordGuildMember;
pub use message::InboundMessage;
pub use role::PingRole;
