use serenity::all::{Member, Mentionable, RoleId, UserId};

/// Represents a Discord guild member at the moment it was read.
///
/// Role membership is never cached; a fresh `DiscordGuildMember` is read from
/// Discord right before each role mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordGuildMember {
    /// Discord user ID.
    pub user_id: UserId,
    /// Nickname, global name, or username, in that order of preference.
    pub display_name: String,
    /// Roles currently held in the guild.
    pub roles: Vec<RoleId>,
}

impl DiscordGuildMember {
    pub fn has_role(&self, role_id: RoleId) -> bool {
        self.roles.contains(&role_id)
    }

    /// Mention markup for the member (`<@id>`).
    pub fn mention(&self) -> String {
        self.user_id.mention().to_string()
    }
}

impl From<&Member> for DiscordGuildMember {
    fn from(member: &Member) -> Self {
        Self {
            user_id: member.user.id,
            display_name: member.display_name().to_string(),
            roles: member.roles.clone(),
        }
    }
}
