//! Ping role domain model.
//!
//! The ping role is the guild role mentioned by every announcement and handed out
//! by the `!add` and `!remove` commands.

use serenity::all::{Mentionable, Role, RoleId};

/// Guild role mentioned in announcements.
#[derive(Debug, Clone, PartialEq)]
pub struct PingRole {
    /// Discord role ID.
    pub role_id: RoleId,
    /// Role display name, used in replies to chat users.
    pub name: String,
}

impl PingRole {
    /// Mention markup that pings every holder of the role (`<@&id>`).
    pub fn mention(&self) -> String {
        self.role_id.mention().to_string()
    }
}

impl From<&Role> for PingRole {
    fn from(role: &Role) -> Self {
        Self {
            role_id: role.id,
            name: role.name.clone(),
        }
    }
}
