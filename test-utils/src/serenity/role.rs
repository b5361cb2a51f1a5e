//! Test factory for the Serenity `Role` a ping role is resolved from.

use serenity::all::Role;

/// Creates a guild role the way `GET /guilds/{id}/roles` returns it.
///
/// The role is mentionable with zero permissions, matching a typical
/// "looking to play" ping role.
///
/// # Arguments
/// - `role_id` - Discord role ID (snowflake)
/// - `guild_id` - Guild owning the role
/// - `name` - Role name shown in command replies
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
pub fn create_test_role(role_id: u64, guild_id: u64, name: &str) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "guild_id": guild_id.to_string(),
        "name": name,
        "color": 0x13e82e,
        "colors": {
            "primary_color": 0x13e82e,
            "secondary_color": null,
            "tertiary_color": null,
        },
        "hoist": false,
        "position": 1,
        "permissions": "0",
        "managed": false,
        "mentionable": true,
        "flags": 0,
    }))
    .expect("Failed to create test role")
}
