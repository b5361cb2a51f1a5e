use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every `POST /` response.
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq, Clone, Copy)]
pub struct NotifyResponseDto {
    pub success: bool,
}

/// Body of the diagnostic `GET /` response.
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq, Clone)]
pub struct GreetingDto {
    pub message: String,
}

/// Documents the inbound notification body for the OpenAPI schema.
///
/// The handler parses bodies leniently from raw JSON, so this type is never
/// deserialized directly.
#[derive(Serialize, Deserialize, ToSchema, Debug, PartialEq, Clone)]
pub struct NotifyRequestDto {
    pub token: String,
    pub hostname: String,
    pub join_ip: String,
    pub num_players: u32,
    pub max_players: u32,
    pub player_name: String,
}
