//! Notification event domain model.
//!
//! A notification is built from the untrusted JSON body a game server posts. All
//! six fields are required. Game servers are loose about JSON types, so values
//! are coerced: text fields accept strings, numbers and booleans, and player
//! counts accept integers, finite floats (truncated) and numeric strings.

use serde_json::{Map, Value};

use crate::server::error::payload::PayloadError;

/// Request from a game server to announce that it is looking for players.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationEvent {
    /// Shared secret identifying the game server. Never empty.
    pub token: String,
    pub hostname: String,
    /// Address players connect to, taken from the `join_ip` key.
    pub ip: String,
    pub num_players: u32,
    pub max_players: u32,
    pub player_name: String,
}

impl NotificationEvent {
    /// Parses a raw request body.
    ///
    /// # Arguments
    /// - `body` - Raw bytes of the HTTP request body
    ///
    /// # Returns
    /// - `Ok(NotificationEvent)` - Every field present and coercible
    /// - `Err(PayloadError)` - Invalid JSON, missing or uncoercible field, or empty token
    pub fn from_slice(body: &[u8]) -> Result<Self, PayloadError> {
        let value: Value = serde_json::from_slice(body)?;
        Self::try_from(&value)
    }
}

impl TryFrom<&Value> for NotificationEvent {
    type Error = PayloadError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let object = value.as_object().ok_or(PayloadError::NotAnObject)?;

        let event = Self {
            token: text_field(object, "token")?,
            hostname: text_field(object, "hostname")?,
            ip: text_field(object, "join_ip")?,
            num_players: count_field(object, "num_players")?,
            max_players: count_field(object, "max_players")?,
            player_name: text_field(object, "player_name")?,
        };

        if event.token.is_empty() {
            return Err(PayloadError::EmptyToken);
        }

        Ok(event)
    }
}

fn field<'a>(object: &'a Map<String, Value>, name: &'static str) -> Result<&'a Value, PayloadError> {
    object.get(name).ok_or(PayloadError::MissingField(name))
}

fn text_field(object: &Map<String, Value>, name: &'static str) -> Result<String, PayloadError> {
    match field(object, name)? {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        _ => Err(PayloadError::InvalidField {
            field: name,
            reason: "expected a string",
        }),
    }
}

fn count_field(object: &Map<String, Value>, name: &'static str) -> Result<u32, PayloadError> {
    let invalid = |reason| PayloadError::InvalidField {
        field: name,
        reason,
    };

    let count = match field(object, name)? {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i
            } else if let Some(f) = n.as_f64().filter(|f| f.is_finite()) {
                // Out-of-range floats saturate and are rejected by the range check below.
                f.trunc() as i64
            } else {
                return Err(invalid("integer out of range"));
            }
        }
        Value::String(s) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| invalid("expected an integer"))?,
        _ => return Err(invalid("expected an integer")),
    };

    u32::try_from(count).map_err(|_| invalid("must be between 0 and 4294967295"))
}
