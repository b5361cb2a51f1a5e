use serde_json::{Map, Value};

/// Builder for notification request bodies.
///
/// Starts from the body a well-behaved game server sends and lets a test change,
/// retype, or drop individual fields before serializing.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::NotifyBodyBuilder;
///
/// let body = NotifyBodyBuilder::new()
///     .player_name("@everyone")
///     .without("join_ip")
///     .to_string();
/// ```
pub struct NotifyBodyBuilder {
    fields: Map<String, Value>,
}

impl NotifyBodyBuilder {
    /// Creates the body `{"token":"t","hostname":"h","join_ip":"i","num_players":1,"max_players":2,"player_name":"p"}`.
    pub fn new() -> Self {
        let mut fields = Map::new();
        fields.insert("token".to_string(), Value::from("t"));
        fields.insert("hostname".to_string(), Value::from("h"));
        fields.insert("join_ip".to_string(), Value::from("i"));
        fields.insert("num_players".to_string(), Value::from(1));
        fields.insert("max_players".to_string(), Value::from(2));
        fields.insert("player_name".to_string(), Value::from("p"));
        Self { fields }
    }

    pub fn token(self, token: &str) -> Self {
        self.field("token", token)
    }

    pub fn hostname(self, hostname: &str) -> Self {
        self.field("hostname", hostname)
    }

    pub fn join_ip(self, join_ip: &str) -> Self {
        self.field("join_ip", join_ip)
    }

    pub fn num_players(self, num_players: i64) -> Self {
        self.field("num_players", num_players)
    }

    pub fn max_players(self, max_players: i64) -> Self {
        self.field("max_players", max_players)
    }

    pub fn player_name(self, player_name: &str) -> Self {
        self.field("player_name", player_name)
    }

    /// Sets any field to any JSON value, including ones of the wrong type.
    pub fn field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(name.to_string(), value.into());
        self
    }

    /// Removes a field so the body is missing it.
    pub fn without(mut self, name: &str) -> Self {
        self.fields.remove(name);
        self
    }

    pub fn build(self) -> Value {
        Value::Object(self.fields)
    }
}

impl Default for NotifyBodyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NotifyBodyBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Value::Object(self.fields.clone()))
    }
}
