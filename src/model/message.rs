use serde::{Deserialize, Serialize};

/// Path segment Discord uses in place of a guild ID for direct messages.
pub const DIRECT_MESSAGE_GUILD: &str = "@me";

/// Anything that identifies a single chat message.
///
/// Implemented for [`MessageRef`] and, with the `serenity` feature enabled, for
/// `serenity::all::Message`.
pub trait MessageLink {
    /// Message snowflake.
    fn message_id(&self) -> String;

    /// Channel snowflake the message was posted in.
    fn channel_id(&self) -> String;

    /// Guild snowflake, or `None` for direct messages.
    fn guild_id(&self) -> Option<String>;
}

/// Identifiers of a message, carried as opaque strings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageRef {
    pub id: String,
    pub channel_id: String,
    pub guild_id: Option<String>,
}

impl MessageRef {
    /// Creates a reference to a message posted in a guild channel.
    pub fn new(
        guild_id: impl Into<String>,
        channel_id: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            channel_id: channel_id.into(),
            guild_id: Some(guild_id.into()),
        }
    }

    /// Creates a reference to a message in a direct message channel.
    pub fn direct(channel_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            channel_id: channel_id.into(),
            guild_id: None,
        }
    }
}

impl MessageLink for MessageRef {
    fn message_id(&self) -> String {
        self.id.clone()
    }

    fn channel_id(&self) -> String {
        self.channel_id.clone()
    }

    fn guild_id(&self) -> Option<String> {
        self.guild_id.clone()
    }
}
