//! Serenity integration.
//!
//! Converts captured IDs into Serenity's typed snowflakes and lets a Serenity
//! [`Message`] be linked with [`crate::format::get_message_url`].
//!
//! # Feature Gates
//!
//! This module is only available with the `serenity` feature flag enabled.

use serenity::all::{ChannelId, Message, RoleId, UserId};

use crate::{
    error::Result,
    extract::extract_ids,
    model::{mention::MentionKind, message::MessageLink},
    util::parse::parse_snowflake,
};

impl MessageLink for Message {
    fn message_id(&self) -> String {
        self.id.to_string()
    }

    fn channel_id(&self) -> String {
        self.channel_id.to_string()
    }

    fn guild_id(&self) -> Option<String> {
        self.guild_id.map(|id| id.to_string())
    }
}

/// Extracts IDs of one kind and converts each into a typed snowflake.
///
/// Conversion stops at the first ID that does not fit a snowflake.
///
/// # Returns
/// - `Ok(Vec<T>)` - Typed IDs in order of appearance
/// - `Err(MentionError::ParseStringId)` - An ID overflows `u64`
/// - `Err(MentionError::ZeroId)` - An ID is zero
fn typed_ids<T>(text: &str, kind: MentionKind, new: fn(u64) -> T) -> Result<Vec<T>> {
    extract_ids(text, kind)
        .into_iter()
        .map(|id| parse_snowflake(id).map(new))
        .collect::<Result<Vec<T>>>()
        .inspect_err(|e| tracing::debug!("Failed to convert {} mention: {}", kind, e))
}

/// Extracts all user mentions as Serenity [`UserId`]s.
pub fn user_ids_from_mention(text: &str) -> Result<Vec<UserId>> {
    typed_ids(text, MentionKind::User, UserId::new)
}

/// Extracts all role mentions as Serenity [`RoleId`]s.
pub fn role_ids_from_mention(text: &str) -> Result<Vec<RoleId>> {
    typed_ids(text, MentionKind::Role, RoleId::new)
}

/// Extracts all channel mentions as Serenity [`ChannelId`]s.
pub fn channel_ids_from_mention(text: &str) -> Result<Vec<ChannelId>> {
    typed_ids(text, MentionKind::Channel, ChannelId::new)
}
