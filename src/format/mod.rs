//! Building mention text and message links.
//!
//! These are the inverse of extraction: they take IDs that are already known and
//! render them in the form Discord clients understand. No validation is performed on
//! the IDs; whatever the caller passes is embedded verbatim.

use crate::model::{
    mention::MentionKind,
    message::{MessageLink, DIRECT_MESSAGE_GUILD},
};

/// Base URL of Discord message links.
pub const DISCORD_CHANNELS_URL: &str = "https://discord.com/channels";

/// Formats an ID as a mention of the given kind.
///
/// # Arguments
/// - `kind` - Mention kind to render
/// - `id` - Snowflake to mention
///
/// # Returns
/// - `String` - `<@id>`, `<@&id>` or `<#id>`
pub fn format_mention(kind: MentionKind, id: &str) -> String {
    format!("{}{}>", kind.prefix(), id)
}

/// Builds the canonical URL of a message from its IDs.
///
/// The guild segment is not checked for presence, so callers linking to a direct
/// message should pass [`DIRECT_MESSAGE_GUILD`] or use [`get_message_url`].
///
/// # Arguments
/// - `guild_id` - Guild the message belongs to
/// - `channel_id` - Channel the message was posted in
/// - `message_id` - The message itself
///
/// # Returns
/// - `String` - `https://discord.com/channels/{guild_id}/{channel_id}/{message_id}`
pub fn build_message_url(guild_id: &str, channel_id: &str, message_id: &str) -> String {
    format!(
        "{}/{}/{}/{}",
        DISCORD_CHANNELS_URL, guild_id, channel_id, message_id
    )
}

/// Builds the canonical URL of a message.
///
/// Messages without a guild are linked through the `@me` segment.
pub fn get_message_url(message: &impl MessageLink) -> String {
    let guild_id = message
        .guild_id()
        .unwrap_or_else(|| DIRECT_MESSAGE_GUILD.to_string());

    build_message_url(&guild_id, &message.channel_id(), &message.message_id())
}

#[cfg(test)]
mod test;
